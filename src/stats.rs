// src/stats.rs
//! Grouped counts for the summary report.
//!
//! Every grouping is total: rows lacking the grouping value land in an `N/A`
//! bucket, so each `Counts` sums to the number of rows it was built from.
//! Ordering is count-descending; ties keep first-occurrence order.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::config::consts::MISSING;
use crate::model::{present, JobPosting};

pub type Counts<K> = Vec<(K, usize)>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocationCounts {
    ByLocation(Counts<String>),
    ByCityState(Counts<(String, String)>),
    Unavailable,
}

impl LocationCounts {
    pub fn total(&self) -> usize {
        match self {
            LocationCounts::ByLocation(c) => total(c),
            LocationCounts::ByCityState(c) => total(c),
            LocationCounts::Unavailable => 0,
        }
    }
}

pub fn tally<K, F>(rows: &[JobPosting], mut key: F) -> Counts<K>
where
    K: Hash + Eq,
    F: FnMut(&JobPosting) -> K,
{
    let mut map: IndexMap<K, usize> = IndexMap::new();
    for row in rows {
        *map.entry(key(row)).or_insert(0) += 1;
    }
    let mut out: Counts<K> = map.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1)); // stable
    out
}

pub fn total<K>(counts: &Counts<K>) -> usize {
    counts.iter().map(|(_, n)| n).sum()
}

pub fn top<K>(counts: &Counts<K>, n: usize) -> &[(K, usize)] {
    &counts[..counts.len().min(n)]
}

fn or_missing(v: Option<&str>) -> String {
    s!(v.unwrap_or(MISSING))
}

pub fn count_by_site(rows: &[JobPosting]) -> Counts<String> {
    tally(rows, |r| {
        let site = r.site.trim();
        if site.is_empty() { s!(MISSING) } else { s!(site) }
    })
}

/// `location` if any row has one; else `(city, state)` if any row has both;
/// else nothing to group by.
pub fn count_by_location(rows: &[JobPosting]) -> LocationCounts {
    if rows.iter().any(|r| present(&r.location).is_some()) {
        return LocationCounts::ByLocation(tally(rows, |r| or_missing(present(&r.location))));
    }
    let has_city_state = rows
        .iter()
        .any(|r| present(&r.city).is_some() && present(&r.state).is_some());
    if has_city_state {
        return LocationCounts::ByCityState(tally(rows, |r| {
            (or_missing(present(&r.city)), or_missing(present(&r.state)))
        }));
    }
    LocationCounts::Unavailable
}

pub fn count_by_company(rows: &[JobPosting]) -> Counts<String> {
    tally(rows, |r| or_missing(present(&r.company)))
}
