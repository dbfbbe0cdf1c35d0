// src/pipeline.rs
//! Aggregate + dedup stages.

use indexmap::IndexMap;

use crate::model::JobPosting;

/// Concatenate result tables in task order. `None` when nothing was collected.
pub fn combine(tables: Vec<Vec<JobPosting>>) -> Option<Vec<JobPosting>> {
    if tables.is_empty() {
        return None;
    }
    let cap = tables.iter().map(Vec::len).sum();
    let mut combined = Vec::with_capacity(cap);
    for mut t in tables {
        combined.append(&mut t);
    }
    Some(combined)
}

/// Deduplicated table plus the bookkeeping the report prints.
#[derive(Clone, Debug, PartialEq)]
pub struct Deduped {
    pub rows: Vec<JobPosting>,
    pub before: usize,
    pub removed: usize,
}

impl Deduped {
    pub fn after(&self) -> usize {
        self.rows.len()
    }
}

/// Drop rows whose `job_url` was already seen. First occurrence wins and
/// survivors keep their first-occurrence order.
pub fn dedup(rows: Vec<JobPosting>) -> Deduped {
    let before = rows.len();
    let mut by_url: IndexMap<String, JobPosting> = IndexMap::with_capacity(before);

    for row in rows {
        if !by_url.contains_key(&row.job_url) {
            by_url.insert(row.job_url.clone(), row);
        }
    }

    let rows: Vec<JobPosting> = by_url.into_values().collect();
    Deduped { removed: before - rows.len(), before, rows }
}
