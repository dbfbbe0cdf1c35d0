// tests/dedup.rs
//
// Combine + dedup stages.
//
use std::collections::HashSet;

use jobsweep::model::JobPosting;
use jobsweep::pipeline::{combine, dedup};

fn job(url: &str, company: &str) -> JobPosting {
    JobPosting::new("indeed", "Software Engineer Intern", url).with_company(company)
}

fn urls(rows: &[JobPosting]) -> Vec<&str> {
    rows.iter().map(|r| r.job_url.as_str()).collect()
}

/// 40 rows over 13 distinct URLs, spread across 4 tables.
fn overlapping_tables() -> Vec<Vec<JobPosting>> {
    (0..4)
        .map(|t| {
            (0..10)
                .map(|i| job(&format!("https://x/{}", (t * 7 + i) % 13), &format!("co{}", t)))
                .collect()
        })
        .collect()
}

#[test]
fn first_occurrence_wins() {
    let rows = vec![job("A", "X"), job("A", "Y"), job("B", "Z")];
    let d = dedup(rows);

    assert_eq!(d.rows, vec![job("A", "X"), job("B", "Z")]);
    assert_eq!(d.before, 3);
    assert_eq!(d.removed, 1);
    assert_eq!(d.after(), 2);
}

#[test]
fn result_urls_are_distinct_and_counts_add_up() {
    let combined = combine(overlapping_tables()).unwrap();
    let before = combined.len();
    let d = dedup(combined);

    let distinct: HashSet<&str> = urls(&d.rows).into_iter().collect();
    assert_eq!(distinct.len(), d.rows.len());
    assert_eq!(d.rows.len(), 13);
    assert_eq!(d.before, before);
    assert_eq!(d.rows.len(), before - d.removed);
}

#[test]
fn dedup_is_idempotent() {
    let once = dedup(combine(overlapping_tables()).unwrap());
    let twice = dedup(once.rows.clone());
    assert_eq!(twice.rows, once.rows);
    assert_eq!(twice.removed, 0);
}

#[test]
fn earliest_table_copy_is_kept() {
    let tables = vec![
        vec![job("u1", "first"), job("u2", "first")],
        vec![job("u2", "second"), job("u3", "second")],
    ];
    let d = dedup(combine(tables).unwrap());
    assert_eq!(urls(&d.rows), vec!["u1", "u2", "u3"]);
    assert_eq!(d.rows[1].company.as_deref(), Some("first"));
}

#[test]
fn disjoint_tables_survive_untouched() {
    let a = vec![job("a1", "A"), job("a2", "A")];
    let b = vec![job("b1", "B"), job("b2", "B"), job("b3", "B")];
    let mut concat = a.clone();
    concat.extend(b.clone());

    let d = dedup(combine(vec![a, b]).unwrap());
    assert_eq!(d.rows, concat);
    assert_eq!(d.removed, 0);
}

#[test]
fn url_match_is_exact() {
    // Trailing slash / case are different postings as far as identity goes.
    let rows = vec![job("https://x/1", "A"), job("https://x/1/", "A"), job("HTTPS://X/1", "A")];
    assert_eq!(dedup(rows).removed, 0);
}

#[test]
fn combine_nothing_is_none() {
    assert!(combine(Vec::new()).is_none());
}

#[test]
fn combine_keeps_table_then_row_order() {
    let c = combine(vec![vec![job("1", "a"), job("2", "a")], vec![job("3", "b")]]).unwrap();
    assert_eq!(urls(&c), vec!["1", "2", "3"]);
}
