// src/report.rs
//! Human-readable console report. Each section renders to a `String`; the
//! runner and `ConsoleProgress` decide when to print.

use std::fmt::Write as _;

use crate::config::consts::{LISTING_LIMIT, MISSING, PREVIEW_PER_TASK, TOP_COMPANIES, TOP_LOCATIONS};
use crate::config::options::SearchOptions;
use crate::export::ExportTable;
use crate::model::{present, JobPosting};
use crate::pipeline::Deduped;
use crate::stats::{self, Counts, LocationCounts};

/* ---------------- Helpers ---------------- */

/// Title line between two '=' rules.
pub fn heading(title: &str) -> String {
    format!("{}\n{}\n{}", rule!(), title, rule!())
}

/// Whole dollars with thousands separators: 52000.4 → "52,000".
pub fn fmt_amount(v: f64) -> String {
    let n = v.round() as i64;
    let digits = n.unsigned_abs().to_string();
    let mut out = s!();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n < 0 { format!("-{}", out) } else { out }
}

pub fn location_label(job: &JobPosting) -> String {
    if let Some(loc) = present(&job.location) {
        return s!(loc);
    }
    let city = present(&job.city);
    let state = present(&job.state);
    if city.is_none() && state.is_none() {
        return s!(MISSING);
    }
    format!("{}, {}", city.unwrap_or(MISSING), state.unwrap_or(MISSING))
}

/// `$min - $max interval`, `$min+ interval`, or nothing.
pub fn salary_label(job: &JobPosting) -> Option<String> {
    let interval = present(&job.interval).unwrap_or("");
    let line = match (job.min_amount, job.max_amount) {
        (Some(lo), Some(hi)) => format!("${} - ${} {}", fmt_amount(lo), fmt_amount(hi), interval),
        (Some(lo), None) => format!("${}+ {}", fmt_amount(lo), interval),
        _ => return None,
    };
    Some(s!(line.trim_end()))
}

/* ---------------- Per-record ---------------- */

/// One posting, as shown both while scraping and in the final listing.
pub fn format_posting(job: &JobPosting, index: usize) -> String {
    let mut out = s!();
    let _ = writeln!(out, "{}. {}", index, job.title);
    let _ = writeln!(out, "   Company: {}", present(&job.company).unwrap_or(MISSING));
    let _ = writeln!(out, "   Location: {}", location_label(job));
    let _ = writeln!(out, "   Site: {}", job.site.to_uppercase());
    let _ = writeln!(out, "   Type: {}", present(&job.job_type).unwrap_or(MISSING));
    if let Some(salary) = salary_label(job) {
        let _ = writeln!(out, "   Salary: {}", salary);
    }
    let _ = writeln!(out, "   URL: {}", job.job_url);
    if let Some(date) = job.date_posted {
        let _ = writeln!(out, "   Posted: {}", date);
    }
    out
}

/// Found-line plus the first few postings of one search's result.
pub fn task_preview(rows: &[JobPosting]) -> String {
    let mut out = format!("   ✓ Found {} jobs", rows.len());
    for (i, job) in rows.iter().take(PREVIEW_PER_TASK).enumerate() {
        let _ = write!(out, "\n\n{}", format_posting(job, i + 1).trim_end());
    }
    if rows.len() > PREVIEW_PER_TASK {
        let _ = write!(out, "\n\n   ... and {} more jobs", rows.len() - PREVIEW_PER_TASK);
    }
    out
}

/* ---------------- Sections ---------------- */

pub fn banner(opts: &SearchOptions) -> String {
    let mut out = heading("BATCH JOB SCRAPER - INTERNSHIP EDITION");
    let _ = write!(
        out,
        "\n\nSearching for {} job types across {} locations\nTotal searches: {}\nResults per search: {}\n{}",
        opts.terms.len(),
        opts.locations.len(),
        opts.total_tasks(),
        opts.results_wanted,
        rule!()
    );
    out
}

pub fn search_complete(total_found: usize) -> String {
    heading(&format!("SEARCH COMPLETE - TOTAL RESULTS: {} jobs", total_found))
}

pub fn no_jobs() -> String {
    s!("\n✗ No jobs found in any search")
}

pub fn dedup_summary(d: &Deduped) -> String {
    format!(
        "\nUnique jobs after deduplication: {}\nDuplicates removed: {}",
        d.after(),
        d.removed
    )
}

pub fn site_summary(counts: &Counts<String>) -> String {
    let mut out = heading("SUMMARY BY SITE");
    for (site, n) in counts {
        let _ = write!(out, "\n  {:<15} {:>4} jobs", site.to_uppercase(), n);
    }
    out
}

pub fn location_summary(counts: &LocationCounts) -> String {
    let mut out = heading("SUMMARY BY LOCATION");
    match counts {
        LocationCounts::ByLocation(c) => {
            for (loc, n) in stats::top(c, TOP_LOCATIONS) {
                let _ = write!(out, "\n  {:<40} {:>4} jobs", loc, n);
            }
        }
        LocationCounts::ByCityState(c) => {
            for ((city, state), n) in stats::top(c, TOP_LOCATIONS) {
                let _ = write!(out, "\n  {}, {:<20} {:>4} jobs", city, state, n);
            }
        }
        LocationCounts::Unavailable => out.push_str("\n  No location data available"),
    }
    out
}

pub fn company_summary(counts: &Counts<String>) -> String {
    let mut out = heading("TOP COMPANIES");
    for (company, n) in stats::top(counts, TOP_COMPANIES) {
        let _ = write!(out, "\n  {:<50} {:>4} jobs", company, n);
    }
    out
}

pub fn export_summary(path: &std::path::Path, table: &ExportTable) -> String {
    format!(
        "{}\n✓ Saved {} unique jobs to {}\n✓ CSV contains: {}\n{}",
        rule!(),
        table.len(),
        path.display(),
        table.columns.join(", "),
        rule!()
    )
}

/// First `LISTING_LIMIT` rows plus a pointer to the CSV for the rest.
pub fn listing(rows: &[JobPosting]) -> String {
    let mut out = heading(&format!("ALL JOBS LISTING (First {})", LISTING_LIMIT));
    for (i, job) in rows.iter().take(LISTING_LIMIT).enumerate() {
        let _ = write!(out, "\n\n{}", format_posting(job, i + 1).trim_end());
    }
    if rows.len() > LISTING_LIMIT {
        let _ = write!(
            out,
            "\n\n... and {} more jobs (see CSV file for complete list)",
            rows.len() - LISTING_LIMIT
        );
    }
    out
}
