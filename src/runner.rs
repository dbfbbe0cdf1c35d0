// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::{
    config::options::AppOptions,
    driver, export, file, pipeline, report, stats,
    progress::Progress,
    search::JobSearch,
};

/// Summary of what a run produced.
#[derive(Debug, Default, PartialEq)]
pub struct RunSummary {
    pub total_found: usize,
    pub unique: usize,
    pub duplicates_removed: usize,
    pub failed_tasks: usize,
    pub csv: Option<PathBuf>,
}

/// Top-level pipeline: sweep → combine → dedup → report → export → listing.
///
/// `progress` can be None (no per-task output) or Some(&mut impl Progress).
/// When `echo` is false nothing is printed to stdout, which is what tests want.
pub fn run<B>(
    opts: &AppOptions,
    backend: &mut B,
    progress: Option<&mut dyn Progress>,
    echo: bool,
) -> Result<RunSummary, Box<dyn Error>>
where
    B: JobSearch + ?Sized,
{
    let say = |text: String| if echo { println!("{}", text) };

    say(report::banner(&opts.search));

    let collected = driver::collect(backend, &opts.search, progress);
    let mut summary = RunSummary {
        total_found: collected.total_found,
        failed_tasks: collected.failed,
        ..Default::default()
    };

    say(s!("\n"));
    say(report::search_complete(collected.total_found));

    let Some(combined) = pipeline::combine(collected.tables) else {
        log::warn!("No jobs found in any of {} searches", collected.tasks_run);
        say(report::no_jobs());
        return Ok(summary);
    };

    let deduped = pipeline::dedup(combined);
    summary.unique = deduped.after();
    summary.duplicates_removed = deduped.removed;
    log::info!(
        "Dedup: {} rows → {} unique ({} duplicates)",
        deduped.before, deduped.after(), deduped.removed
    );
    say(report::dedup_summary(&deduped));

    say(format!("\n{}", report::site_summary(&stats::count_by_site(&deduped.rows))));
    say(format!("\n{}", report::location_summary(&stats::count_by_location(&deduped.rows))));
    say(format!("\n{}", report::company_summary(&stats::count_by_company(&deduped.rows))));

    let table = export::project(&deduped.rows);
    let path = file::write_export(&opts.export, &table)?;
    log::info!("Wrote {} rows to {}", table.len(), path.display());
    say(format!("\n{}", report::export_summary(&path, &table)));

    say(format!("\n\n{}", report::listing(&deduped.rows)));

    summary.csv = Some(path);
    Ok(summary)
}
