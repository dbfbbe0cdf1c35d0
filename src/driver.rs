// src/driver.rs
//! Query driver: one backend call per (location, term) pair, strictly in order.
//!
//! Failures never leave this module as errors. Each call is folded into a
//! `TaskOutcome`, reported, and the sweep moves on to the next task.

use crate::{
    config::options::SearchOptions,
    model::{JobPosting, SearchTask},
    progress::Progress,
    search::{JobSearch, SearchError, SearchQuery},
};

/// What one task produced.
#[derive(Debug)]
pub enum TaskOutcome {
    Found(Vec<JobPosting>),
    Empty,
    Failed(SearchError),
}

impl TaskOutcome {
    pub fn from_result(res: Result<Vec<JobPosting>, SearchError>) -> Self {
        match res {
            Ok(rows) if rows.is_empty() => TaskOutcome::Empty,
            Ok(rows) => TaskOutcome::Found(rows),
            Err(e) => TaskOutcome::Failed(e),
        }
    }

    /// Rows contributed to the combined table (failures count as zero).
    pub fn len(&self) -> usize {
        match self {
            TaskOutcome::Found(rows) => rows.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result tables of a full sweep. Only non-empty tables are kept.
#[derive(Debug, Default)]
pub struct Collected {
    pub tables: Vec<Vec<JobPosting>>,
    pub total_found: usize,
    pub tasks_run: usize,
    pub failed: usize,
}

/// Cartesian product, outer = location, inner = term. Indices start at 1.
pub fn plan_tasks<L, T>(locations: &[L], terms: &[T]) -> Vec<SearchTask>
where
    L: AsRef<str>,
    T: AsRef<str>,
{
    let mut out = Vec::with_capacity(locations.len() * terms.len());
    for location in locations {
        for term in terms {
            out.push(SearchTask {
                index: out.len() + 1,
                search_term: s!(term.as_ref()),
                location: s!(location.as_ref()),
            });
        }
    }
    out
}

pub fn run_task<B>(backend: &mut B, task: &SearchTask, opts: &SearchOptions) -> TaskOutcome
where
    B: JobSearch + ?Sized,
{
    let query = SearchQuery::for_task(task, opts);
    TaskOutcome::from_result(backend.search(&query))
}

/// Run every planned task and keep the non-empty result tables, in order.
pub fn collect<B>(
    backend: &mut B,
    opts: &SearchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Collected
where
    B: JobSearch + ?Sized,
{
    let tasks = opts.tasks();
    let total = tasks.len();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }
    log::info!(
        "Sweep: {} terms x {} locations = {} searches",
        opts.terms.len(), opts.locations.len(), total
    );

    let mut out = Collected::default();
    let mut current_location: Option<&str> = None;

    for task in &tasks {
        if current_location != Some(task.location.as_str()) {
            current_location = Some(task.location.as_str());
            if let Some(p) = progress.as_deref_mut() {
                p.location(&task.location);
            }
        }
        if let Some(p) = progress.as_deref_mut() {
            p.task_started(task, total);
        }

        let outcome = run_task(backend, task, opts);
        out.tasks_run += 1;

        match &outcome {
            TaskOutcome::Found(rows) => log::info!(
                "[{}/{}] '{}' @ {}: {} jobs",
                task.index, total, task.search_term, task.location, rows.len()
            ),
            TaskOutcome::Empty => log::info!(
                "[{}/{}] '{}' @ {}: none",
                task.index, total, task.search_term, task.location
            ),
            TaskOutcome::Failed(e) => {
                out.failed += 1;
                log::error!(
                    "[{}/{}] '{}' @ {}: {}",
                    task.index, total, task.search_term, task.location, e
                );
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.task_done(task, &outcome);
        }

        if let TaskOutcome::Found(rows) = outcome {
            out.total_found += rows.len();
            out.tables.push(rows);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish(out.total_found);
    }
    out
}
