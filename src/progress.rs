// src/progress.rs
use crate::driver::TaskOutcome;
use crate::model::SearchTask;
use crate::report::task_preview;

/// Progress reporting for the search sweep.
/// The CLI prints; library callers and tests usually pass `None`.
pub trait Progress {
    /// Called at the start with the number of planned tasks.
    fn begin(&mut self, _total: usize) {}

    /// A new location block starts (outer loop).
    fn location(&mut self, _location: &str) {}

    fn task_started(&mut self, _task: &SearchTask, _total: usize) {}

    fn task_done(&mut self, _task: &SearchTask, _outcome: &TaskOutcome) {}

    /// Called once after the last task, with the raw (pre-dedup) total.
    fn finish(&mut self, _total_found: usize) {}
}

/// Prints the per-task lines and a short preview of each non-empty result.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn location(&mut self, location: &str) {
        println!("\n\n📍 LOCATION: {}", location);
        println!("{}", rule!('-'));
    }

    fn task_started(&mut self, task: &SearchTask, total: usize) {
        println!("\n[{}/{}] Searching: {}", task.index, total, task.search_term);
    }

    fn task_done(&mut self, _task: &SearchTask, outcome: &TaskOutcome) {
        match outcome {
            TaskOutcome::Found(rows) => println!("{}", task_preview(rows)),
            TaskOutcome::Empty => println!("   ✗ No jobs found"),
            TaskOutcome::Failed(e) => {
                println!("   ✗ Error: {}", e);
                println!("   ✗ No jobs found");
            }
        }
    }
}

/// Records every callback; handy for asserting the sweep order.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub events: Vec<String>,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) {
        self.events.push(format!("begin {}", total));
    }
    fn location(&mut self, location: &str) {
        self.events.push(format!("location {}", location));
    }
    fn task_started(&mut self, task: &SearchTask, total: usize) {
        self.events.push(format!("start {}/{} {}", task.index, total, task.search_term));
    }
    fn task_done(&mut self, task: &SearchTask, outcome: &TaskOutcome) {
        let what = match outcome {
            TaskOutcome::Found(rows) => format!("found {}", rows.len()),
            TaskOutcome::Empty => s!("empty"),
            TaskOutcome::Failed(_) => s!("failed"),
        };
        self.events.push(format!("done {} {}", task.index, what));
    }
    fn finish(&mut self, total_found: usize) {
        self.events.push(format!("finish {}", total_found));
    }
}
