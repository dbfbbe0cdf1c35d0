// src/config/options.rs
use std::path::PathBuf;

use chrono::{DateTime, Local};

use super::consts::*;
use crate::model::{SearchTask, Site};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub search: SearchOptions,
    pub export: ExportOptions,
    pub backend: BackendOptions,
}

/* ---------------- Search sweep ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub terms: Vec<String>,
    pub locations: Vec<String>,
    pub results_wanted: u32,
    pub hours_old: u32,
    pub distance: u32,
    pub sites: Vec<Site>,
    pub country: String,
    pub verbose: u8,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            terms: JOB_SEARCHES.iter().map(|t| s!(*t)).collect(),
            locations: LOCATIONS.iter().map(|l| s!(*l)).collect(),
            results_wanted: RESULTS_PER_SEARCH,
            hours_old: HOURS_OLD,
            distance: DISTANCE_MILES,
            sites: SITES.to_vec(),
            country: s!(COUNTRY),
            verbose: VERBOSITY,
        }
    }
}

impl SearchOptions {
    pub fn total_tasks(&self) -> usize {
        self.terms.len() * self.locations.len()
    }

    pub fn tasks(&self) -> Vec<SearchTask> {
        crate::driver::plan_tasks(&self.locations, &self.terms)
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub file_prefix: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::new(), // working directory
            file_prefix: s!(DEFAULT_FILE_PREFIX),
        }
    }
}

impl ExportOptions {
    /// `<out_dir>/<prefix>_<YYYYMMDD_HHMMSS>.csv` for the given instant.
    pub fn out_path_at(&self, at: DateTime<Local>) -> PathBuf {
        let stamp = at.format(TIMESTAMP_FORMAT);
        self.out_dir.join(format!("{}_{}.csv", self.file_prefix, stamp))
    }
}

/* ---------------- Backend ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendOptions {
    pub api_url: String,
    pub api_key: Option<String>,
}

impl Default for BackendOptions {
    /// Constants, overridden by `JOBSPY_API_URL` / `JOBSPY_API_KEY` when set.
    fn default() -> Self {
        let api_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| s!(DEFAULT_API_URL));
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());
        Self { api_url, api_key }
    }
}
