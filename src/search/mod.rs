// src/search/mod.rs
//! Seam to the job-search backend.
//!
//! The pipeline only knows `JobSearch`: hand it a `SearchQuery`, get back the
//! postings or a `SearchError`. `ApiSearch` is the HTTP client used by the CLI;
//! tests plug in closures.

use serde::Serialize;
use thiserror::Error;

use crate::config::options::SearchOptions;
use crate::model::{JobPosting, SearchTask, Site};

pub mod api;

pub use api::ApiSearch;

/// Everything the backend needs for one call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchQuery {
    #[serde(rename = "site_name")]
    pub sites: Vec<Site>,
    pub search_term: String,
    pub location: String,
    pub distance: u32,
    pub results_wanted: u32,
    pub hours_old: u32,
    #[serde(rename = "country_indeed")]
    pub country: String,
    pub verbose: u8,
}

impl SearchQuery {
    pub fn for_task(task: &SearchTask, opts: &SearchOptions) -> Self {
        Self {
            sites: opts.sites.clone(),
            search_term: task.search_term.clone(),
            location: task.location.clone(),
            distance: opts.distance,
            results_wanted: opts.results_wanted,
            hours_old: opts.hours_old,
            country: opts.country.clone(),
            verbose: opts.verbose,
        }
    }
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode backend response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Backend(String),
}

pub trait JobSearch {
    fn search(&mut self, query: &SearchQuery) -> Result<Vec<JobPosting>, SearchError>;
}

impl<F> JobSearch for F
where
    F: FnMut(&SearchQuery) -> Result<Vec<JobPosting>, SearchError>,
{
    fn search(&mut self, query: &SearchQuery) -> Result<Vec<JobPosting>, SearchError> {
        self(query)
    }
}
