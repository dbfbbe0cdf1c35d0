// src/search/api.rs
// Blocking client for a JobSpy API service (POST /api/v1/search_jobs).

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use super::{JobSearch, SearchError, SearchQuery};
use crate::config::consts::SEARCH_PATH;
use crate::config::options::BackendOptions;
use crate::model::JobPosting;

const USER_AGENT: &str = concat!("jobsweep/", env!("CARGO_PKG_VERSION"));
const API_KEY_HEADER: &str = "x-api-key";
const BODY_SNIPPET: usize = 300;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    count: Option<usize>,
    #[serde(default)]
    jobs: Vec<JobPosting>,
}

pub struct ApiSearch {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl ApiSearch {
    pub fn new(opts: &BackendOptions) -> Result<Self, SearchError> {
        // Scrapes can take minutes; this program imposes no deadline of its own.
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint_url(&opts.api_url),
            api_key: opts.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl JobSearch for ApiSearch {
    fn search(&mut self, query: &SearchQuery) -> Result<Vec<JobPosting>, SearchError> {
        let mut req = self.client.post(&self.endpoint).json(query);
        if let Some(key) = &self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }

        let resp = req.send()?;
        let status = resp.status();
        let body = resp.text()?;

        if !status.is_success() {
            let body: String = body.chars().take(BODY_SNIPPET).collect();
            return Err(SearchError::Status { status: status.as_u16(), body });
        }

        let parsed = parse_response(&body)?;
        log::debug!(
            "{} @ {}: backend count={:?}, decoded={}",
            query.search_term, query.location, parsed.count, parsed.jobs.len()
        );
        Ok(parsed.jobs)
    }
}

fn parse_response(body: &str) -> Result<SearchResponse, SearchError> {
    Ok(serde_json::from_str(body)?)
}

/// Decode the jobs array of a search response body.
pub fn decode_jobs(body: &str) -> Result<Vec<JobPosting>, SearchError> {
    parse_response(body).map(|r| r.jobs)
}

/// Base URL (with or without trailing '/') + search path.
pub fn endpoint_url(base: &str) -> String {
    format!("{}{}", base.trim().trim_end_matches('/'), SEARCH_PATH)
}
