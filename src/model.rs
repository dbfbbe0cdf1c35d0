// src/model.rs
//! Row and task types shared by every pipeline stage.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One posting as returned by the search backend.
///
/// Only `site`, `title` and `job_url` are always there; everything else is
/// whatever the source site happened to expose. Identity is `job_url`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub site: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub min_amount: Option<f64>,
    #[serde(default)]
    pub max_amount: Option<f64>,
    #[serde(default)]
    pub interval: Option<String>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub date_posted: Option<NaiveDate>,
    pub job_url: String,
    #[serde(default)]
    pub job_url_direct: Option<String>,
}

impl JobPosting {
    pub fn new(site: &str, title: &str, job_url: &str) -> Self {
        Self {
            site: s!(site),
            title: s!(title),
            job_url: s!(job_url),
            ..Default::default()
        }
    }

    pub fn with_company(mut self, company: &str) -> Self {
        self.company = Some(s!(company));
        self
    }

    pub fn with_location(mut self, location: &str) -> Self {
        self.location = Some(s!(location));
        self
    }

    /// Employer link if it carries anything, else the aggregator link.
    pub fn direct_or_aggregator_url(&self) -> &str {
        present(&self.job_url_direct).unwrap_or(self.job_url.as_str())
    }
}

/// `Some(&str)` only for non-blank values. Backends send `""` and `null`
/// interchangeably for "unknown".
pub fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

// Backends disagree on date shapes ("2024-05-01", "2024-05-01T00:00:00", null,
// epoch millis). Anything that doesn't start with a calendar date is dropped.
fn lenient_date<'de, D>(de: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(de)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => {
            let head = s.get(..10).unwrap_or(s.as_str());
            NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
        }
        _ => None,
    })
}

/* ---------------- Source sites ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Site {
    Indeed,
    LinkedIn,
    ZipRecruiter,
    Glassdoor,
    Google,
    Bayt,
    Naukri,
}

impl Site {
    pub const ALL: [Site; 7] = [
        Site::Indeed,
        Site::LinkedIn,
        Site::ZipRecruiter,
        Site::Glassdoor,
        Site::Google,
        Site::Bayt,
        Site::Naukri,
    ];

    /// Identifier as the backend spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Site::Indeed => "indeed",
            Site::LinkedIn => "linkedin",
            Site::ZipRecruiter => "zip_recruiter",
            Site::Glassdoor => "glassdoor",
            Site::Google => "google",
            Site::Bayt => "bayt",
            Site::Naukri => "naukri",
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Site {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match norm.as_str() {
            "indeed" => Ok(Site::Indeed),
            "linkedin" => Ok(Site::LinkedIn),
            "zip_recruiter" | "ziprecruiter" => Ok(Site::ZipRecruiter),
            "glassdoor" => Ok(Site::Glassdoor),
            "google" => Ok(Site::Google),
            "bayt" => Ok(Site::Bayt),
            "naukri" => Ok(Site::Naukri),
            other => {
                let known: Vec<&str> = Site::ALL.iter().map(Site::as_str).collect();
                Err(format!("Unknown site: {} (expected one of: {})", other, known.join(", ")))
            }
        }
    }
}

impl Serialize for Site {
    fn serialize<S: serde::Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(self.as_str())
    }
}

/* ---------------- Tasks ---------------- */

/// One (search term, location) pair, numbered from 1 in execution order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTask {
    pub index: usize,
    pub search_term: String,
    pub location: String,
}
