// src/config/consts.rs
use crate::model::Site;

// Search sweep (outer loop: locations, inner loop: terms)
pub const JOB_SEARCHES: &[&str] = &[
    "software engineer intern",
    "software engineering intern summer ",
    "software developer intern",
    "project manager intern",
    "product manager intern",
];

pub const LOCATIONS: &[&str] = &[
    "Cambridge, MA",
    "Boston, MA",
    "New York, NY",
    "Remote",
    "Massachusetts",
    "NYC",
];

// Fixed per-call parameters
pub const RESULTS_PER_SEARCH: u32 = 20;
pub const HOURS_OLD: u32 = 2000;
pub const DISTANCE_MILES: u32 = 50;
pub const COUNTRY: &str = "USA";
pub const VERBOSITY: u8 = 0; // backend: errors only
pub const SITES: &[Site] = &[Site::Indeed, Site::LinkedIn, Site::ZipRecruiter];

// Backend
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const API_URL_ENV: &str = "JOBSPY_API_URL";
pub const API_KEY_ENV: &str = "JOBSPY_API_KEY";
pub const SEARCH_PATH: &str = "/api/v1/search_jobs";

// Export
pub const OUTPUT_COLUMNS: &[&str] = &["company", "title", "job_url_direct"];
pub const DEFAULT_FILE_PREFIX: &str = "internship_jobs";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

// Report
pub const PREVIEW_PER_TASK: usize = 3;
pub const LISTING_LIMIT: usize = 50;
pub const TOP_LOCATIONS: usize = 10;
pub const TOP_COMPANIES: usize = 15;
pub const MISSING: &str = "N/A";

// Local log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "jobsweep.log";
