// src/lib.rs
//! Batch job-search sweep: run every (location, term) search against a
//! JobSpy backend, merge and dedup the postings by URL, print a summary and
//! write a timestamped CSV.

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod driver;
pub mod export;
pub mod file;
pub mod logger;
pub mod model;
pub mod pipeline;
pub mod progress;
pub mod report;
pub mod runner;
pub mod search;
pub mod stats;
