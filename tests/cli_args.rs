// tests/cli_args.rs
use std::path::PathBuf;

use jobsweep::cli::{execute, parse_args, Command};
use jobsweep::model::Site;

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn run_opts(v: &[&str]) -> jobsweep::config::options::AppOptions {
    match parse_args(args(v)).unwrap() {
        Command::Run(o) => o,
        other => panic!("expected Run, got {:?}", other),
    }
}

#[test]
fn no_args_runs_builtin_sweep() {
    let o = run_opts(&[]);
    assert_eq!(o.search.terms.len(), 5);
    assert_eq!(o.search.locations.len(), 6);
    assert_eq!(o.export.file_prefix, "internship_jobs");
}

#[test]
fn repeated_terms_replace_defaults() {
    let o = run_opts(&["-t", "data intern", "--term", "ml intern", "-l", "Austin, TX"]);
    assert_eq!(o.search.terms, vec!["data intern", "ml intern"]);
    assert_eq!(o.search.locations, vec!["Austin, TX"]);
    assert_eq!(o.search.tasks().len(), 2);
}

#[test]
fn numeric_and_site_flags() {
    let o = run_opts(&[
        "-n", "50", "--hours-old", "72", "--distance", "10",
        "--site", "Glassdoor", "--site", "zip-recruiter", "--site", "glassdoor",
        "--country", "Canada", "-o", "out/", "--prefix", "sweep",
    ]);
    assert_eq!(o.search.results_wanted, 50);
    assert_eq!(o.search.hours_old, 72);
    assert_eq!(o.search.distance, 10);
    assert_eq!(o.search.sites, vec![Site::Glassdoor, Site::ZipRecruiter]);
    assert_eq!(o.search.country, "Canada");
    assert_eq!(o.export.out_dir, PathBuf::from(format!("out{}", std::path::MAIN_SEPARATOR)));
    assert_eq!(o.export.file_prefix, "sweep");
}

#[test]
fn backend_flags() {
    let o = run_opts(&["--api-url", "http://jobs.internal:9000/", "--api-key", "k"]);
    assert_eq!(o.backend.api_url, "http://jobs.internal:9000/");
    assert_eq!(o.backend.api_key.as_deref(), Some("k"));
}

#[test]
fn list_tasks_and_help() {
    assert!(matches!(parse_args(args(&["--list-tasks"])).unwrap(), Command::ListTasks(_)));
    assert_eq!(parse_args(args(&["-h"])).unwrap(), Command::Help);
}

#[test]
fn bad_input_is_rejected() {
    assert!(parse_args(args(&["--bogus"])).is_err());
    assert!(parse_args(args(&["--results"])).is_err());
    assert!(parse_args(args(&["--results", "0"])).is_err());
    assert!(parse_args(args(&["--results", "many"])).is_err());
    assert!(parse_args(args(&["--site", "monster"])).is_err());
    assert!(parse_args(args(&["--prefix", " "])).is_err());
}

#[test]
fn help_is_written_to_the_given_output() {
    let mut out: Vec<u8> = Vec::new();
    execute(Command::Help, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("jobsweep"));
    assert!(text.contains("Usage: jobsweep [options]"));
}

#[test]
fn list_tasks_prints_one_line_per_search() {
    let cmd = parse_args(args(&["--list-tasks", "-t", "a", "-t", "b", "-l", "NYC"])).unwrap();
    let mut out: Vec<u8> = Vec::new();
    execute(cmd, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1,NYC,a\n2,NYC,b\n");
}

#[test]
fn unknown_site_lists_the_valid_ones() {
    let err = parse_args(args(&["--site", "monster"])).unwrap_err().to_string();
    assert!(err.contains("Unknown site: monster"));
    for site in Site::ALL {
        assert!(err.contains(site.as_str()));
    }
}
