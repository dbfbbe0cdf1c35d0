// src/cli.rs
use std::{env, error::Error, io::{self, Write}, path::PathBuf};

use crate::config::options::AppOptions;
use crate::file::normalize_separators;
use crate::model::Site;
use crate::progress::ConsoleProgress;
use crate::search::ApiSearch;

#[derive(Debug, PartialEq)]
pub enum Command {
    Run(AppOptions),
    ListTasks(AppOptions),
    Help,
}

pub const HELP: &str = include_str!("cli_help.txt");

pub fn run() -> Result<(), Box<dyn Error>> {
    let cmd = parse_args(env::args().skip(1))?;
    let stdout = io::stdout();
    execute(cmd, &mut stdout.lock())
}

/// Help and task listings go to `out`; a sweep prints its report to stdout.
pub fn execute<W: Write>(cmd: Command, out: &mut W) -> Result<(), Box<dyn Error>> {
    match cmd {
        Command::Help => {
            writeln!(out, "{}", HELP)?;
            Ok(())
        }
        Command::ListTasks(opts) => {
            for t in opts.search.tasks() {
                writeln!(out, "{},{},{}", t.index, t.location, t.search_term)?;
            }
            Ok(())
        }
        Command::Run(opts) => {
            crate::logger::init();
            log::info!("Backend: {}", opts.backend.api_url);

            let mut backend = ApiSearch::new(&opts.backend)?;
            let summary = crate::runner::run(&opts, &mut backend, Some(&mut ConsoleProgress), true)?;
            log::info!(
                "Done: {} found, {} unique, {} failed searches, csv={:?}",
                summary.total_found, summary.unique, summary.failed_tasks, summary.csv
            );
            Ok(())
        }
    }
}

pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::default();
    let mut args = args.into_iter();
    let mut list_tasks = false;

    // First occurrence of a repeatable flag replaces the built-in list.
    let mut own_terms = false;
    let mut own_locations = false;
    let mut own_sites = false;

    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-t" | "--term" => {
                let v = args.next().ok_or("Missing value for --term")?;
                if !own_terms { opts.search.terms.clear(); own_terms = true; }
                opts.search.terms.push(v);}
            "-l" | "--location" => {
                let v = args.next().ok_or("Missing value for --location")?;
                if !own_locations { opts.search.locations.clear(); own_locations = true; }
                opts.search.locations.push(v);}
            "--site" => {
                let v: Site = args.next().ok_or("Missing value for --site")?.parse()?;
                if !own_sites { opts.search.sites.clear(); own_sites = true; }
                if !opts.search.sites.contains(&v) { opts.search.sites.push(v); }}
            "-n" | "--results" => {
                let v: u32 = args.next().ok_or("Missing value for --results")?.parse()?;
                if v == 0 { return Err("--results must be at least 1".into()); }
                opts.search.results_wanted = v;}
            "--hours-old" => opts.search.hours_old = args.next().ok_or("Missing value for --hours-old")?.parse()?,
            "--distance" => opts.search.distance = args.next().ok_or("Missing value for --distance")?.parse()?,
            "--country" => opts.search.country = args.next().ok_or("Missing value for --country")?,
            "--api-url" => opts.backend.api_url = args.next().ok_or("Missing value for --api-url")?,
            "--api-key" => opts.backend.api_key = Some(args.next().ok_or("Missing value for --api-key")?),
            "-o" | "--out-dir" => {
                let v = args.next().ok_or("Missing output directory")?;
                opts.export.out_dir = PathBuf::from(normalize_separators(&v));}
            "--prefix" => {
                let v = args.next().ok_or("Missing value for --prefix")?;
                if v.trim().is_empty() { return Err("--prefix must not be empty".into()); }
                opts.export.file_prefix = v;}
            "--list-tasks" => list_tasks = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if list_tasks { Ok(Command::ListTasks(opts)) } else { Ok(Command::Run(opts)) }
}
