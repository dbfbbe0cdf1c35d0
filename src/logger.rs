// src/logger.rs
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Instant;

use env_logger::{Builder, Env, Target};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

/// Route `log` records to `.store/jobsweep.log` as `[hh:mm:ss.mmm][LEVEL] msg`.
/// Falls back to stderr when the file can't be opened. `RUST_LOG` overrides
/// the default `info` level. Safe to call more than once.
pub fn init() {
    start();

    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        let elapsed = fmt_elapsed(start().elapsed().as_millis());
        writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
    });

    let path = log_path();
    let file = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));

    match file {
        Ok(f) => {
            builder.target(Target::Pipe(Box::new(f)));
        }
        Err(e) => {
            eprintln!("Warning: could not open {}: {}", path.display(), e);
            builder.target(Target::Stderr);
        }
    }

    // Already initialised (tests, repeated runs) is not an error.
    let _ = builder.try_init();
}
