// src/file.rs

use std::{
    error::Error,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};

use crate::config::options::ExportOptions;
use crate::export::{write_csv, ExportTable};

/// Write the export table to `<out_dir>/<prefix>_<timestamp>.csv`.
/// Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    table: &ExportTable,
) -> Result<PathBuf, Box<dyn Error>> {
    write_export_at(export, table, Local::now())
}

pub fn write_export_at(
    export: &ExportOptions,
    table: &ExportTable,
    at: DateTime<Local>,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path_at(at);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(&path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_csv(&mut out, table)?;
    out.flush()?;
    Ok(path)
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
