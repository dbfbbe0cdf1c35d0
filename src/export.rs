// src/export.rs
//! Projection of the deduplicated table to the CSV columns, and the CSV dialect:
//! header row, no index column, every field quoted, `"` doubled, `\` escaped as `\\`.

use std::error::Error;
use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::config::consts::OUTPUT_COLUMNS;
use crate::model::{present, JobPosting};

/// Column-restricted view ready to be written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportTable {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/* ---------------- Projection ---------------- */

// Columns the posting schema carries. Every backend row has all three slots,
// even when a company is null; job_url_direct resolves via job_url.
fn column_known(col: &str) -> bool {
    matches!(col, "company" | "title" | "job_url_direct")
}

fn cell(row: &JobPosting, col: &str) -> String {
    match col {
        "company" => s!(present(&row.company).unwrap_or("")),
        "title" => row.title.clone(),
        "job_url_direct" => s!(row.direct_or_aggregator_url()),
        _ => s!(),
    }
}

/// Keep only `company, title, job_url_direct`. Null companies export as empty cells.
/// `job_url_direct` falls back to `job_url` per row.
pub fn project(rows: &[JobPosting]) -> ExportTable {
    let columns: Vec<&'static str> = OUTPUT_COLUMNS
        .iter()
        .copied()
        .filter(|c| column_known(c))
        .collect();

    let rows = rows
        .iter()
        .map(|r| columns.iter().map(|c| cell(r, c)).collect())
        .collect();

    ExportTable { columns, rows }
}

/* ---------------- Writing ---------------- */

// Quotes are doubled by the writer; backslash is the escape char and escapes itself.
fn escape_backslashes(field: &str) -> String {
    field.replace('\\', "\\\\")
}

pub fn write_csv<W: Write>(w: W, table: &ExportTable) -> Result<(), Box<dyn Error>> {
    let mut out = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(w);

    out.write_record(&table.columns)?;
    for row in &table.rows {
        out.write_record(row.iter().map(|f| escape_backslashes(f)))?;
    }
    out.flush()?;
    Ok(())
}

/// Whole CSV document as a string.
pub fn to_csv_string(table: &ExportTable) -> Result<String, Box<dyn Error>> {
    let mut buf: Vec<u8> = Vec::new();
    write_csv(&mut buf, table)?;
    Ok(String::from_utf8(buf)?)
}
