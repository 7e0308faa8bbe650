//! First-row header loading for delimited tabular files.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Reads the header row of a delimited file.
///
/// Only the first record is consumed. Each field is trimmed of surrounding
/// whitespace and a stray BOM; field count and content are not validated.
/// An empty file yields an empty sequence rather than an error.
pub fn read_headers(path: &Path, delimiter: u8) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)
        .map_err(|source| IngestError::csv(path, source))?;
    let mut record = csv::StringRecord::new();
    let has_row = reader
        .read_record(&mut record)
        .map_err(|source| IngestError::csv(path, source))?;
    if !has_row {
        return Ok(Vec::new());
    }
    let headers: Vec<String> = record.iter().map(clean_header).collect();
    debug!(path = %path.display(), count = headers.len(), "read header row");
    Ok(headers)
}

/// Reads headers from a comma-delimited file.
pub fn read_csv_headers(path: &Path) -> Result<Vec<String>> {
    read_headers(path, b',')
}

/// Reads headers from a tab-delimited file.
pub fn read_tsv_headers(path: &Path) -> Result<Vec<String>> {
    read_headers(path, b'\t')
}

fn clean_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}
