//! CSV reading.
//!
//! One entry point per source: [`read_path`] for files, [`parse_str`] for
//! in-memory data (tests, callers that already hold the bytes). Both return
//! a [`RawTable`]; anything the csv crate rejects (ragged rows, invalid
//! UTF-8) surfaces as [`IngestError::Malformed`].

use std::io::Read;
use std::path::Path;

use crate::error::{io_err, IngestError};
use crate::table::RawTable;

/// Read and parse the CSV file at `path`.
pub fn read_path(path: &Path) -> Result<RawTable, IngestError> {
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    parse_str(&contents)
}

/// Parse in-memory CSV data. First row is the header.
pub fn parse_str(data: &str) -> Result<RawTable, IngestError> {
    from_reader(data.as_bytes())
}

fn from_reader<R: Read>(rdr: R) -> Result<RawTable, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(rdr);

    let headers: Vec<String> = reader
        .headers()
        .map_err(IngestError::Malformed)?
        .iter()
        .map(str::to_owned)
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(IngestError::Malformed)?;
        rows.push(record.iter().map(str::to_owned).collect());
    }

    log::debug!("parsed {} data rows, {} columns", rows.len(), headers.len());
    Ok(RawTable::new(headers, rows))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
