//! CSV record ingestion.
//!
//! The Ghidra export is a headered CSV with five ordered columns:
//! `label, address (hex, no prefix), signature, name, size`. Columns are
//! mapped positionally, never by header name, and fields are decoded from
//! UTF-8 lossily — transcoding of legacy encodings is the exporter's
//! problem, not ours.
//!
//! Ingestion is the one place in the core where failure is fatal: an
//! unreadable file, a row with missing columns, or a malformed address text
//! aborts the run. Everything downstream degrades gracefully instead.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::model::FunctionRecord;

/// Column order of the Ghidra CSV export.
const COL_LABEL: usize = 0;
const COL_ADDRESS: usize = 1;
const COL_SIGNATURE: usize = 2;
const COL_NAME: usize = 3;
const COL_SIZE: usize = 4;

const COLUMN_COUNT: usize = 5;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Failed to open input CSV at {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read input CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV row {row}: expected 5 columns, found {found}")]
    MissingColumns { row: u64, found: usize },
    #[error("CSV row {row}: invalid hex address '{text}'")]
    BadAddress { row: u64, text: String },
}

/// Read all function records from a CSV file at `path`.
pub fn read_records(path: &Path) -> Result<Vec<FunctionRecord>, RecordError> {
    let file = File::open(path)
        .map_err(|source| RecordError::Open { path: path.display().to_string(), source })?;
    read_records_from(file)
}

/// Read all function records from any reader producing CSV bytes.
///
/// Split out from [`read_records`] so ingestion is testable without touching
/// the filesystem.
pub fn read_records_from<R: Read>(reader: R) -> Result<Vec<FunctionRecord>, RecordError> {
    // Flexible so that extra columns are tolerated and short rows surface as
    // our own MissingColumns error rather than the csv crate's length check.
    let mut csv_reader =
        csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(reader);

    let mut records = Vec::new();
    for (idx, result) in csv_reader.byte_records().enumerate() {
        // Header is row 1; data starts at row 2.
        let row = idx as u64 + 2;
        let raw = result?;

        if raw.len() < COLUMN_COUNT {
            return Err(RecordError::MissingColumns { row, found: raw.len() });
        }

        let field = |col: usize| String::from_utf8_lossy(&raw[col]).into_owned();

        let address_text = field(COL_ADDRESS);
        let address = u64::from_str_radix(address_text.trim(), 16)
            .map_err(|_| RecordError::BadAddress { row, text: address_text.clone() })?;

        records.push(FunctionRecord {
            label: field(COL_LABEL),
            address,
            signature: field(COL_SIGNATURE),
            name: field(COL_NAME),
            size: field(COL_SIZE),
        });
    }

    Ok(records)
}
