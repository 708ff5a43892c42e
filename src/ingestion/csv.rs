//! CSV ingestion implementation.

use std::path::Path;

use crate::error::PipelineResult;
use crate::types::{Row, RowTable};

/// Options for CSV ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Rows read from a CSV source, plus how many records did not fit the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRead {
    /// The header becomes the column list, even when no record survives.
    pub table: RowTable,
    /// Records whose field count differed from the header.
    pub dropped_records: usize,
}

/// Ingest a CSV file into a [`RowTable`].
///
/// Rules:
///
/// - The first record is the header row.
/// - Header names and cell values are trimmed.
/// - Records with a different field count than the header are dropped.
pub fn ingest_csv_from_path(path: impl AsRef<Path>, options: &CsvOptions) -> PipelineResult<RowTable> {
    read_csv_from_path(path, options).map(|read| read.table)
}

/// Ingest CSV text held in memory.
pub fn ingest_csv_from_str(input: &str, options: &CsvOptions) -> PipelineResult<RowTable> {
    let mut rdr = reader_builder(options).from_reader(input.as_bytes());
    read_csv(&mut rdr).map(|read| read.table)
}

/// Ingest CSV data from an existing CSV reader.
///
/// The reader should be `flexible` so that short or long records can be skipped instead of
/// failing the whole read.
pub fn ingest_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> PipelineResult<RowTable> {
    read_csv(rdr).map(|read| read.table)
}

/// Like [`ingest_csv_from_path`], but also reports the dropped record count.
pub fn read_csv_from_path(path: impl AsRef<Path>, options: &CsvOptions) -> PipelineResult<CsvRead> {
    let mut rdr = reader_builder(options).from_path(path)?;
    read_csv(&mut rdr)
}

/// Read every record of `rdr`, keeping those that match the header's field count.
pub fn read_csv<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> PipelineResult<CsvRead> {
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_owned()).collect();

    let mut rows = Vec::new();
    let mut dropped_records = 0usize;
    for result in rdr.records() {
        let record = result?;
        if record.len() != headers.len() {
            dropped_records += 1;
            continue;
        }
        let row: Row = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.as_str(), v.trim()))
            .collect();
        rows.push(row);
    }
    if dropped_records > 0 {
        tracing::debug!(dropped_records, columns = headers.len(), "skipped csv records with mismatched field count");
    }

    Ok(CsvRead {
        table: RowTable::with_columns(headers, rows),
        dropped_records,
    })
}

fn reader_builder(options: &CsvOptions) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter);
    builder
}
