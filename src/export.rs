//! Export adapters: write a [`RowTable`] as delimited text, or a [`RunResult`] as JSON.

use std::io::Write;
use std::path::Path;

use crate::error::{PipelineError, PipelineResult};
use crate::pipeline::RunResult;
use crate::types::RowTable;

/// Options for delimited-text export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Write `table` as delimited text: a header row of the table's column names, then one record per
/// row. Cells a row does not carry are written as empty fields. A table with no rows still gets
/// its header; only a table without any columns writes nothing.
pub fn write_csv<W: Write>(table: &RowTable, writer: W, options: &ExportOptions) -> PipelineResult<()> {
    let columns = table.column_names();
    if columns.is_empty() {
        return Ok(());
    }

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(options.delimiter)
        .from_writer(writer);
    wtr.write_record(columns)?;
    for row in table {
        wtr.write_record(columns.iter().map(|c| row.get(c).unwrap_or("")))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render `table` as delimited text in memory.
pub fn to_csv_string(table: &RowTable, options: &ExportOptions) -> PipelineResult<String> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf, options)?;
    String::from_utf8(buf).map_err(|e| PipelineError::InvalidInput {
        message: format!("exported csv is not utf-8: {e}"),
    })
}

/// Write `table` as delimited text to `path`, replacing any existing file.
pub fn write_csv_to_path(table: &RowTable, path: impl AsRef<Path>, options: &ExportOptions) -> PipelineResult<()> {
    let file = std::fs::File::create(path)?;
    write_csv(table, std::io::BufWriter::new(file), options)
}

/// Serialize a run result as pretty JSON for a presentation layer.
pub fn run_result_to_json(result: &RunResult) -> PipelineResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
