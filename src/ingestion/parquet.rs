//! Parquet ingestion implementation.

use std::path::Path;

use parquet::file::reader::FileReader;
use parquet::file::serialized_reader::SerializedFileReader;
use parquet::record::Field;

use crate::error::PipelineResult;
use crate::types::{Row, RowTable};

/// Ingest a Parquet file into a [`RowTable`].
///
/// Notes:
/// - Every top-level column becomes a text cell; nulls become absent cells.
/// - The column list comes from the file schema, so it is complete even for an empty file.
/// - Uses the Parquet record API (`RowIter`).
pub fn ingest_parquet_from_path(path: impl AsRef<Path>) -> PipelineResult<RowTable> {
    let reader = SerializedFileReader::try_from(path.as_ref())?;
    let schema = reader.metadata().file_metadata().schema_descr();
    let expected = schema.num_columns();
    let columns: Vec<String> = schema
        .root_schema()
        .get_fields()
        .iter()
        .map(|f| f.name().to_owned())
        .collect();

    let mut rows = Vec::new();
    for row_res in reader.into_iter() {
        let record = row_res?;
        let mut row = Vec::with_capacity(expected);
        for (name, field) in record.get_column_iter() {
            if let Some(text) = field_to_text(field) {
                row.push((name.clone(), text));
            }
        }
        rows.push(row.into_iter().collect::<Row>());
    }

    Ok(RowTable::with_columns(columns, rows))
}

fn field_to_text(f: &Field) -> Option<String> {
    match f {
        Field::Null => None,
        Field::Str(s) => Some(s.clone()),
        Field::Float(v) => Some(v.to_string()),
        Field::Double(v) => Some(v.to_string()),
        other => Some(other.to_string()),
    }
}
