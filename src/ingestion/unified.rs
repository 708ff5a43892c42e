//! Path-based ingestion: pick an adapter from the file extension and load a
//! [`crate::types::RowTable`].

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{PipelineError, PipelineResult};
use crate::types::RowTable;

use super::csv::CsvOptions;
use super::observability::{IngestionEvent, IngestionObserver, IngestionSeverity, IngestionStats};
use super::{csv, json, parquet};

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionFormat {
    /// Delimited text with a header row.
    Csv,
    /// JSON array-of-objects, single object, or NDJSON.
    Json,
    /// Apache Parquet.
    Parquet,
}

impl IngestionFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" | "ndjson" => Some(Self::Json),
            "parquet" | "pq" => Some(Self::Parquet),
            _ => None,
        }
    }

    /// Infer the format of `path` from its extension.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidInput`] when the path has no extension or an unknown one.
    pub fn from_path(path: &Path) -> PipelineResult<Self> {
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            return Err(PipelineError::InvalidInput {
                message: format!("cannot infer format: path has no extension ({})", path.display()),
            });
        };
        Self::from_extension(ext).ok_or_else(|| PipelineError::InvalidInput {
            message: format!("cannot infer format from extension '{ext}' for path ({})", path.display()),
        })
    }
}

/// Options for [`ingest_from_path`].
#[derive(Clone)]
pub struct IngestionOptions {
    /// Forced format; `None` infers it from the extension.
    pub format: Option<IngestionFormat>,
    /// Options used when the source is CSV.
    pub csv: CsvOptions,
    /// Receives one [`IngestionEvent`] per call.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Events at or above this severity are also sent to [`IngestionObserver::on_alert`].
    pub alert_at_or_above: IngestionSeverity,
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            format: None,
            csv: CsvOptions::default(),
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("format", &self.format)
            .field("csv", &self.csv)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

/// Load the file at `path` into a [`RowTable`].
///
/// When an observer is set it receives an [`IngestionEvent::Loaded`] (with the number of
/// skipped CSV records) or an [`IngestionEvent::Failed`], then an alert if the event's severity
/// reaches `options.alert_at_or_above`. A format that cannot be inferred is returned as an error
/// without reaching the observer.
///
/// ```no_run
/// use tabular_pipeline::ingestion::{ingest_from_path, CsvOptions, IngestionFormat, IngestionOptions};
///
/// # fn main() -> Result<(), tabular_pipeline::PipelineError> {
/// let people = ingest_from_path("people.csv", &IngestionOptions::default())?;
///
/// let opts = IngestionOptions {
///     format: Some(IngestionFormat::Csv),
///     csv: CsvOptions { delimiter: b';' },
///     ..Default::default()
/// };
/// let export = ingest_from_path("export_without_extension", &opts)?;
/// println!("{} / {:?}", people.row_count(), export.column_names());
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(path: impl AsRef<Path>, options: &IngestionOptions) -> PipelineResult<RowTable> {
    let path = path.as_ref();
    let format = match options.format {
        Some(f) => f,
        None => IngestionFormat::from_path(path)?,
    };

    let loaded = load(path, format, &options.csv);

    if let Some(observer) = &options.observer {
        let event = match &loaded {
            Ok((table, dropped_records)) => IngestionEvent::Loaded {
                path,
                format,
                stats: IngestionStats {
                    rows: table.row_count(),
                    columns: table.column_names().len(),
                    dropped_records: *dropped_records,
                },
            },
            Err(error) => IngestionEvent::Failed { path, format, error },
        };
        observer.on_event(&event);
        if event.severity() >= options.alert_at_or_above {
            observer.on_alert(&event);
        }
    }

    loaded.map(|(table, _)| table)
}

fn load(path: &Path, format: IngestionFormat, csv_options: &CsvOptions) -> PipelineResult<(RowTable, usize)> {
    match format {
        IngestionFormat::Csv => {
            csv::read_csv_from_path(path, csv_options).map(|read| (read.table, read.dropped_records))
        }
        IngestionFormat::Json => json::ingest_json_from_path(path).map(|t| (t, 0)),
        IngestionFormat::Parquet => parquet::ingest_parquet_from_path(path).map(|t| (t, 0)),
    }
}
