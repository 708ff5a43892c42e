//! Ingestion adapters: turn external data into a [`crate::types::RowTable`].
//!
//! Every cell is kept as text; there is no schema or type inference.
//!
//! Most callers should use [`ingest_from_path`] (from [`unified`]) which:
//!
//! - auto-detects format by file extension (or you can override via [`IngestionOptions`])
//! - reads the file into an in-memory [`crate::types::RowTable`]
//! - optionally reports the outcome (rows, columns, skipped records or the error) to an
//!   [`IngestionObserver`]
//!
//! Format-specific functions are also available under [`csv`](self::csv), [`json`] and [`parquet`], and
//! [`samples`] bundles a few ready-made datasets.

pub mod csv;
pub mod json;
pub mod observability;
pub mod parquet;
pub mod samples;
pub mod unified;

pub use self::csv::{CsvOptions, CsvRead};
pub use observability::{IngestionEvent, IngestionObserver, IngestionSeverity, IngestionStats, LogObserver};
pub use samples::{SampleDataset, load_sample};
pub use unified::{IngestionFormat, IngestionOptions, ingest_from_path};
