//! `tabular-pipeline` loads tabular data into an in-memory [`types::RowTable`] (every cell is
//! text) and runs a small ordered pipeline of filter / aggregate / chart steps over it.
//!
//! The engine is pure and synchronous: [`pipeline::run`] takes a table and a
//! [`pipeline::Pipeline`] snapshot and returns a fresh [`pipeline::RunResult`] holding the
//! resulting rows, human-readable messages, chart rows and a chart-visibility flag. Steps with
//! incomplete configuration are skipped rather than failing the run.
//!
//! ## Step kinds
//!
//! - **Filter**: keep rows whose `column` contains `value` (case-insensitive substring).
//!   Message: `Filter: Found {after} rows with "{value}" in {column} (was {before})`.
//! - **Aggregate**: average the leading numbers of the cells of `column` (`"25 years"` counts as
//!   25); cells without one are ignored and the table is left unchanged. Message:
//!   `Average of {column}: {mean}` with the mean rounded half away from zero to two decimals.
//! - **Chart**: count distinct values of `chartColumn` (missing cells count as `"Unknown"`) into
//!   bar (`{name, count}`) or pie (`{name, value}`) rows. Only the last chart step's rows are kept.
//!
//! ## Quick example
//!
//! ```rust
//! use tabular_pipeline::pipeline::{run, ConfigPatch, Pipeline, StepKind};
//! use tabular_pipeline::types::{Row, RowTable};
//!
//! let table = RowTable::new(vec![
//!     Row::new().with("Dept", "Eng").with("Age", "25"),
//!     Row::new().with("Dept", "Sales").with("Age", "35"),
//!     Row::new().with("Dept", "Eng").with("Age", "45"),
//! ]);
//!
//! let pipeline = Pipeline::new().add_step(StepKind::Filter);
//! let filter_id = pipeline.last().unwrap().id;
//! let pipeline = pipeline
//!     .update_step_config(filter_id, &ConfigPatch::new().column("Dept").value("eng"))
//!     .add_step(StepKind::Aggregate);
//! let avg_id = pipeline.last().unwrap().id;
//! let pipeline = pipeline.update_step_config(avg_id, &ConfigPatch::new().column("Age"));
//!
//! let result = run(&table, &pipeline);
//! assert_eq!(result.rows.row_count(), 2);
//! assert_eq!(
//!     result.messages,
//!     vec![
//!         "Filter: Found 2 rows with \"eng\" in Dept (was 3)",
//!         "Average of Age: 35.00",
//!     ]
//! );
//! assert!(!result.chart_visible);
//! ```
//!
//! ## Loading and exporting data
//!
//! ```no_run
//! use tabular_pipeline::export::{write_csv_to_path, ExportOptions};
//! use tabular_pipeline::ingestion::{ingest_from_path, load_sample, IngestionOptions};
//!
//! # fn main() -> Result<(), tabular_pipeline::PipelineError> {
//! let table = ingest_from_path("data.csv", &IngestionOptions::default())?;
//! let sample = load_sample("employees")?;
//! write_csv_to_path(&sample, "employees.csv", &ExportOptions::default())?;
//! println!("rows={} sample_rows={}", table.row_count(), sample.row_count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`types`]: rows and row tables
//! - [`processing`]: the filter / aggregate / chart step executors
//! - [`pipeline`]: step model, pipeline editor, runner, run observers and config validation
//! - [`workbench`]: immutable table + pipeline + result snapshot for hosts
//! - [`ingestion`]: CSV, JSON, Parquet and bundled sample adapters
//! - [`export`]: delimited-text and JSON output
//! - [`error`]: error type used by the adapters

pub mod error;
pub mod export;
pub mod ingestion;
pub mod pipeline;
pub mod processing;
pub mod types;
pub mod workbench;

pub use error::{PipelineError, PipelineResult};
