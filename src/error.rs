use parquet::errors::ParquetError;
use thiserror::Error;

use crate::pipeline::StepId;

/// Convenience result type for ingestion, export and pipeline construction.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Error type returned by the adapters around the pipeline engine.
///
/// Running a pipeline never fails; these errors come from reading/writing data or from building a
/// [`crate::pipeline::Pipeline`] out of an inconsistent step list.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV read/write error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parse/serialize error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parquet ingestion error.
    #[error("parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// The input cannot be turned into a row table (wrong shape, unknown format, ...).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// No built-in sample dataset has this name.
    #[error("unknown sample dataset '{name}'")]
    UnknownSample { name: String },

    /// Two steps in one pipeline share an id.
    #[error("duplicate step id {id}")]
    DuplicateStepId { id: StepId },
}

impl PipelineError {
    /// Returns `true` if the failure came from reading or writing the filesystem rather than
    /// from the content of the data.
    pub fn is_io(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::Csv(e) => matches!(e.kind(), csv::ErrorKind::Io(_)),
            Self::Json(e) => e.is_io(),
            Self::Parquet(ParquetError::External(inner)) => inner.is::<std::io::Error>(),
            _ => false,
        }
    }
}
