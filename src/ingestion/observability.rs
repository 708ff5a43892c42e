//! Load events for path-based ingestion.
//!
//! [`super::ingest_from_path`] describes every attempt as one [`IngestionEvent`]: either the table
//! it loaded (with the number of malformed records it had to skip) or the error it hit. Events
//! at or above the configured alert threshold are additionally passed to
//! [`IngestionObserver::on_alert`].

use std::path::Path;
use std::sync::Arc;

use crate::error::PipelineError;

use super::unified::IngestionFormat;

/// How serious a load event is. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// Clean load.
    Info,
    /// Loaded, but some records were skipped.
    Warning,
    /// The data could not be turned into a table.
    Error,
    /// The file could not be read at all.
    Critical,
}

impl IngestionSeverity {
    /// Severity of a failed load: filesystem problems are critical, bad data is an error.
    pub fn of(error: &PipelineError) -> Self {
        if error.is_io() { Self::Critical } else { Self::Error }
    }
}

/// Shape of a loaded table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestionStats {
    /// Rows in the table.
    pub rows: usize,
    /// Columns in the table's column list.
    pub columns: usize,
    /// Source records skipped because they did not fit the header.
    pub dropped_records: usize,
}

/// Outcome of one load attempt.
#[derive(Debug, Clone, Copy)]
pub enum IngestionEvent<'a> {
    Loaded {
        path: &'a Path,
        format: IngestionFormat,
        stats: IngestionStats,
    },
    Failed {
        path: &'a Path,
        format: IngestionFormat,
        error: &'a PipelineError,
    },
}

impl IngestionEvent<'_> {
    /// Severity used for alerting.
    pub fn severity(&self) -> IngestionSeverity {
        match self {
            Self::Loaded { stats, .. } if stats.dropped_records > 0 => IngestionSeverity::Warning,
            Self::Loaded { .. } => IngestionSeverity::Info,
            Self::Failed { error, .. } => IngestionSeverity::of(error),
        }
    }

    /// The path the load was attempted from.
    pub fn path(&self) -> &Path {
        match self {
            Self::Loaded { path, .. } | Self::Failed { path, .. } => path,
        }
    }
}

/// Receives load events.
pub trait IngestionObserver: Send + Sync {
    /// Called once per load attempt.
    fn on_event(&self, event: &IngestionEvent<'_>);

    /// Called after [`Self::on_event`] when the event's severity reaches the alert threshold.
    fn on_alert(&self, _event: &IngestionEvent<'_>) {}
}

/// A list of observers receives every event in order.
impl IngestionObserver for Vec<Arc<dyn IngestionObserver>> {
    fn on_event(&self, event: &IngestionEvent<'_>) {
        for o in self {
            o.on_event(event);
        }
    }

    fn on_alert(&self, event: &IngestionEvent<'_>) {
        for o in self {
            o.on_alert(event);
        }
    }
}

/// Reports load events through `tracing`.
#[derive(Debug, Default)]
pub struct LogObserver;

impl IngestionObserver for LogObserver {
    fn on_event(&self, event: &IngestionEvent<'_>) {
        match event {
            IngestionEvent::Loaded { path, format, stats } if stats.dropped_records > 0 => {
                tracing::warn!(
                    path = %path.display(),
                    ?format,
                    rows = stats.rows,
                    dropped = stats.dropped_records,
                    "table loaded with skipped records"
                );
            }
            IngestionEvent::Loaded { path, format, stats } => {
                tracing::info!(
                    path = %path.display(),
                    ?format,
                    rows = stats.rows,
                    columns = stats.columns,
                    "table loaded"
                );
            }
            IngestionEvent::Failed { path, format, error } => {
                tracing::warn!(path = %path.display(), ?format, %error, "table load failed");
            }
        }
    }

    fn on_alert(&self, event: &IngestionEvent<'_>) {
        tracing::error!(path = %event.path().display(), severity = ?event.severity(), "ingestion alert");
    }
}
