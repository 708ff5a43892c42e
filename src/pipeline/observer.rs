use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::step::{StepId, StepKind};

/// Events emitted while a pipeline runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    RunStarted {
        steps: usize,
        rows: usize,
    },
    StepApplied {
        index: usize,
        id: StepId,
        kind: StepKind,
        rows_in: usize,
        rows_out: usize,
    },
    StepSkipped {
        index: usize,
        id: StepId,
        kind: StepKind,
        missing: Vec<&'static str>,
    },
    RunFinished {
        elapsed: Duration,
        stats: RunStats,
    },
}

/// Per-run counters, reported with [`RunEvent::RunFinished`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Steps whose configuration was complete.
    pub steps_applied: usize,
    /// Steps skipped for missing configuration.
    pub steps_skipped: usize,
    /// Rows entering the pipeline.
    pub rows_in: usize,
    /// Rows leaving the pipeline.
    pub rows_out: usize,
    /// Messages produced.
    pub messages: usize,
}

/// Observer hook for pipeline runs.
pub trait RunObserver: Send + Sync {
    fn on_event(&self, event: &RunEvent);
}

/// Forwards run events to `tracing`.
#[derive(Debug, Default)]
pub struct LogRunObserver;

impl RunObserver for LogRunObserver {
    fn on_event(&self, event: &RunEvent) {
        match event {
            RunEvent::RunStarted { steps, rows } => {
                tracing::info!(steps, rows, "pipeline run started");
            }
            RunEvent::StepApplied {
                index,
                id,
                kind,
                rows_in,
                rows_out,
            } => {
                tracing::info!(index, step_id = %id, kind = %kind, rows_in, rows_out, "step applied");
            }
            RunEvent::StepSkipped {
                index,
                id,
                kind,
                missing,
            } => {
                tracing::warn!(index, step_id = %id, kind = %kind, ?missing, "step skipped: incomplete config");
            }
            RunEvent::RunFinished { elapsed, stats } => {
                tracing::info!(
                    ?elapsed,
                    applied = stats.steps_applied,
                    skipped = stats.steps_skipped,
                    rows_in = stats.rows_in,
                    rows_out = stats.rows_out,
                    messages = stats.messages,
                    "pipeline run finished"
                );
            }
        }
    }
}

/// Fans events out to several observers.
#[derive(Default)]
pub struct CompositeRunObserver {
    observers: Vec<Arc<dyn RunObserver>>,
}

impl CompositeRunObserver {
    pub fn new(observers: Vec<Arc<dyn RunObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeRunObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeRunObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl RunObserver for CompositeRunObserver {
    fn on_event(&self, event: &RunEvent) {
        for o in &self.observers {
            o.on_event(event);
        }
    }
}
