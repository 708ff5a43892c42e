//! Pipeline runner: folds the step list over a row table.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::processing::{ChartRow, apply_aggregate, apply_chart, apply_filter};
use crate::types::RowTable;

use super::editor::Pipeline;
use super::observer::{RunEvent, RunObserver, RunStats};
use super::step::{Step, StepConfig};

/// Output of one full pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    /// Table after every filter step.
    pub rows: RowTable,
    /// Human-readable summary lines, in step order.
    pub messages: Vec<String>,
    /// Buckets of the last executed chart step.
    pub chart_rows: Vec<ChartRow>,
    /// `true` once any chart step ran.
    pub chart_visible: bool,
}

/// Options controlling a run.
///
/// Use [`Default`] for common cases.
#[derive(Clone, Default)]
pub struct RunOptions {
    /// Optional observer for per-step events.
    pub observer: Option<Arc<dyn RunObserver>>,
}

impl fmt::Debug for RunOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunOptions")
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

/// Run `pipeline` over `table` with default options.
///
/// Never fails: steps with incomplete configuration are skipped.
pub fn run(table: &RowTable, pipeline: &Pipeline) -> RunResult {
    run_with_options(table, pipeline, &RunOptions::default())
}

/// Run `pipeline` over `table`, reporting events to `options.observer` if set.
pub fn run_with_options(table: &RowTable, pipeline: &Pipeline, options: &RunOptions) -> RunResult {
    let start = Instant::now();
    let emit = |event: RunEvent| {
        if let Some(obs) = &options.observer {
            obs.on_event(&event);
        }
    };
    emit(RunEvent::RunStarted {
        steps: pipeline.len(),
        rows: table.row_count(),
    });

    let mut current: Cow<'_, RowTable> = Cow::Borrowed(table);
    let mut messages = Vec::new();
    let mut chart_rows = Vec::new();
    let mut chart_visible = false;
    let mut stats = RunStats {
        rows_in: table.row_count(),
        ..RunStats::default()
    };

    for (index, step) in pipeline.iter().enumerate() {
        let rows_in = current.row_count();
        let applied = match &step.config {
            StepConfig::Filter(cfg) => match apply_filter(&current, cfg) {
                Some(out) => {
                    current = Cow::Owned(out.table);
                    messages.push(out.message);
                    true
                }
                None => false,
            },
            StepConfig::Aggregate(cfg) => match apply_aggregate(&current, cfg) {
                Some(out) => {
                    messages.extend(out.message);
                    true
                }
                None => false,
            },
            StepConfig::Chart(cfg) => match apply_chart(&current, cfg) {
                Some(out) => {
                    // A later chart step replaces the data of an earlier one.
                    chart_rows = out.rows;
                    messages.push(out.message);
                    chart_visible = true;
                    true
                }
                None => false,
            },
        };

        if applied {
            stats.steps_applied += 1;
            let rows_out = current.row_count();
            tracing::debug!(index, step_id = %step.id, kind = %step.kind(), rows_in, rows_out, "step applied");
            emit(RunEvent::StepApplied {
                index,
                id: step.id,
                kind: step.kind(),
                rows_in,
                rows_out,
            });
        } else {
            stats.steps_skipped += 1;
            tracing::debug!(index, step_id = %step.id, kind = %step.kind(), "step skipped");
            emit(skipped_event(index, step));
        }
    }

    stats.rows_out = current.row_count();
    stats.messages = messages.len();
    tracing::info!(
        applied = stats.steps_applied,
        skipped = stats.steps_skipped,
        rows_in = stats.rows_in,
        rows_out = stats.rows_out,
        chart_visible,
        "pipeline run finished"
    );
    emit(RunEvent::RunFinished {
        elapsed: start.elapsed(),
        stats,
    });

    RunResult {
        rows: current.into_owned(),
        messages,
        chart_rows,
        chart_visible,
    }
}

fn skipped_event(index: usize, step: &Step) -> RunEvent {
    RunEvent::StepSkipped {
        index,
        id: step.id,
        kind: step.kind(),
        missing: step.config.missing_fields(),
    }
}
