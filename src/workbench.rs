//! Immutable application snapshot: current table, pipeline and last run result.
//!
//! A host keeps one [`Workbench`] as its "current" state and replaces it with the value returned
//! by each action (load data, edit pipeline, run).

use crate::pipeline::{Pipeline, RunOptions, RunResult, run_with_options};
use crate::types::RowTable;

/// Snapshot of table + pipeline + last result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workbench {
    table: RowTable,
    pipeline: Pipeline,
    result: Option<RunResult>,
}

impl Workbench {
    /// An empty workbench.
    pub fn new() -> Self {
        Self::default()
    }

    /// The loaded table.
    pub fn table(&self) -> &RowTable {
        &self.table
    }

    /// The current pipeline.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Result of the last run since data was loaded, if any.
    pub fn result(&self) -> Option<&RunResult> {
        self.result.as_ref()
    }

    /// Load a new table. The pipeline is kept; any previous result is discarded.
    #[must_use]
    pub fn with_table(&self, table: RowTable) -> Self {
        Self {
            table,
            pipeline: self.pipeline.clone(),
            result: None,
        }
    }

    /// Replace the pipeline with `f(current)`. The table and last result are kept.
    #[must_use]
    pub fn edit<F>(&self, f: F) -> Self
    where
        F: FnOnce(&Pipeline) -> Pipeline,
    {
        Self {
            table: self.table.clone(),
            pipeline: f(&self.pipeline),
            result: self.result.clone(),
        }
    }

    /// Run the pipeline over the table with default options.
    #[must_use]
    pub fn run(&self) -> Self {
        self.run_with_options(&RunOptions::default())
    }

    /// Run the pipeline over the table.
    #[must_use]
    pub fn run_with_options(&self, options: &RunOptions) -> Self {
        Self {
            table: self.table.clone(),
            pipeline: self.pipeline.clone(),
            result: Some(run_with_options(&self.table, &self.pipeline, options)),
        }
    }
}
