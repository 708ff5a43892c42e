//! The pipeline engine: step model, editor, runner.
//!
//! A [`Pipeline`] is an ordered list of [`Step`]s. Editing operations return new pipeline values;
//! [`run`] folds the steps over a [`crate::types::RowTable`] and returns a [`RunResult`].
//!
//! ```rust
//! use tabular_pipeline::pipeline::{run, ConfigPatch, Pipeline, StepKind};
//! use tabular_pipeline::processing::{ChartKind, ChartRow};
//! use tabular_pipeline::types::{Row, RowTable};
//!
//! let table = RowTable::new(vec![
//!     Row::new().with("Region", "North"),
//!     Row::new().with("Region", "South"),
//!     Row::new().with("Region", "North"),
//! ]);
//!
//! let pipeline = Pipeline::new().add_step(StepKind::Chart);
//! let id = pipeline.last().unwrap().id;
//! let pipeline = pipeline.update_step_config(
//!     id,
//!     &ConfigPatch::new().chart_kind(ChartKind::Bar).chart_column("Region"),
//! );
//!
//! let result = run(&table, &pipeline);
//! assert!(result.chart_visible);
//! assert_eq!(
//!     result.chart_rows,
//!     vec![
//!         ChartRow::Bar { name: "North".into(), count: 2 },
//!         ChartRow::Bar { name: "South".into(), count: 1 },
//!     ]
//! );
//! assert_eq!(result.messages, vec!["Created bar chart showing distribution of Region"]);
//! ```

mod editor;
mod observer;
mod runner;
mod step;
pub mod validation;

pub use editor::Pipeline;
pub use observer::{CompositeRunObserver, LogRunObserver, RunEvent, RunObserver, RunStats};
pub use runner::{RunOptions, RunResult, run, run_with_options};
pub use step::{ConfigPatch, Step, StepConfig, StepId, StepKind};
pub use validation::{ConfigWarning, validate};
