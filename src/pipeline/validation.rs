//! Edit-time configuration checks ("strict mode").
//!
//! Running a pipeline never rejects a step; these warnings let a host flag incomplete or stale
//! steps while the user is still editing.

use std::fmt;

use super::editor::Pipeline;
use super::step::{StepId, StepKind};

/// A problem with one step's configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// Required fields are unset or empty; the step will be skipped.
    Incomplete {
        id: StepId,
        kind: StepKind,
        missing: Vec<&'static str>,
    },
    /// The step refers to a column the current table does not have.
    UnknownColumn { id: StepId, column: String },
}

impl ConfigWarning {
    /// Id of the step the warning is about.
    pub fn step_id(&self) -> StepId {
        match self {
            Self::Incomplete { id, .. } | Self::UnknownColumn { id, .. } => *id,
        }
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete { id, kind, missing } => {
                write!(f, "{kind} step {id} is missing {}", missing.join(", "))
            }
            Self::UnknownColumn { id, column } => {
                write!(f, "step {id} refers to unknown column '{column}'")
            }
        }
    }
}

/// Check every step of `pipeline`, in order.
///
/// `columns` is the column list of the table the pipeline will run on. Column references are
/// only checked when it is non-empty.
pub fn validate(pipeline: &Pipeline, columns: &[String]) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    for step in pipeline {
        let missing = step.config.missing_fields();
        if !missing.is_empty() {
            warnings.push(ConfigWarning::Incomplete {
                id: step.id,
                kind: step.kind(),
                missing,
            });
        }
        if columns.is_empty() {
            continue;
        }
        for column in step.config.referenced_columns() {
            if !columns.iter().any(|c| c == column) {
                warnings.push(ConfigWarning::UnknownColumn {
                    id: step.id,
                    column: column.to_owned(),
                });
            }
        }
    }
    warnings
}
