//! Pipeline editing: every operation returns a new [`Pipeline`] value.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{PipelineError, PipelineResult};

use super::step::{ConfigPatch, Step, StepId, StepKind};

/// An ordered list of steps with unique ids.
///
/// Ids are handed out from a counter carried by the value, so an id is never reused by later
/// [`Pipeline::add_step`] calls on a descendant value, even after the step holding it is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Pipeline {
    steps: Vec<Step>,
    #[serde(skip)]
    last_id: u64,
}

impl Pipeline {
    /// An empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pipeline from existing steps.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::DuplicateStepId`] if two steps share an id.
    pub fn from_steps(steps: Vec<Step>) -> PipelineResult<Self> {
        let mut seen = HashSet::with_capacity(steps.len());
        for step in &steps {
            if !seen.insert(step.id) {
                return Err(PipelineError::DuplicateStepId { id: step.id });
            }
        }
        let last_id = steps.iter().map(|s| s.id.get()).max().unwrap_or(0);
        Ok(Self { steps, last_id })
    }

    /// Steps in execution order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Iterate steps in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if there are no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Look up a step by id.
    pub fn get(&self, id: StepId) -> Option<&Step> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// The most recently appended step still present at the end of the list.
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Append a step of `kind` with a fresh id and an empty configuration.
    #[must_use]
    pub fn add_step(&self, kind: StepKind) -> Self {
        let id = self.last_id + 1;
        let mut steps = self.steps.clone();
        steps.push(Step::new(StepId::new(id), kind));
        Self { steps, last_id: id }
    }

    /// Remove the step with `id`. Unknown ids leave the pipeline unchanged.
    #[must_use]
    pub fn remove_step(&self, id: StepId) -> Self {
        Self {
            steps: self.steps.iter().filter(|s| s.id != id).cloned().collect(),
            last_id: self.last_id,
        }
    }

    /// Merge `patch` into the configuration of the step with `id`. Unknown ids are a no-op.
    #[must_use]
    pub fn update_step_config(&self, id: StepId, patch: &ConfigPatch) -> Self {
        let steps = self
            .steps
            .iter()
            .map(|s| {
                if s.id == id {
                    Step {
                        id: s.id,
                        config: s.config.patched(patch),
                    }
                } else {
                    s.clone()
                }
            })
            .collect();
        Self {
            steps,
            last_id: self.last_id,
        }
    }
}

impl<'a> IntoIterator for &'a Pipeline {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
