//! Pipeline step model: identity, kind and a per-kind configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::processing::{AggregateConfig, ChartConfig, ChartKind, FilterConfig};

/// Unique (within one pipeline) step identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepId(u64);

impl StepId {
    /// Wrap a raw id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three kinds of pipeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Keep rows whose column contains a substring.
    Filter,
    /// Report the average of a numeric column.
    #[serde(alias = "calculate")]
    Aggregate,
    /// Bucket a column into chart rows.
    Chart,
}

impl StepKind {
    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Filter => "filter",
            Self::Aggregate => "aggregate",
            Self::Chart => "chart",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Step configuration, tagged by step kind.
///
/// Serialized adjacently tagged: `{"kind": "filter", "config": {"column": ..., "value": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "config", rename_all = "lowercase")]
pub enum StepConfig {
    Filter(FilterConfig),
    #[serde(alias = "calculate")]
    Aggregate(AggregateConfig),
    Chart(ChartConfig),
}

impl StepConfig {
    /// An empty configuration for `kind`.
    pub fn empty(kind: StepKind) -> Self {
        match kind {
            StepKind::Filter => Self::Filter(FilterConfig::default()),
            StepKind::Aggregate => Self::Aggregate(AggregateConfig::default()),
            StepKind::Chart => Self::Chart(ChartConfig::default()),
        }
    }

    /// The step kind this configuration belongs to.
    pub fn kind(&self) -> StepKind {
        match self {
            Self::Filter(_) => StepKind::Filter,
            Self::Aggregate(_) => StepKind::Aggregate,
            Self::Chart(_) => StepKind::Chart,
        }
    }

    /// Names of required fields that are unset or empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        match self {
            Self::Filter(c) => c.missing_fields(),
            Self::Aggregate(c) => c.missing_fields(),
            Self::Chart(c) => c.missing_fields(),
        }
    }

    /// Returns `true` if the step would run (rather than be skipped).
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Column names this configuration refers to (non-empty ones only).
    pub fn referenced_columns(&self) -> Vec<&str> {
        let col = match self {
            Self::Filter(c) => c.column.as_deref(),
            Self::Aggregate(c) => c.column.as_deref(),
            Self::Chart(c) => c.chart_column.as_deref(),
        };
        col.filter(|c| !c.is_empty()).into_iter().collect()
    }

    /// Merge `patch` into a copy of this configuration.
    ///
    /// Only fields set in the patch are overwritten. Fields that do not belong to this kind are
    /// ignored.
    pub fn patched(&self, patch: &ConfigPatch) -> Self {
        let mut out = self.clone();
        match &mut out {
            Self::Filter(c) => {
                merge(&mut c.column, &patch.column);
                merge(&mut c.value, &patch.value);
            }
            Self::Aggregate(c) => merge(&mut c.column, &patch.column),
            Self::Chart(c) => {
                merge(&mut c.chart_kind, &patch.chart_kind);
                merge(&mut c.chart_column, &patch.chart_column);
            }
        }
        out
    }
}

fn merge<T: Clone>(slot: &mut Option<T>, update: &Option<T>) {
    if let Some(v) = update {
        *slot = Some(v.clone());
    }
}

/// A partial configuration update. Unset fields leave the existing value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigPatch {
    pub column: Option<String>,
    pub value: Option<String>,
    pub chart_kind: Option<ChartKind>,
    pub chart_column: Option<String>,
}

impl ConfigPatch {
    /// An empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `column`.
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Set `value`.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set `chartKind`.
    pub fn chart_kind(mut self, kind: ChartKind) -> Self {
        self.chart_kind = Some(kind);
        self
    }

    /// Set `chartColumn`.
    pub fn chart_column(mut self, column: impl Into<String>) -> Self {
        self.chart_column = Some(column.into());
        self
    }
}

/// One pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: StepId,
    #[serde(flatten)]
    pub config: StepConfig,
}

impl Step {
    /// A new step of `kind` with an empty configuration.
    pub fn new(id: StepId, kind: StepKind) -> Self {
        Self {
            id,
            config: StepConfig::empty(kind),
        }
    }

    /// The step kind.
    pub fn kind(&self) -> StepKind {
        self.config.kind()
    }
}
