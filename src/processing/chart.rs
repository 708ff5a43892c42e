//! Frequency bucketing of a column into chart-ready rows.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::processing::filter::non_empty;
use crate::types::RowTable;

/// Label used for rows that do not carry the charted column.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Supported chart shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Bar chart; rows carry a `count`.
    Bar,
    /// Pie chart; rows carry a `value`.
    Pie,
}

impl ChartKind {
    /// Lowercase name used in messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Pie => "pie",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration of a chart step. Both fields are required for the step to run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// Bar or pie.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_kind: Option<ChartKind>,
    /// Column whose distinct values are counted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_column: Option<String>,
}

impl ChartConfig {
    /// Returns `(kind, column)` when both are set (and the column is non-empty).
    pub fn resolved(&self) -> Option<(ChartKind, &str)> {
        let kind = self.chart_kind?;
        let column = non_empty(self.chart_column.as_deref())?;
        Some((kind, column))
    }

    /// Names of required fields that are unset or empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.chart_kind.is_none() {
            missing.push("chartKind");
        }
        if non_empty(self.chart_column.as_deref()).is_none() {
            missing.push("chartColumn");
        }
        missing
    }
}

/// One bucket of chart data. Serializes as `{name, count}` or `{name, value}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChartRow {
    /// Bar chart bucket.
    Bar { name: String, count: usize },
    /// Pie chart slice.
    Pie { name: String, value: usize },
}

impl ChartRow {
    /// Bucket label.
    pub fn name(&self) -> &str {
        match self {
            Self::Bar { name, .. } | Self::Pie { name, .. } => name,
        }
    }

    /// Bucket frequency.
    pub fn frequency(&self) -> usize {
        match self {
            Self::Bar { count, .. } => *count,
            Self::Pie { value, .. } => *value,
        }
    }
}

/// Result of applying a configured chart step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOutcome {
    /// Buckets in first-seen order.
    pub rows: Vec<ChartRow>,
    /// Summary line for the run log.
    pub message: String,
}

/// Count how often each distinct cell of `column` occurs, keeping first-seen order.
///
/// Rows without the column are counted under [`UNKNOWN_LABEL`].
pub fn bucket_counts(table: &RowTable, column: &str) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<(String, usize)> = Vec::new();
    for cell in table.column_cells(column) {
        let key = cell.unwrap_or(UNKNOWN_LABEL);
        match index.get(key) {
            Some(&i) => buckets[i].1 += 1,
            None => {
                index.insert(key, buckets.len());
                buckets.push((key.to_owned(), 1));
            }
        }
    }
    buckets
}

/// Apply a chart step. Returns `None` (step skipped) when the config is incomplete.
pub fn apply_chart(table: &RowTable, config: &ChartConfig) -> Option<ChartOutcome> {
    let (kind, column) = config.resolved()?;
    let rows = bucket_counts(table, column)
        .into_iter()
        .map(|(name, n)| match kind {
            ChartKind::Bar => ChartRow::Bar { name, count: n },
            ChartKind::Pie => ChartRow::Pie { name, value: n },
        })
        .collect();
    Some(ChartOutcome {
        rows,
        message: format!("Created {kind} chart showing distribution of {column}"),
    })
}

#[cfg(test)]
mod tests {
    use super::{ChartConfig, ChartKind, ChartRow, UNKNOWN_LABEL, apply_chart, bucket_counts};
    use crate::types::{Row, RowTable};

    fn regions() -> RowTable {
        RowTable::new(vec![
            Row::new().with("Region", "North"),
            Row::new().with("Region", "South"),
            Row::new().with("Region", "North"),
        ])
    }

    fn cfg(kind: ChartKind, column: &str) -> ChartConfig {
        ChartConfig {
            chart_kind: Some(kind),
            chart_column: Some(column.to_string()),
        }
    }

    #[test]
    fn bar_chart_counts_in_first_seen_order() {
        let out = apply_chart(&regions(), &cfg(ChartKind::Bar, "Region")).unwrap();
        assert_eq!(
            out.rows,
            vec![
                ChartRow::Bar { name: "North".to_string(), count: 2 },
                ChartRow::Bar { name: "South".to_string(), count: 1 },
            ]
        );
        assert_eq!(out.message, "Created bar chart showing distribution of Region");
    }

    #[test]
    fn pie_chart_uses_value() {
        let out = apply_chart(&regions(), &cfg(ChartKind::Pie, "Region")).unwrap();
        assert_eq!(out.rows[0], ChartRow::Pie { name: "North".to_string(), value: 2 });
        assert_eq!(out.message, "Created pie chart showing distribution of Region");
    }

    #[test]
    fn missing_cells_bucket_under_unknown() {
        let t = RowTable::new(vec![
            Row::new().with("Region", "East"),
            Row::new().with("Other", "x"),
            Row::new().with("Region", ""),
            Row::new(),
        ]);
        let buckets = bucket_counts(&t, "Region");
        assert_eq!(
            buckets,
            vec![
                ("East".to_string(), 1),
                (UNKNOWN_LABEL.to_string(), 2),
                (String::new(), 1),
            ]
        );
        let total: usize = buckets.iter().map(|(_, n)| n).sum();
        assert_eq!(total, t.row_count());
    }

    #[test]
    fn stale_column_puts_everything_under_unknown() {
        let out = apply_chart(&regions(), &cfg(ChartKind::Bar, "Gone")).unwrap();
        assert_eq!(
            out.rows,
            vec![ChartRow::Bar { name: UNKNOWN_LABEL.to_string(), count: 3 }]
        );
    }

    #[test]
    fn incomplete_config_is_skipped() {
        assert!(apply_chart(&regions(), &ChartConfig::default()).is_none());
        let no_kind = ChartConfig {
            chart_kind: None,
            chart_column: Some("Region".to_string()),
        };
        assert!(apply_chart(&regions(), &no_kind).is_none());
        assert_eq!(no_kind.missing_fields(), vec!["chartKind"]);
    }

    #[test]
    fn chart_rows_serialize_without_tag() {
        let bar = ChartRow::Bar { name: "a".to_string(), count: 1 };
        let pie = ChartRow::Pie { name: "b".to_string(), value: 2 };
        assert_eq!(serde_json::to_string(&bar).unwrap(), r#"{"name":"a","count":1}"#);
        assert_eq!(serde_json::to_string(&pie).unwrap(), r#"{"name":"b","value":2}"#);
        assert_eq!(pie.frequency(), 2);
        assert_eq!(bar.name(), "a");
    }
}
