//! Row filtering for [`crate::types::RowTable`].

use serde::{Deserialize, Serialize};

use crate::types::{Row, RowTable};

/// Configuration of a filter step. Both fields are required for the step to run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Column whose cells are searched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    /// Substring to look for (case-insensitive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FilterConfig {
    /// Returns `(column, value)` when both are set and non-empty.
    pub fn resolved(&self) -> Option<(&str, &str)> {
        let column = non_empty(self.column.as_deref())?;
        let value = non_empty(self.value.as_deref())?;
        Some((column, value))
    }

    /// Names of required fields that are unset or empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if non_empty(self.column.as_deref()).is_none() {
            missing.push("column");
        }
        if non_empty(self.value.as_deref()).is_none() {
            missing.push("value");
        }
        missing
    }
}

/// Result of applying a configured filter step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Surviving rows, in input order.
    pub table: RowTable,
    /// Summary line for the run log.
    pub message: String,
}

/// Returns a new [`RowTable`] containing only rows for which `predicate` returns `true`.
///
/// This is a convenience wrapper around [`RowTable::filter_rows`].
pub fn filter<F>(table: &RowTable, predicate: F) -> RowTable
where
    F: FnMut(&Row) -> bool,
{
    table.filter_rows(predicate)
}

/// Keep rows whose `column` cell contains `needle`, ignoring case. Rows without the column are
/// dropped.
pub fn filter_contains(table: &RowTable, column: &str, needle: &str) -> RowTable {
    let needle = needle.to_lowercase();
    filter(table, |row| {
        row.get(column)
            .is_some_and(|cell| cell.to_lowercase().contains(&needle))
    })
}

/// Apply a filter step. Returns `None` (step skipped) when the config is incomplete.
pub fn apply_filter(table: &RowTable, config: &FilterConfig) -> Option<FilterOutcome> {
    let (column, value) = config.resolved()?;
    let out = filter_contains(table, column, value);
    let message = format!(
        "Filter: Found {} rows with \"{}\" in {} (was {})",
        out.row_count(),
        value,
        column,
        table.row_count()
    );
    Some(FilterOutcome {
        table: out,
        message,
    })
}

pub(crate) fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{FilterConfig, apply_filter, filter, filter_contains};
    use crate::types::{Row, RowTable};

    fn staff() -> RowTable {
        RowTable::new(vec![
            Row::new().with("Dept", "Eng").with("Age", "25"),
            Row::new().with("Dept", "Sales").with("Age", "35"),
            Row::new().with("Dept", "Eng").with("Age", "45"),
            Row::new().with("Age", "50"),
        ])
    }

    fn cfg(column: &str, value: &str) -> FilterConfig {
        FilterConfig {
            column: Some(column.to_string()),
            value: Some(value.to_string()),
        }
    }

    #[test]
    fn matches_case_insensitive_substring() {
        let out = filter_contains(&staff(), "Dept", "ENG");
        assert_eq!(out.row_count(), 2);
        assert_eq!(out.rows()[0].get("Age"), Some("25"));
        assert_eq!(out.rows()[1].get("Age"), Some("45"));

        let partial = filter_contains(&staff(), "Dept", "al");
        assert_eq!(partial.row_count(), 1);
        assert_eq!(partial.rows()[0].get("Dept"), Some("Sales"));
    }

    #[test]
    fn rows_without_the_column_never_match() {
        let out = filter_contains(&staff(), "Dept", "e");
        assert_eq!(out.row_count(), 3);
        assert!(out.iter().all(|r| r.get("Dept").is_some()));
        let none = filter_contains(&staff(), "Missing", "e");
        assert!(none.is_empty());
    }

    #[test]
    fn apply_filter_reports_before_and_after_counts() {
        let out = apply_filter(&staff(), &cfg("Dept", "eng")).unwrap();
        assert_eq!(out.table.row_count(), 2);
        assert_eq!(out.message, "Filter: Found 2 rows with \"eng\" in Dept (was 4)");
    }

    #[test]
    fn apply_filter_skips_incomplete_config() {
        assert!(apply_filter(&staff(), &FilterConfig::default()).is_none());
        assert!(apply_filter(&staff(), &cfg("Dept", "")).is_none());
        assert!(apply_filter(&staff(), &cfg("", "eng")).is_none());
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let once = apply_filter(&staff(), &cfg("Dept", "eng")).unwrap().table;
        let twice = apply_filter(&once, &cfg("Dept", "eng")).unwrap().table;
        assert_eq!(once, twice);
    }

    #[test]
    fn generic_filter_can_return_empty_table() {
        let out = filter(&staff(), |_| false);
        assert!(out.is_empty());
    }

    #[test]
    fn missing_fields_lists_unset_and_empty() {
        assert_eq!(FilterConfig::default().missing_fields(), vec!["column", "value"]);
        assert_eq!(cfg("Dept", "").missing_fields(), vec!["value"]);
        assert!(cfg("Dept", "x").missing_fields().is_empty());
    }
}
