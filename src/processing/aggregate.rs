//! Numeric aggregation over a text column of a [`crate::types::RowTable`].

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::processing::filter::non_empty;
use crate::types::RowTable;

/// Configuration of an aggregate ("calculate average") step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateConfig {
    /// Column whose numeric cells are averaged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
}

impl AggregateConfig {
    /// Returns the column when set and non-empty.
    pub fn resolved(&self) -> Option<&str> {
        non_empty(self.column.as_deref())
    }

    /// Names of required fields that are unset or empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        match self.resolved() {
            Some(_) => Vec::new(),
            None => vec!["column"],
        }
    }
}

/// Running summary of the numeric cells of one column.
///
/// Cells that are missing, empty, or do not parse as a finite number are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumericSummary {
    /// Number of numeric cells seen.
    pub count: usize,
    /// Sum of numeric cells.
    pub sum: f64,
    /// Smallest numeric cell, if any.
    pub min: Option<f64>,
    /// Largest numeric cell, if any.
    pub max: Option<f64>,
}

impl NumericSummary {
    fn push(mut self, v: f64) -> Self {
        self.count += 1;
        self.sum += v;
        self.min = Some(self.min.map_or(v, |m| m.min(v)));
        self.max = Some(self.max.map_or(v, |m| m.max(v)));
        self
    }

    /// Arithmetic mean, or `None` if no numeric cell was seen.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

/// Result of applying a configured aggregate step.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateOutcome {
    /// Numeric cells of the column.
    pub summary: NumericSummary,
    /// Summary line for the run log; `None` when the column had no numeric cell.
    pub message: Option<String>,
}

/// Parse the leading number of a text cell, the way a lenient spreadsheet would: leading
/// whitespace is skipped and anything after the longest decimal literal is ignored, so
/// `"25 years"` is 25 and `"1,200"` is 1. Cells with no leading number, and `NaN` or infinite
/// values, give `None`.
pub fn parse_numeric(cell: &str) -> Option<f64> {
    let s = cell.trim_start();
    let len = numeric_prefix_len(s.as_bytes());
    if len == 0 {
        return None;
    }
    s[..len].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Length of the longest `[+-]digits[.digits][(e|E)[+-]digits]` prefix that has at least one
/// mantissa digit. The exponent only counts when it has digits.
fn numeric_prefix_len(b: &[u8]) -> usize {
    let digits_from = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut i = 0;
    if matches!(b.first().copied(), Some(b'+' | b'-')) {
        i = 1;
    }
    let int_end = digits_from(i);
    let mut end = int_end;
    let mut mantissa_digits = int_end - i;
    if b.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return 0;
    }
    if matches!(b.get(end).copied(), Some(b'e' | b'E')) {
        let mut j = end + 1;
        if matches!(b.get(j).copied(), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        if exp_end > j {
            end = exp_end;
        }
    }
    end
}

/// Format `v` with two decimals, rounding halves away from zero on the exact binary value.
///
/// `format!("{:.2}")` rounds exact ties to even (`1.125` → `1.12`); report lines round them up in
/// magnitude (`1.125` → `1.13`, `-1.125` → `-1.13`).
pub fn format_two_decimals(v: f64) -> String {
    match Decimal::from_f64_retain(v) {
        Some(d) => {
            let mut rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded.to_string()
        }
        // Outside the decimal range every f64 is an integer, so there is no tie to break.
        None => format!("{v:.2}"),
    }
}

/// Summarize the numeric cells of `column`.
pub fn summarize(table: &RowTable, column: &str) -> NumericSummary {
    table.reduce_rows(NumericSummary::default(), |acc, row| {
        match row.get(column).and_then(parse_numeric) {
            Some(v) => acc.push(v),
            None => acc,
        }
    })
}

/// Apply an aggregate step. Returns `None` (step skipped) when the config is incomplete. The
/// table itself is never changed.
pub fn apply_aggregate(table: &RowTable, config: &AggregateConfig) -> Option<AggregateOutcome> {
    let column = config.resolved()?;
    let summary = summarize(table, column);
    let message = summary
        .mean()
        .map(|mean| format!("Average of {column}: {}", format_two_decimals(mean)));
    Some(AggregateOutcome { summary, message })
}

#[cfg(test)]
mod tests {
    use super::{AggregateConfig, apply_aggregate, format_two_decimals, parse_numeric, summarize};
    use crate::types::{Row, RowTable};

    fn cfg(column: &str) -> AggregateConfig {
        AggregateConfig {
            column: Some(column.to_string()),
        }
    }

    fn ages() -> RowTable {
        RowTable::new(vec![
            Row::new().with("Age", "25").with("Name", "a"),
            Row::new().with("Age", "").with("Name", "b"),
            Row::new().with("Age", "n/a").with("Name", "c"),
            Row::new().with("Name", "d"),
            Row::new().with("Age", " 45 ").with("Name", "e"),
        ])
    }

    fn message(t: &RowTable, column: &str) -> Option<String> {
        apply_aggregate(t, &cfg(column)).and_then(|out| out.message)
    }

    fn column_of(cells: &[&str]) -> RowTable {
        cells.iter().map(|c| Row::new().with("x", *c)).collect()
    }

    #[test]
    fn parse_numeric_reads_the_leading_number() {
        assert_eq!(parse_numeric("12.5"), Some(12.5));
        assert_eq!(parse_numeric(" -3 "), Some(-3.0));
        assert_eq!(parse_numeric("1e3"), Some(1000.0));
        assert_eq!(parse_numeric("25 years"), Some(25.0));
        assert_eq!(parse_numeric("85000 USD"), Some(85000.0));
        assert_eq!(parse_numeric("1,200"), Some(1.0));
        assert_eq!(parse_numeric("12abc"), Some(12.0));
        assert_eq!(parse_numeric(".5kg"), Some(0.5));
        assert_eq!(parse_numeric("+7."), Some(7.0));
        assert_eq!(parse_numeric("2e"), Some(2.0));
        assert_eq!(parse_numeric("3e-2x"), Some(0.03));
    }

    #[test]
    fn parse_numeric_rejects_cells_without_a_leading_number() {
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("abc12"), None);
        assert_eq!(parse_numeric("$5"), None);
        assert_eq!(parse_numeric("."), None);
        assert_eq!(parse_numeric("-"), None);
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("Infinity"), None);
        assert_eq!(parse_numeric("1e999"), None);
    }

    #[test]
    fn numbers_with_units_count_toward_the_average() {
        let t = column_of(&["25 years", "45"]);
        assert_eq!(message(&t, "x"), Some("Average of x: 35.00".to_string()));
    }

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(format_two_decimals(1.125), "1.13");
        assert_eq!(format_two_decimals(-1.125), "-1.13");
        assert_eq!(format_two_decimals(2.675), "2.67");
        assert_eq!(format_two_decimals(35.0), "35.00");
        assert_eq!(format_two_decimals(0.5), "0.50");

        let t = column_of(&["1", "1", "1", "1", "1", "1", "1", "2"]);
        assert_eq!(message(&t, "x"), Some("Average of x: 1.13".to_string()));
        let t = column_of(&["-1", "-1", "-1", "-1", "-1", "-1", "-1", "-2"]);
        assert_eq!(message(&t, "x"), Some("Average of x: -1.13".to_string()));
    }

    #[test]
    fn summarize_ignores_missing_and_non_numeric() {
        let s = summarize(&ages(), "Age");
        assert_eq!(s.count, 2);
        assert_eq!(s.sum, 70.0);
        assert_eq!(s.min, Some(25.0));
        assert_eq!(s.max, Some(45.0));
        assert_eq!(s.mean(), Some(35.0));
    }

    #[test]
    fn apply_aggregate_formats_two_decimals() {
        assert_eq!(message(&ages(), "Age"), Some("Average of Age: 35.00".to_string()));

        let t = RowTable::new(vec![
            Row::new().with("x", "1"),
            Row::new().with("x", "2"),
            Row::new().with("x", "2"),
        ]);
        assert_eq!(message(&t, "x"), Some("Average of x: 1.67".to_string()));
    }

    #[test]
    fn apply_aggregate_emits_nothing_without_numbers() {
        let out = apply_aggregate(&ages(), &cfg("Name")).unwrap();
        assert_eq!(out.summary.count, 0);
        assert_eq!(out.message, None);
        assert_eq!(message(&ages(), "Missing"), None);
        assert_eq!(message(&RowTable::default(), "Age"), None);
    }

    #[test]
    fn apply_aggregate_skips_incomplete_config() {
        assert_eq!(apply_aggregate(&ages(), &AggregateConfig::default()), None);
        assert_eq!(apply_aggregate(&ages(), &cfg("")), None);
    }
}
