//! Step executors: pure transformations of a [`crate::types::RowTable`].
//!
//! Each executor takes the current table plus its step configuration. An incomplete
//! configuration makes the executor return `None`, which the runner treats as "step skipped".
//! An aggregate step over a column without numbers still runs; it just has no message.
//!
//! - [`filter()`] / [`apply_filter`]: case-insensitive substring filter
//! - [`apply_aggregate`]: average of the numeric cells of a column
//! - [`apply_chart`]: frequency buckets of a column as bar or pie rows
//!
//! ## Example: filter → average → chart
//!
//! ```rust
//! use tabular_pipeline::processing::{
//!     apply_aggregate, apply_chart, apply_filter, AggregateConfig, ChartConfig, ChartKind,
//!     ChartRow, FilterConfig,
//! };
//! use tabular_pipeline::types::{Row, RowTable};
//!
//! let table = RowTable::new(vec![
//!     Row::new().with("Dept", "Eng").with("Age", "25"),
//!     Row::new().with("Dept", "Sales").with("Age", "35"),
//!     Row::new().with("Dept", "Eng").with("Age", "45"),
//! ]);
//!
//! let filtered = apply_filter(
//!     &table,
//!     &FilterConfig { column: Some("Dept".into()), value: Some("eng".into()) },
//! )
//! .unwrap();
//! assert_eq!(filtered.table.row_count(), 2);
//!
//! let avg = apply_aggregate(&filtered.table, &AggregateConfig { column: Some("Age".into()) })
//!     .unwrap();
//! assert_eq!(avg.message.as_deref(), Some("Average of Age: 35.00"));
//!
//! let chart = apply_chart(
//!     &table,
//!     &ChartConfig { chart_kind: Some(ChartKind::Bar), chart_column: Some("Dept".into()) },
//! )
//! .unwrap();
//! assert_eq!(chart.rows[0], ChartRow::Bar { name: "Eng".into(), count: 2 });
//! ```

pub mod aggregate;
pub mod chart;
pub mod filter;

pub use aggregate::{
    AggregateConfig, AggregateOutcome, NumericSummary, apply_aggregate, format_two_decimals, parse_numeric, summarize,
};
pub use chart::{
    ChartConfig, ChartKind, ChartOutcome, ChartRow, UNKNOWN_LABEL, apply_chart, bucket_counts,
};
pub use filter::{FilterConfig, FilterOutcome, apply_filter, filter, filter_contains};
