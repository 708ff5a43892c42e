//! Built-in sample datasets, so a pipeline can be tried without any input file.

use std::fmt;

use crate::error::{PipelineError, PipelineResult};
use crate::types::{Row, RowTable};

/// The bundled sample datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleDataset {
    /// Staff list with department, age and salary.
    Employees,
    /// Product sales by region.
    Sales,
    /// Daily weather readings for a few cities.
    Weather,
}

const EMPLOYEES_COLUMNS: &[&str] = &["Name", "Department", "Age", "Salary", "City"];
const EMPLOYEES: &[&[&str]] = &[
    &["Alice Johnson", "Engineering", "29", "85000", "Seattle"],
    &["Bob Smith", "Sales", "35", "62000", "Chicago"],
    &["Carol White", "Engineering", "41", "105000", "Seattle"],
    &["David Brown", "Marketing", "27", "58000", "New York"],
    &["Eva Green", "Sales", "45", "71000", "Chicago"],
    &["Frank Moore", "Engineering", "33", "92000", "Austin"],
    &["Grace Lee", "Marketing", "38", "67000", "New York"],
    &["Henry Clark", "Support", "24", "45000", "Austin"],
];

const SALES_COLUMNS: &[&str] = &["Date", "Region", "Product", "Units", "Revenue"];
const SALES: &[&[&str]] = &[
    &["2024-01-05", "North", "Widget", "120", "2400.00"],
    &["2024-01-06", "South", "Gadget", "80", "3200.00"],
    &["2024-01-07", "North", "Gadget", "45", "1800.00"],
    &["2024-01-08", "East", "Widget", "200", "4000.00"],
    &["2024-01-09", "West", "Gizmo", "60", "1500.00"],
    &["2024-01-10", "South", "Widget", "95", "1900.00"],
    &["2024-01-11", "East", "Gizmo", "30", "750.00"],
];

const WEATHER_COLUMNS: &[&str] = &["City", "Date", "Condition", "TempC", "Humidity"];
const WEATHER: &[&[&str]] = &[
    &["London", "2024-03-01", "Rain", "9.5", "82"],
    &["London", "2024-03-02", "Cloudy", "11.0", "75"],
    &["Madrid", "2024-03-01", "Sunny", "18.2", "40"],
    &["Madrid", "2024-03-02", "Sunny", "19.8", "38"],
    &["Oslo", "2024-03-01", "Snow", "-2.5", "88"],
    &["Oslo", "2024-03-02", "Cloudy", "0.4", "80"],
];

impl SampleDataset {
    /// All bundled datasets.
    pub const ALL: [SampleDataset; 3] = [Self::Employees, Self::Sales, Self::Weather];

    /// Lowercase name of the dataset.
    pub fn name(self) -> &'static str {
        match self {
            Self::Employees => "employees",
            Self::Sales => "sales",
            Self::Weather => "weather",
        }
    }

    /// Look up a dataset by name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::UnknownSample`] if no dataset has this name.
    pub fn from_name(name: &str) -> PipelineResult<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| PipelineError::UnknownSample {
                name: name.to_owned(),
            })
    }

    /// Build the dataset as a fresh [`RowTable`].
    pub fn load(self) -> RowTable {
        let (columns, records) = match self {
            Self::Employees => (EMPLOYEES_COLUMNS, EMPLOYEES),
            Self::Sales => (SALES_COLUMNS, SALES),
            Self::Weather => (WEATHER_COLUMNS, WEATHER),
        };
        let rows = records
            .iter()
            .map(|rec| columns.iter().copied().zip(rec.iter().copied()).collect::<Row>())
            .collect();
        RowTable::with_columns(columns.iter().map(|c| (*c).to_owned()).collect(), rows)
    }
}

impl fmt::Display for SampleDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Load a bundled dataset by name.
pub fn load_sample(name: &str) -> PipelineResult<RowTable> {
    SampleDataset::from_name(name).map(SampleDataset::load)
}
