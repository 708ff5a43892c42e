//! Core data model types.
//!
//! Every cell is text. A [`Row`] is an ordered mapping of column name to cell value and a
//! [`RowTable`] is an ordered sequence of rows produced by one ingestion. Neither is mutated in
//! place once built: transformations return new tables.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single record: ordered `(column, value)` pairs.
///
/// Column lookups are by exact name. A column the row does not carry is *absent*, which is
/// different from a present-but-empty cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert. Replaces the value if `column` is already present (keeping its
    /// position), otherwise appends it.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(column.into(), value.into());
        self
    }

    fn set(&mut self, column: String, value: String) {
        match self.cells.iter_mut().find(|(c, _)| *c == column) {
            Some((_, v)) => *v = value,
            None => self.cells.push((column, value)),
        }
    }

    /// Returns the cell for `column`, if present.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(c, _)| c.as_str())
    }

    /// Iterate `(column, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(c, v)| (c.as_str(), v.as_str()))
    }

    /// Number of cells in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the row carries no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.set(k.into(), v.into());
        }
        row
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (c, v) in &self.cells {
            map.serialize_entry(c, v)?;
        }
        map.end()
    }
}

/// In-memory tabular dataset: a column list plus rows in ingestion order.
///
/// The column list is set by the adapter that built the table (a CSV header, a Parquet schema)
/// and survives filtering, so a table that lost all its rows still knows its header.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct RowTable {
    #[serde(skip)]
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl RowTable {
    /// Create a table from rows. The column list is taken from the first row.
    pub fn new(rows: Vec<Row>) -> Self {
        let columns = rows
            .first()
            .map(|r| r.columns().map(str::to_owned).collect())
            .unwrap_or_default();
        Self { columns, rows }
    }

    /// Create a table with an explicit column list.
    pub fn with_columns(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Borrow the rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Iterate rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Column names of the table.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Iterate the cells of `column`, one per row. Rows without the column yield `None`.
    pub fn column_cells<'a>(&'a self, column: &'a str) -> impl Iterator<Item = Option<&'a str>> + 'a {
        self.rows.iter().map(move |r| r.get(column))
    }

    /// Create a new table containing only rows that match `predicate`, in their original order.
    /// The column list is kept.
    pub fn filter_rows<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Row) -> bool,
    {
        let rows = self.rows.iter().filter(|row| predicate(row)).cloned().collect();
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Reduce (fold) all rows into an accumulator value.
    pub fn reduce_rows<A, F>(&self, init: A, mut reducer: F) -> A
    where
        F: FnMut(A, &Row) -> A,
    {
        self.rows.iter().fold(init, |acc, row| reducer(acc, row))
    }

    /// A new table holding at most the first `n` rows (for previews).
    pub fn head(&self, n: usize) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}

impl From<Vec<Row>> for RowTable {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

impl FromIterator<Row> for RowTable {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RowTable {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Row, RowTable};

    fn people() -> RowTable {
        RowTable::new(vec![
            Row::new().with("name", "Ada").with("dept", "Eng"),
            Row::new().with("name", "Grace").with("dept", "Ops"),
            Row::new().with("name", "Linus"),
        ])
    }

    #[test]
    fn row_get_distinguishes_absent_from_empty() {
        let row = Row::new().with("a", "").with("b", "x");
        assert_eq!(row.get("a"), Some(""));
        assert_eq!(row.get("b"), Some("x"));
        assert_eq!(row.get("c"), None);
    }

    #[test]
    fn row_with_replaces_in_place() {
        let row = Row::new().with("a", "1").with("b", "2").with("a", "3");
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(row.get("a"), Some("3"));
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn column_names_come_from_first_row() {
        assert_eq!(people().column_names(), vec!["name", "dept"]);
        assert!(RowTable::default().column_names().is_empty());
    }

    #[test]
    fn explicit_columns_survive_filtering_everything_out() {
        let t = RowTable::with_columns(
            vec!["name".to_string(), "dept".to_string(), "age".to_string()],
            people().rows().to_vec(),
        );
        let none = t.filter_rows(|_| false);
        assert!(none.is_empty());
        assert_eq!(none.column_names(), vec!["name", "dept", "age"]);
        assert_eq!(t.head(1).column_names().len(), 3);
    }

    #[test]
    fn column_cells_yield_none_for_missing() {
        let t = people();
        let cells: Vec<_> = t.column_cells("dept").collect();
        assert_eq!(cells, vec![Some("Eng"), Some("Ops"), None]);
    }

    #[test]
    fn filter_rows_preserves_order_and_leaves_input_untouched() {
        let t = people();
        let out = t.filter_rows(|r| r.get("name") != Some("Grace"));
        assert_eq!(out.row_count(), 2);
        assert_eq!(out.rows()[0].get("name"), Some("Ada"));
        assert_eq!(out.rows()[1].get("name"), Some("Linus"));
        assert_eq!(t.row_count(), 3);
    }

    #[test]
    fn reduce_rows_folds_in_order() {
        let names = people().reduce_rows(String::new(), |mut acc, r| {
            acc.push_str(r.get("name").unwrap_or("?"));
            acc
        });
        assert_eq!(names, "AdaGraceLinus");
    }

    #[test]
    fn head_truncates() {
        assert_eq!(people().head(2).row_count(), 2);
        assert_eq!(people().head(10).row_count(), 3);
    }

    #[test]
    fn rows_serialize_as_ordered_objects() {
        let row = Row::new().with("z", "1").with("a", "2");
        let json = serde_json::to_string(&RowTable::new(vec![row])).unwrap();
        assert_eq!(json, r#"[{"z":"1","a":"2"}]"#);
    }
}
