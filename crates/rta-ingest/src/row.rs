//! Header-keyed raw row representation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One decoded input row: declared column name to raw cell text.
///
/// Values are untrimmed, untyped, possibly empty. Columns the file did not
/// supply are simply absent; [`RawRow::get`] resolves them to the empty
/// string so normalizers see one uniform "missing" shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    values: BTreeMap<String, String>,
}

impl RawRow {
    /// Builds a row by zipping a header with one record's cells.
    ///
    /// Missing cells are padded with the empty string; cells beyond the
    /// header are dropped.
    pub fn from_header_and_cells<'a, I>(header: &[String], cells: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut cells = cells.into_iter();
        let mut values = BTreeMap::new();
        for column in header {
            let cell = cells.next().unwrap_or("");
            values.insert(column.clone(), cell.to_string());
        }
        Self { values }
    }

    /// Raw value for `column`, or `""` when the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map_or("", String::as_str)
    }

    /// True when the column is absent or holds only whitespace.
    pub fn is_blank(&self, column: &str) -> bool {
        self.get(column).trim().is_empty()
    }

    /// Iterates over `(column, raw value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of columns carried by this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the row carries no columns at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn pads_missing_cells_with_empty() {
        let row = RawRow::from_header_and_cells(&header(&["a", "b", "c"]), ["1"]);
        assert_eq!(row.get("a"), "1");
        assert_eq!(row.get("b"), "");
        assert_eq!(row.get("c"), "");
    }

    #[test]
    fn drops_cells_beyond_header() {
        let row = RawRow::from_header_and_cells(&header(&["a"]), ["1", "2", "3"]);
        assert_eq!(row.len(), 1);
        assert_eq!(row.get("a"), "1");
    }

    #[test]
    fn absent_column_reads_as_empty() {
        let row = RawRow::from_header_and_cells(&header(&["a"]), ["1"]);
        assert_eq!(row.get("nope"), "");
        assert!(row.is_blank("nope"));
        assert!(!row.is_blank("a"));
    }

    #[test]
    fn blank_detects_whitespace_only() {
        let row = RawRow::from_header_and_cells(&header(&["a"]), ["   "]);
        assert!(row.is_blank("a"));
    }
}
