//! Canonical row storage.

use crate::model::Row;
use crate::query::SortState;
use crate::query::sort_rows;

/// Holds the dataset a table displays.
///
/// Sorting reorders the stored rows themselves, so the store always reflects
/// the most recently applied [`SortState`]. Replacing the dataset discards the
/// old rows entirely; there is no incremental diffing.
#[derive(Debug, Clone, Default)]
pub struct RowStore {
    rows: Vec<Row>,
}

impl RowStore {
    /// Creates a store from the given rows.
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Replaces the whole dataset.
    pub fn replace(&mut self, rows: Vec<Row>) {
        self.rows = rows;
    }

    /// Sorts the stored rows in place.
    pub fn sort(&mut self, sort: &SortState) {
        sort_rows(&mut self.rows, sort);
    }

    /// Returns the rows in their current canonical order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consumes the store and returns the rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}
