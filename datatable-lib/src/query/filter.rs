//! Case-insensitive substring search across filterable columns.

use std::fmt;

use serde::Serialize;

use crate::model::Column;
use crate::model::Row;

/// A normalized search term: trimmed and lower-cased.
///
/// The empty term means "no filter".
///
/// # Example
///
/// ```
/// use datatable_lib::query::SearchTerm;
///
/// let term = SearchTerm::new("  Bo ");
/// assert_eq!(term.as_str(), "bo");
/// assert!(SearchTerm::new("   ").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Normalizes raw input into a search term.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Returns `true` if this term filters nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the normalized term.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if any filterable column of the row contains the term.
    ///
    /// The empty term matches every row.
    pub fn matches(&self, row: &Row, columns: &[Column]) -> bool {
        if self.is_empty() {
            return true;
        }
        columns
            .iter()
            .filter(|column| column.is_filterable())
            .any(|column| row.value(&column.field).search_text().contains(&self.0))
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the rows matching `term`, in their input order.
///
/// The result is always a freshly allocated list, even for the empty term.
/// With no filterable columns, a non-empty term matches nothing.
pub fn filter_rows<'a>(rows: &'a [Row], columns: &[Column], term: &SearchTerm) -> Vec<&'a Row> {
    rows.iter().filter(|row| term.matches(row, columns)).collect()
}
