//! Single-column ordering of rows.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::model::Row;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    /// Applies this direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

/// The active sort field and direction. Exactly one is active at a time.
///
/// # Example
///
/// ```
/// use datatable_lib::query::{Direction, SortState};
///
/// let sort = SortState::asc("name");
/// let sort = sort.activate("name");
/// assert_eq!(sort.direction, Direction::Desc);
///
/// let sort = sort.activate("age");
/// assert_eq!(sort, SortState::asc("age"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Field being sorted on.
    pub field: String,
    /// Sort direction.
    #[serde(default, alias = "order")]
    pub direction: Direction,
}

impl SortState {
    /// Creates a sort state with an explicit direction.
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Creates an ascending sort on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, Direction::Asc)
    }

    /// Creates a descending sort on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, Direction::Desc)
    }

    /// Returns the state after a header activation on `field`.
    ///
    /// The same field toggles its direction; a different field starts
    /// ascending.
    pub fn activate(&self, field: &str) -> Self {
        if self.field == field {
            Self::new(field, self.direction.toggled())
        } else {
            Self::asc(field)
        }
    }
}

/// Compares two rows on the sort field, honoring the direction.
pub fn compare_rows(a: &Row, b: &Row, sort: &SortState) -> Ordering {
    let ordering = a.value(&sort.field).compare(b.value(&sort.field));
    sort.direction.apply(ordering)
}

/// Sorts rows in place by the given state.
///
/// The sort is stable: rows equal on the sort field keep their current
/// relative order, so repeating the same sort leaves the sequence unchanged.
pub fn sort_rows(rows: &mut [Row], sort: &SortState) {
    rows.sort_by(|a, b| compare_rows(a, b, sort));
}
