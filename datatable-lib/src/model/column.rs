//! Column definitions

use std::fmt;
use std::sync::Arc;

use super::Row;

/// Custom cell renderer: turns a whole row into the markup for one cell.
pub type CellRenderer = Arc<dyn Fn(&Row) -> String + Send + Sync>;

/// A table column definition.
///
/// Columns are configured once when the table is built and never change
/// afterwards.
///
/// # Example
///
/// ```
/// use datatable_lib::model::Column;
///
/// let columns = vec![
///     Column::new("name", "Name"),
///     Column::new("age", "Age"),
///     Column::new("id", "Actions")
///         .ignore_filtering()
///         .with_cell(|row| format!("<a href=\"/edit/{}\">edit</a>", row.value("id"))),
/// ];
/// ```
#[derive(Clone)]
pub struct Column {
    /// Row field this column reads.
    pub field: String,
    /// Header text.
    pub header: String,
    /// Excluded from search matching and from click-to-sort.
    pub ignore_filtering: bool,
    cell: Option<CellRenderer>,
}

impl Column {
    /// Create a new column for `field` with the given header label.
    pub fn new(field: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            header: header.into(),
            ignore_filtering: false,
            cell: None,
        }
    }

    /// Exclude this column from search matching and header sorting.
    pub fn ignore_filtering(mut self) -> Self {
        self.ignore_filtering = true;
        self
    }

    /// Render this column's cells with a custom function instead of the
    /// field's display text.
    pub fn with_cell<F>(mut self, render: F) -> Self
    where
        F: Fn(&Row) -> String + Send + Sync + 'static,
    {
        self.cell = Some(Arc::new(render));
        self
    }

    /// Whether a header activation on this column changes the sort.
    pub fn is_sortable(&self) -> bool {
        !self.ignore_filtering
    }

    /// Whether search terms are matched against this column.
    pub fn is_filterable(&self) -> bool {
        !self.ignore_filtering
    }

    /// Returns the custom cell renderer, if any.
    pub fn cell_renderer(&self) -> Option<&CellRenderer> {
        self.cell.as_ref()
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("field", &self.field)
            .field("header", &self.header)
            .field("ignore_filtering", &self.ignore_filtering)
            .field("cell", &self.cell.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
