//! Table configuration

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::model::Column;
use crate::model::Row;
use crate::query::PageSize;
use crate::query::SortState;

/// Everything needed to build a [`DataTable`](super::DataTable).
///
/// Validated once by [`DataTable::new`](super::DataTable::new); nothing here
/// changes after construction except the rows, which can be replaced
/// wholesale with [`DataTable::set_rows`](super::DataTable::set_rows).
///
/// # Example
///
/// ```
/// use datatable_lib::model::{Column, Row};
/// use datatable_lib::query::{PageSize, SortState};
/// use datatable_lib::view::{RenderDescriptor, TableConfig};
///
/// let config = TableConfig::new()
///     .with_target(|_view: &RenderDescriptor| {})
///     .with_columns(vec![Column::new("name", "Name"), Column::new("age", "Age")])
///     .with_rows(vec![Row::new().set("name", "Bo").set("age", 30i64)])
///     .with_page_size(PageSize::Fixed(10))
///     .with_initial_sort(SortState::desc("age"));
/// ```
#[derive(Debug, Clone)]
pub struct TableConfig<R> {
    /// Display surface the table renders into.
    ///
    /// Required: construction fails with [`ConfigError::MissingTarget`]
    /// without it.
    pub target: Option<R>,

    /// Initial dataset.
    ///
    /// Default: empty
    pub rows: Vec<Row>,

    /// Column definitions, in display order.
    ///
    /// Default: empty (at least one is required)
    pub columns: Vec<Column>,

    /// Whether the search box is shown and search input is accepted.
    ///
    /// Default: `true`
    pub enable_search: bool,

    /// Rows per page.
    ///
    /// Default: `PageSize::Fixed(3)`
    pub page_size: PageSize,

    /// Sort applied before the first render.
    ///
    /// Default: first column, ascending
    pub initial_sort: Option<SortState>,
}

impl<R> Default for TableConfig<R> {
    fn default() -> Self {
        Self {
            target: None,
            rows: Vec::new(),
            columns: Vec::new(),
            enable_search: true,
            page_size: PageSize::default(),
            initial_sort: None,
        }
    }
}

impl<R> TableConfig<R> {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the render target.
    pub fn with_target(mut self, target: R) -> Self {
        self.target = Some(target);
        self
    }

    /// Sets the initial rows.
    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the columns.
    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    /// Enables or disables search.
    pub fn with_search(mut self, enable: bool) -> Self {
        self.enable_search = enable;
        self
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Shows every row on a single page.
    pub fn unpaginated(mut self) -> Self {
        self.page_size = PageSize::Unbounded;
        self
    }

    /// Sets the initial sort.
    pub fn with_initial_sort(mut self, sort: SortState) -> Self {
        self.initial_sort = Some(sort);
        self
    }

    /// Checks everything except the target and resolves the initial sort.
    pub(crate) fn validate(&self) -> Result<SortState, ConfigError> {
        if let PageSize::Fixed(0) = self.page_size {
            return Err(ConfigError::InvalidPageSize);
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.field.as_str()) {
                return Err(ConfigError::duplicate_column(&column.field));
            }
        }

        match &self.initial_sort {
            Some(sort) if seen.contains(sort.field.as_str()) => Ok(sort.clone()),
            Some(sort) => Err(ConfigError::unknown_sort_field(&sort.field)),
            None => self
                .columns
                .first()
                .map(|column| SortState::asc(&column.field))
                .ok_or(ConfigError::NoColumns),
        }
    }
}
