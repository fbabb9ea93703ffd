//! Render descriptor: the declarative output a renderer draws from.

use serde::Serialize;

use crate::model::Column;
use crate::model::Row;
use crate::query::Direction;
use crate::query::PageToken;
use crate::query::Paginator;
use crate::query::SortState;
use crate::query::page_window;

use super::ViewState;

/// Everything a renderer needs to draw one frame of the table.
///
/// Descriptors are plain data: rendering the same descriptor twice must
/// produce the same output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderDescriptor {
    /// Search box contents, or `None` when search is disabled.
    pub search: Option<SearchBox>,
    /// One cell per column.
    pub header: Vec<HeaderCell>,
    /// Rows of the current page.
    pub body: Vec<BodyRow>,
    /// Caption and page navigation.
    pub footer: Footer,
}

impl RenderDescriptor {
    /// Returns `true` if no row matched the current search.
    pub fn is_empty(&self) -> bool {
        matches!(self.footer, Footer::NoEntries)
    }
}

/// Search box model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBox {
    /// The active, normalized term.
    pub term: String,
}

/// Header cell model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    /// Field the column reads; pass back to `on_header_activate`.
    pub field: String,
    /// Display label.
    pub label: String,
    /// Whether activating this header changes the sort.
    pub sortable: bool,
    /// Active sort direction, set only on the sorted sortable column.
    pub sort: Option<Direction>,
}

/// A single body cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "content")]
pub enum Cell {
    /// Plain text from the field value.
    Text(String),
    /// Markup produced by the column's cell renderer.
    Markup(String),
}

impl Cell {
    /// Returns the cell content regardless of kind.
    pub fn content(&self) -> &str {
        match self {
            Cell::Text(s) | Cell::Markup(s) => s,
        }
    }
}

/// A body row: one cell per column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BodyRow {
    pub cells: Vec<Cell>,
}

/// Footer model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Footer {
    /// The search matched nothing (or there is no data).
    NoEntries,
    /// Result range and navigation.
    Summary {
        /// 1-based index of the first row shown.
        range_start: usize,
        /// 1-based index of the last row shown.
        range_end: usize,
        /// Number of rows matching the search.
        total_count: usize,
        /// Current page, always within `1..=total_pages`.
        current_page: usize,
        /// Number of pages.
        total_pages: usize,
        /// Navigation tokens; empty when there is only one page.
        page_window: Vec<PageToken>,
    },
}

impl Footer {
    /// Result caption, e.g. `Showing 4 to 6 of 10 items`.
    pub fn caption(&self) -> String {
        match self {
            Footer::NoEntries => "No entries found".to_string(),
            Footer::Summary {
                range_start,
                range_end,
                total_count,
                ..
            } => format!(
                "Showing {} to {} of {} items",
                range_start, range_end, total_count
            ),
        }
    }
}

/// Builds the header model.
fn header(columns: &[Column], sort: &SortState) -> Vec<HeaderCell> {
    columns
        .iter()
        .map(|column| {
            let sortable = column.is_sortable();
            HeaderCell {
                field: column.field.clone(),
                label: column.header.clone(),
                sortable,
                sort: (sortable && column.field == sort.field).then_some(sort.direction),
            }
        })
        .collect()
}

/// Resolves one row into cells.
fn body_row(row: &Row, columns: &[Column]) -> BodyRow {
    let cells = columns
        .iter()
        .map(|column| match column.cell_renderer() {
            Some(render) => Cell::Markup(render(row)),
            None => Cell::Text(row.value(&column.field).to_string()),
        })
        .collect();
    BodyRow { cells }
}

/// Assembles the descriptor for `filtered` rows under `state`.
///
/// `state.page` must already be in range.
pub(crate) fn compose(
    columns: &[Column],
    state: &ViewState,
    search_enabled: bool,
    filtered: &[&Row],
    paginator: &Paginator,
) -> RenderDescriptor {
    let range = paginator.range(filtered.len(), state.page);
    let body: Vec<BodyRow> = filtered[range.clone()]
        .iter()
        .map(|row| body_row(row, columns))
        .collect();

    let footer = if filtered.is_empty() {
        Footer::NoEntries
    } else {
        let total_pages = paginator.total_pages(filtered.len());
        Footer::Summary {
            range_start: range.start + 1,
            range_end: range.end,
            total_count: filtered.len(),
            current_page: state.page,
            total_pages,
            page_window: page_window(total_pages, state.page),
        }
    };

    RenderDescriptor {
        search: search_enabled.then(|| SearchBox {
            term: state.search.as_str().to_string(),
        }),
        header: header(columns, &state.sort),
        body,
        footer,
    }
}
