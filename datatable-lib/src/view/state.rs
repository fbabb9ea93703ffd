//! View state and the commands that change it.

use crate::model::Column;
use crate::query::SearchTerm;
use crate::query::SortState;

/// An inbound user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Raw text typed into the search box.
    Search(String),
    /// A header was activated.
    Sort(String),
    /// A page button was activated.
    Page(usize),
}

/// The only state a table owns besides its rows.
///
/// Sorted, filtered and paged views are recomputed from this on every
/// transition and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Current search term.
    pub search: SearchTerm,
    /// Current sort.
    pub sort: SortState,
    /// Current page (1-based). Clamped by the pipeline after every transition.
    pub page: usize,
}

impl ViewState {
    /// Initial state: no search, the given sort, first page.
    pub fn new(sort: SortState) -> Self {
        Self {
            search: SearchTerm::default(),
            sort,
            page: 1,
        }
    }

    /// Returns the state after `command`.
    ///
    /// - Search replaces the term and always returns to page 1. Ignored when
    ///   search is disabled.
    /// - Sort toggles the direction on the active field or switches to a new
    ///   field ascending, keeping the page. Ignored for unknown or
    ///   non-sortable columns.
    /// - Page sets the page as given; out-of-range pages are reset later.
    pub fn apply(&self, command: &Command, columns: &[Column], search_enabled: bool) -> Self {
        let mut next = self.clone();
        match command {
            Command::Search(raw) => {
                if !search_enabled {
                    log::debug!("[view] search disabled, ignoring input {:?}", raw);
                    return next;
                }
                next.search = SearchTerm::new(raw);
                next.page = 1;
            }
            Command::Sort(field) => match columns.iter().find(|c| &c.field == field) {
                Some(column) if column.is_sortable() => {
                    next.sort = self.sort.activate(field);
                }
                Some(_) => {
                    log::debug!("[view] column '{}' is not sortable", field);
                }
                None => {
                    log::warn!("[view] header activated for unknown field '{}'", field);
                }
            },
            Command::Page(page) => {
                next.page = *page;
            }
        }
        next
    }
}
