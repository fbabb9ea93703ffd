//! The table state machine.

use crate::error::ConfigError;
use crate::model::Column;
use crate::model::Row;
use crate::query::Paginator;
use crate::query::filter_rows;
use crate::store::RowStore;

use super::Command;
use super::RenderDescriptor;
use super::Renderer;
use super::TableConfig;
use super::ViewState;
use super::descriptor::compose;

/// A searchable, sortable, paginated table.
///
/// `DataTable` is the single writer of its rows and [`ViewState`]. Every
/// event handler runs one synchronous transition:
///
/// 1. apply the command to the view state
/// 2. sort the stored rows by the current sort
/// 3. filter them by the current search term
/// 4. reset the current page to 1 if it is out of range
/// 5. slice the page and hand the descriptor to the renderer
///
/// A descriptor is rendered once on construction.
///
/// # Example
///
/// ```
/// use datatable_lib::model::{Column, Row};
/// use datatable_lib::query::PageSize;
/// use datatable_lib::view::{DataTable, RenderDescriptor, TableConfig};
///
/// let config = TableConfig::new()
///     .with_target(|view: &RenderDescriptor| println!("{}", view.footer.caption()))
///     .with_columns(vec![Column::new("name", "Name"), Column::new("age", "Age")])
///     .with_rows(vec![
///         Row::new().set("name", "Bo").set("age", 30i64),
///         Row::new().set("name", "Al").set("age", 25i64),
///     ])
///     .with_page_size(PageSize::Fixed(1));
///
/// let mut table = DataTable::new(config)?;
/// table.on_page_activate(2);
/// table.on_search_input("bo");
/// assert_eq!(table.state().page, 1);
/// # Ok::<(), datatable_lib::error::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct DataTable<R: Renderer> {
    target: R,
    columns: Vec<Column>,
    store: RowStore,
    paginator: Paginator,
    search_enabled: bool,
    state: ViewState,
}

impl<R: Renderer> DataTable<R> {
    /// Validates the config, builds the table and renders the initial view.
    pub fn new(config: TableConfig<R>) -> Result<Self, ConfigError> {
        let sort = config.validate()?;
        let TableConfig {
            target,
            rows,
            columns,
            enable_search,
            page_size,
            ..
        } = config;
        let target = target.ok_or(ConfigError::MissingTarget)?;

        log::debug!(
            "[table] created with {} rows, {} columns, page size {:?}, sort {:?}",
            rows.len(),
            columns.len(),
            page_size,
            sort
        );

        let mut table = Self {
            target,
            columns,
            store: RowStore::new(rows),
            paginator: Paginator::new(page_size),
            search_enabled: enable_search,
            state: ViewState::new(sort),
        };
        table.refresh();
        Ok(table)
    }

    // -------------------------------------------------------------------------
    // Inbound events
    // -------------------------------------------------------------------------

    /// Search box input changed.
    pub fn on_search_input(&mut self, raw: &str) {
        self.dispatch(Command::Search(raw.to_string()));
    }

    /// A column header was activated.
    pub fn on_header_activate(&mut self, field: &str) {
        self.dispatch(Command::Sort(field.to_string()));
    }

    /// A page button was activated.
    pub fn on_page_activate(&mut self, page: usize) {
        self.dispatch(Command::Page(page));
    }

    /// Moves to the next page, staying on the last one.
    pub fn next_page(&mut self) {
        let page = if self.state.page < self.total_pages() {
            self.state.page + 1
        } else {
            self.state.page
        };
        self.dispatch(Command::Page(page));
    }

    /// Moves to the previous page, staying on the first one.
    pub fn previous_page(&mut self) {
        self.dispatch(Command::Page(self.state.page.saturating_sub(1).max(1)));
    }

    /// Applies a command, recomputes the view and renders it.
    pub fn dispatch(&mut self, command: Command) {
        log::debug!("[table] dispatch {:?}", command);
        self.state = self
            .state
            .apply(&command, &self.columns, self.search_enabled);
        self.refresh();
    }

    /// Replaces the whole dataset, keeping search and sort.
    ///
    /// The page is kept too unless the new data no longer reaches it, in
    /// which case it falls back to 1.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        log::debug!("[table] replacing dataset with {} rows", rows.len());
        self.store.replace(rows);
        self.refresh();
    }

    /// Recomputes the view from the current state and renders it.
    pub fn refresh(&mut self) {
        let view = self.recompute();
        self.target.render(&view);
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Column definitions.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Stored rows in their current (most recently sorted) order.
    pub fn rows(&self) -> &[Row] {
        self.store.rows()
    }

    /// Number of pages the rows matching the current search fill.
    pub fn total_pages(&self) -> usize {
        let matching = filter_rows(self.store.rows(), &self.columns, &self.state.search).len();
        self.paginator.total_pages(matching)
    }

    /// Whether search input is accepted.
    pub fn search_enabled(&self) -> bool {
        self.search_enabled
    }

    /// The render target.
    pub fn target(&self) -> &R {
        &self.target
    }

    /// Mutable access to the render target.
    pub fn target_mut(&mut self) -> &mut R {
        &mut self.target
    }

    /// Recomputes the current descriptor without rendering it.
    pub fn descriptor(&mut self) -> RenderDescriptor {
        self.recompute()
    }

    /// Runs the pipeline and normalizes the page. Leaves only inputs as state.
    fn recompute(&mut self) -> RenderDescriptor {
        self.store.sort(&self.state.sort);

        let filtered = filter_rows(self.store.rows(), &self.columns, &self.state.search);

        let page = self.paginator.normalize_page(filtered.len(), self.state.page);
        if page != self.state.page {
            log::debug!("[table] page {} out of range, reset to {}", self.state.page, page);
            self.state.page = page;
        }

        log::debug!(
            "[table] {} of {} rows match {:?}, page {}/{}",
            filtered.len(),
            self.store.len(),
            self.state.search.as_str(),
            page,
            self.paginator.total_pages(filtered.len())
        );

        compose(
            &self.columns,
            &self.state,
            self.search_enabled,
            &filtered,
            &self.paginator,
        )
    }
}
