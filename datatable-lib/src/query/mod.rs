//! Sorting, filtering and pagination over in-memory rows.
//!
//! # Shared Types
//!
//! - [`SortState`] - The active sort field and [`Direction`]
//! - [`SearchTerm`] - A normalized, case-insensitive search term
//! - [`Paginator`] - Slices rows into pages and builds the page window

mod filter;
mod order;
mod page;

pub use filter::SearchTerm;
pub use filter::filter_rows;
pub use order::Direction;
pub use order::SortState;
pub use order::compare_rows;
pub use order::sort_rows;
pub use page::PAGE_WINDOW_RADIUS;
pub use page::PageSize;
pub use page::PageToken;
pub use page::Paginator;
pub use page::page_window;
