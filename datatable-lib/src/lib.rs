//! In-memory data table core
//!
//! Search, single-column sort and windowed pagination over a dataset held in
//! memory. The crate computes what to show; drawing it is left to a
//! [`view::Renderer`].

pub mod error;
pub mod model;
pub mod query;
pub mod store;
pub mod view;

pub use store::RowStore;
pub use view::DataTable;
pub use view::TableConfig;
