//! The table view: configuration, state machine and render output.
//!
//! [`DataTable`] owns the rows and the [`ViewState`]. Each inbound event runs
//! the same pipeline (sort, filter, normalize page, paginate) and hands the
//! resulting [`RenderDescriptor`] to the table's [`Renderer`].

mod config;
mod controller;
mod descriptor;
mod renderer;
mod state;

pub use config::TableConfig;
pub use controller::DataTable;
pub use descriptor::BodyRow;
pub use descriptor::Cell;
pub use descriptor::Footer;
pub use descriptor::HeaderCell;
pub use descriptor::RenderDescriptor;
pub use descriptor::SearchBox;
pub use renderer::Renderer;
pub use state::Command;
pub use state::ViewState;
