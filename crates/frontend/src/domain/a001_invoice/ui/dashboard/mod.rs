//! InvoiceDashboard UI Module
//!
//! MVVM split as in the other screens:
//! - state.rs: panel enum shown by the sidebar
//! - view_model.rs: signals plus commands (resync, create, delete, toggle)
//! - view.rs: Leptos component wiring sidebar and panels

mod state;
mod view;
mod view_model;

pub use state::ActivePanel;
pub use view::InvoiceDashboard;
pub use view_model::{InvoiceDashboardViewModel, MutationKey};
