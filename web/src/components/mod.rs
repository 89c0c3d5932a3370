//! ==============================================================================
//! components/mod.rs - UI Components
//! ==============================================================================

mod header_bar;
mod nav_link;

pub use header_bar::HeaderBar;
pub use nav_link::NavLink;
