//! ==============================================================================
//! lib.rs - DeepLink web front end
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm front end for the deeplink social network. renders the
//!     top navigation bar; page content and navigation belong to the router.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, served by trunk from index.html
//!     - header tree described by the shared crate
//!     - links delegate to leptos_router
//!
//! ==============================================================================

use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::components::Router;
use wasm_bindgen::prelude::*;

mod components;

pub use components::{HeaderBar, NavLink};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    log!("mounting {} header", shared::PRODUCT_NAME);
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <HeaderBar />
        </Router>
    }
}
