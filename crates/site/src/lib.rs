//! ZipMind single-page application shell.
//!
//! Routes, authentication-state gating, and the three-pane workspace page
//! live here; the panels themselves come from the app crates.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod home;
mod project_state;
mod web_app;

pub use home::HomePage;
pub use project_state::{
    clear_project_snapshot, load_project_snapshot, persist_project_snapshot, ProjectSnapshot,
};
pub use web_app::SiteApp;

/// Mounts the application to the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
