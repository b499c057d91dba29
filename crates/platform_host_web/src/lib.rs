//! Browser (`wasm32`) implementations of the [`platform_host`] contracts.
//!
//! Concretely: a `localStorage`-backed [`platform_host::KeyValueStore`]
//! adapter and the hidden-input archive picker used by the upload flow.
//! Non-wasm targets get inert fallbacks so logic crates stay testable on
//! the host.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod picker;
pub mod storage;

pub use picker::{pick_archive_file, PickedFile};
pub use storage::WebKeyValueStore;
