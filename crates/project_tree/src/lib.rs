//! Client-side model of an uploaded project's file/directory tree.
//!
//! This crate converts the backend's listing of extracted archive contents
//! into a single-rooted [`FileNode`] tree the explorer can display. The two
//! accepted listing shapes are classified into an explicit [`UploadListing`]
//! variant at the boundary, then dispatched to one builder.
//!
//! # Example
//!
//! ```rust
//! use project_tree::{build_tree, UploadListing};
//! use serde_json::json;
//!
//! let response = json!({
//!     "filename": "demo.zip",
//!     "extracted_files": [
//!         { "path": "src/main.rs", "is_dir": false },
//!         { "path": "README.md", "is_dir": false },
//!     ],
//! });
//!
//! let listing = UploadListing::from_upload_value(&response).expect("listing");
//! let root = build_tree(&listing, "demo").expect("tree");
//! assert_eq!(root.path, "demo");
//! assert_eq!(root.children.len(), 2);
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod builder;
mod listing;
mod node;

pub use builder::{build_tree, normalize_entry_path};
pub use listing::{RawEntry, RawNode, UploadListing};
pub use node::{FileNode, TreeSummary};
