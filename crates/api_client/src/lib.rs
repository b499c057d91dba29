//! Typed HTTP client for the ZipMind backend service.
//!
//! Every "interesting" computation (analysis, chat answers, archive
//! extraction) happens server-side; this crate owns the request/response
//! shapes and the fetch plumbing. Fetches are only available on `wasm32`;
//! on other targets the client methods return an error so the shared types
//! stay testable on the host.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod client;
mod error;
mod types;

pub use client::{ApiClient, ApiConfig};
pub use error::ApiError;
pub use types::{
    AuthRequest, AuthResponse, ChatRequest, ChatResponse, FileAnalysis, FileContentResponse,
    FunctionDoc, UploadResponse,
};
