//! Typed host contracts for ZipMind's persisted-state boundary.
//!
//! The explorer, chat, and session state survive a page reload through a
//! small key/value storage interface. This crate owns that interface plus
//! the versioned persistence envelope and time helpers; the concrete
//! browser adapter lives in `platform_host_web`, so core components depend
//! on a contract rather than a global.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod envelope;
pub mod store;
pub mod time;

pub use envelope::{
    build_state_envelope, migrate_envelope_payload, StateEnvelope, STATE_ENVELOPE_VERSION,
};
pub use store::{
    chat_transcript_key, clear_with, load_typed_with, save_typed_with, KeyValueStore,
    MemoryKeyValueStore, NoopKeyValueStore, StoreFuture, PROJECT_STATE_KEY, SESSION_TOKEN_KEY,
};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now};
