//! Typed persistence facade over the wired key/value store.
//!
//! Durable app state (project snapshot, chat transcripts) goes through
//! versioned [`StateEnvelope`]s; the session token is a lightweight plain
//! value read synchronously at boot. Consumers call these functions and
//! never touch `localStorage` directly, so every caller inherits the same
//! corrupt-state-degrades-to-absent behavior.
//!
//! # Example
//!
//! ```rust
//! use platform_host::MemoryKeyValueStore;
//! use platform_storage::{load_state_with, save_state_with};
//!
//! futures::executor::block_on(async {
//!     let store = MemoryKeyValueStore::default();
//!     save_state_with(&store, "k", 1, &3_u32).await.expect("save");
//!     let loaded: Option<u32> = load_state_with(&store, "k", 1).await.expect("load");
//!     assert_eq!(loaded, Some(3));
//! });
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use platform_host::{
    build_state_envelope, clear_with, load_typed_with, migrate_envelope_payload, save_typed_with,
    KeyValueStore, StateEnvelope, SESSION_TOKEN_KEY,
};
use platform_host_web::WebKeyValueStore;
use serde::{de::DeserializeOwned, Serialize};

pub use platform_host::{chat_transcript_key, PROJECT_STATE_KEY};

/// Saves a payload under `key` wrapped in a versioned envelope.
///
/// # Errors
///
/// Returns an error when serialization or the store fails.
pub async fn save_state_with<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    schema_version: u32,
    payload: &T,
) -> Result<(), String> {
    let envelope = build_state_envelope(key, schema_version, payload)?;
    save_typed_with(store, key, &envelope).await
}

/// Loads a payload for `key`, accepting only the expected schema version.
///
/// A missing key, corrupt stored JSON, a schema-version mismatch, and a
/// payload that no longer decodes all yield `Ok(None)`.
///
/// # Errors
///
/// Returns an error only when the store itself fails.
pub async fn load_state_with<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
    schema_version: u32,
) -> Result<Option<T>, String> {
    let Some(envelope) = load_typed_with::<StateEnvelope>(store, key).await? else {
        return Ok(None);
    };
    if envelope.schema_version != schema_version {
        return Ok(None);
    }
    Ok(migrate_envelope_payload(&envelope).ok())
}

/// Clears the state stored under `key`.
///
/// # Errors
///
/// Returns an error when the store fails.
pub async fn clear_state_with(store: &dyn KeyValueStore, key: &str) -> Result<(), String> {
    clear_with(store, key).await
}

/// Saves enveloped state through the browser store.
///
/// # Errors
///
/// Returns an error when serialization or the store fails.
pub async fn save_state<T: Serialize>(
    key: &str,
    schema_version: u32,
    payload: &T,
) -> Result<(), String> {
    save_state_with(&WebKeyValueStore, key, schema_version, payload).await
}

/// Loads enveloped state through the browser store.
///
/// # Errors
///
/// Returns an error only when the store itself fails.
pub async fn load_state<T: DeserializeOwned>(
    key: &str,
    schema_version: u32,
) -> Result<Option<T>, String> {
    load_state_with(&WebKeyValueStore, key, schema_version).await
}

/// Clears enveloped state through the browser store.
///
/// # Errors
///
/// Returns an error when the store fails.
pub async fn clear_state(key: &str) -> Result<(), String> {
    clear_state_with(&WebKeyValueStore, key).await
}

/// Loads the persisted session token, if any.
///
/// The read is synchronous so route gating can run before first paint.
pub fn load_session_token() -> Option<String> {
    let raw = WebKeyValueStore.load(SESSION_TOKEN_KEY)?;
    serde_json::from_str(&raw).ok()
}

/// Persists the session token.
///
/// # Errors
///
/// Returns an error when serialization or localStorage fails.
pub fn save_session_token(token: &str) -> Result<(), String> {
    let raw = serde_json::to_string(token).map_err(|e| e.to_string())?;
    WebKeyValueStore.save(SESSION_TOKEN_KEY, &raw)
}

/// Clears the session token.
///
/// # Errors
///
/// Returns an error when localStorage fails.
pub fn clear_session_token() -> Result<(), String> {
    WebKeyValueStore.delete(SESSION_TOKEN_KEY)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryKeyValueStore;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Transcript {
        entries: Vec<String>,
    }

    #[test]
    fn state_round_trips_through_envelope() {
        let store = MemoryKeyValueStore::default();
        let transcript = Transcript {
            entries: vec!["hi".to_string(), "hello".to_string()],
        };

        block_on(save_state_with(&store, "zipmind.chat.demo.v1", 1, &transcript)).expect("save");
        let loaded: Option<Transcript> =
            block_on(load_state_with(&store, "zipmind.chat.demo.v1", 1)).expect("load");
        assert_eq!(loaded, Some(transcript));
    }

    #[test]
    fn schema_version_mismatch_loads_as_absent() {
        let store = MemoryKeyValueStore::default();
        block_on(save_state_with(&store, "k", 1, &7_u32)).expect("save");

        let loaded: Option<u32> = block_on(load_state_with(&store, "k", 2)).expect("load");
        assert_eq!(loaded, None);
    }

    #[test]
    fn corrupt_envelope_loads_as_absent() {
        let store = MemoryKeyValueStore::default();
        let store_obj: &dyn KeyValueStore = &store;
        block_on(store_obj.save_json("k", "{broken")).expect("save raw");

        let loaded: Option<u32> = block_on(load_state_with(&store, "k", 1)).expect("load");
        assert_eq!(loaded, None);
    }

    #[test]
    fn clear_state_removes_value() {
        let store = MemoryKeyValueStore::default();
        block_on(save_state_with(&store, "k", 1, &7_u32)).expect("save");
        block_on(clear_state_with(&store, "k")).expect("clear");

        let loaded: Option<u32> = block_on(load_state_with(&store, "k", 1)).expect("load");
        assert_eq!(loaded, None);
    }
}
