//! Key/value storage contract, storage keys, and baseline implementations.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Storage key for the current project snapshot (tree + display name).
pub const PROJECT_STATE_KEY: &str = "zipmind.project.v1";
/// Storage key for the current session's bearer token.
pub const SESSION_TOKEN_KEY: &str = "zipmind.session.v1";

/// Builds the storage key for a project's chat transcript.
pub fn chat_transcript_key(project_name: &str) -> String {
    format!("zipmind.chat.{project_name}.v1")
}

/// Object-safe boxed future used by [`KeyValueStore`] methods.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Persisted key/value storage boundary with raw-JSON get/set/clear.
///
/// Implementations never surface "key absent" as an error; absence is
/// `Ok(None)` so callers can fall back to default state.
pub trait KeyValueStore {
    /// Loads the raw JSON string stored under `key`.
    fn load_json<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Result<Option<String>, String>>;

    /// Stores a raw JSON string under `key`, replacing any previous value.
    fn save_json<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> StoreFuture<'a, Result<(), String>>;

    /// Removes the value stored under `key`, if any.
    fn delete_json<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Result<(), String>>;
}

/// Loads and deserializes a typed value from a store.
///
/// A missing key or an unparsable stored value both yield `Ok(None)`;
/// corrupt persisted state degrades to "nothing stored" instead of an error.
///
/// # Errors
///
/// Returns an error only when the underlying store fails.
pub async fn load_typed_with<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, String> {
    let raw = store.load_json(key).await?;
    Ok(raw.and_then(|raw| serde_json::from_str(&raw).ok()))
}

/// Serializes and stores a typed value.
///
/// # Errors
///
/// Returns an error when serialization or the underlying store fails.
pub async fn save_typed_with<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_json(key, &raw).await
}

/// Clears the value stored under `key`.
///
/// # Errors
///
/// Returns an error when the underlying store fails.
pub async fn clear_with(store: &dyn KeyValueStore, key: &str) -> Result<(), String> {
    store.delete_json(key).await
}

#[derive(Debug, Clone)]
/// In-memory store used by non-browser targets and tests.
pub struct MemoryKeyValueStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl Default for MemoryKeyValueStore {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(HashMap::new())),
        }
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn load_json<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().get(key).cloned()) })
    }

    fn save_json<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> StoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }

    fn delete_json<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().remove(key);
            Ok(())
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op store for unsupported targets; loads nothing, accepts everything.
pub struct NoopKeyValueStore;

impl KeyValueStore for NoopKeyValueStore {
    fn load_json<'a>(&'a self, _key: &'a str) -> StoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_json<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> StoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn delete_json<'a>(&'a self, _key: &'a str) -> StoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Payload {
        count: u32,
        label: String,
    }

    #[test]
    fn memory_store_round_trips_typed_values() {
        let store = MemoryKeyValueStore::default();
        let store_obj: &dyn KeyValueStore = &store;
        let payload = Payload {
            count: 3,
            label: "ok".to_string(),
        };

        block_on(save_typed_with(store_obj, "k", &payload)).expect("save");
        let loaded: Option<Payload> = block_on(load_typed_with(store_obj, "k")).expect("load");
        assert_eq!(loaded, Some(payload));
    }

    #[test]
    fn clear_removes_stored_value() {
        let store = MemoryKeyValueStore::default();
        let store_obj: &dyn KeyValueStore = &store;

        block_on(save_typed_with(store_obj, "k", &1_u32)).expect("save");
        block_on(clear_with(store_obj, "k")).expect("clear");
        let loaded: Option<u32> = block_on(load_typed_with(store_obj, "k")).expect("load");
        assert_eq!(loaded, None);
    }

    #[test]
    fn corrupt_stored_json_loads_as_absent() {
        let store = MemoryKeyValueStore::default();
        let store_obj: &dyn KeyValueStore = &store;

        block_on(store_obj.save_json("k", "{not json")).expect("save raw");
        let loaded: Option<Payload> = block_on(load_typed_with(store_obj, "k")).expect("load");
        assert_eq!(loaded, None);
    }

    #[test]
    fn type_mismatch_loads_as_absent() {
        let store = MemoryKeyValueStore::default();
        let store_obj: &dyn KeyValueStore = &store;

        block_on(save_typed_with(store_obj, "k", &"a string")).expect("save");
        let loaded: Option<Payload> = block_on(load_typed_with(store_obj, "k")).expect("load");
        assert_eq!(loaded, None);
    }

    #[test]
    fn noop_store_is_empty_and_successful() {
        let store = NoopKeyValueStore;
        let store_obj: &dyn KeyValueStore = &store;

        block_on(store_obj.save_json("k", "{}")).expect("save");
        assert_eq!(block_on(store_obj.load_json("k")).expect("load"), None);
        block_on(store_obj.delete_json("k")).expect("delete");
    }

    #[test]
    fn chat_transcript_key_is_scoped_by_project() {
        assert_eq!(chat_transcript_key("demo"), "zipmind.chat.demo.v1");
        assert_ne!(chat_transcript_key("a"), chat_transcript_key("b"));
    }
}
