//! `localStorage`-backed key/value store implementation.
//!
//! The browser API is synchronous; the async [`KeyValueStore`] surface is
//! kept for parity with the host contract so consumers never notice which
//! backend is wired in.

use platform_host::{KeyValueStore, StoreFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Browser key/value store backed by `window.localStorage`.
pub struct WebKeyValueStore;

impl WebKeyValueStore {
    /// Loads a raw JSON string for a key.
    pub fn load(self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(key).ok().flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    /// Saves a raw JSON string for a key.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the write fails.
    pub fn save(self, key: &str, raw_json: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| "localStorage unavailable".to_string())?;
            storage
                .set_item(key, raw_json)
                .map_err(|e| format!("localStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw_json);
            Ok(())
        }
    }

    /// Deletes a key from localStorage.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is unavailable or the delete fails.
    pub fn delete(self, key: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or_else(|| "localStorage unavailable".to_string())?;
            storage
                .remove_item(key)
                .map_err(|e| format!("localStorage remove_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

impl KeyValueStore for WebKeyValueStore {
    fn load_json<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Result<Option<String>, String>> {
        let store = *self;
        Box::pin(async move { Ok(store.load(key)) })
    }

    fn save_json<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> StoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.save(key, raw_json) })
    }

    fn delete_json<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Result<(), String>> {
        let store = *self;
        Box::pin(async move { store.delete(key) })
    }
}
