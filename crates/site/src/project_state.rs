//! Persistence of the current-project snapshot across page reloads.

use leptos::logging;
use platform_host::PROJECT_STATE_KEY;
use project_tree::FileNode;
use serde::{Deserialize, Serialize};

/// Payload schema version for persisted project snapshots.
const PROJECT_SNAPSHOT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// The durable identity of the loaded project: display name plus tree.
pub struct ProjectSnapshot {
    /// Cleaned project display name.
    pub project_name: String,
    /// Root of the built file tree.
    pub root: FileNode,
}

/// Loads the persisted project snapshot, if any.
///
/// A missing, corrupt, or out-of-date stored value loads as `None`; a store
/// failure is logged and also degrades to `None`.
pub async fn load_project_snapshot() -> Option<ProjectSnapshot> {
    match platform_storage::load_state(PROJECT_STATE_KEY, PROJECT_SNAPSHOT_SCHEMA_VERSION).await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            logging::warn!("project snapshot load failed: {err}");
            None
        }
    }
}

/// Persists the project snapshot.
///
/// # Errors
///
/// Returns an error when serialization or the store fails.
pub async fn persist_project_snapshot(snapshot: &ProjectSnapshot) -> Result<(), String> {
    platform_storage::save_state(PROJECT_STATE_KEY, PROJECT_SNAPSHOT_SCHEMA_VERSION, snapshot).await
}

/// Deletes the persisted project snapshot.
///
/// # Errors
///
/// Returns an error when the store fails.
pub async fn clear_project_snapshot() -> Result<(), String> {
    platform_storage::clear_state(PROJECT_STATE_KEY).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryKeyValueStore;
    use platform_storage::{load_state_with, save_state_with};
    use project_tree::{build_tree, RawEntry, UploadListing};

    use super::*;

    fn sample_snapshot() -> ProjectSnapshot {
        let listing = UploadListing::Flat(vec![
            RawEntry {
                path: "src/main.rs".to_string(),
                is_dir: false,
            },
            RawEntry {
                path: "README.md".to_string(),
                is_dir: false,
            },
        ]);
        ProjectSnapshot {
            project_name: "demo".to_string(),
            root: build_tree(&listing, "demo").expect("tree"),
        }
    }

    #[test]
    fn snapshot_round_trips_structurally_identical() {
        let store = MemoryKeyValueStore::default();
        let snapshot = sample_snapshot();

        block_on(save_state_with(
            &store,
            PROJECT_STATE_KEY,
            PROJECT_SNAPSHOT_SCHEMA_VERSION,
            &snapshot,
        ))
        .expect("save");

        let reloaded: ProjectSnapshot = block_on(load_state_with(
            &store,
            PROJECT_STATE_KEY,
            PROJECT_SNAPSHOT_SCHEMA_VERSION,
        ))
        .expect("load")
        .expect("present");

        assert_eq!(reloaded, snapshot);
        assert_eq!(reloaded.root.file_paths(), snapshot.root.file_paths());
    }

    #[test]
    fn corrupt_snapshot_loads_as_absent() {
        let store = MemoryKeyValueStore::default();
        let store_obj: &dyn platform_host::KeyValueStore = &store;
        block_on(store_obj.save_json(PROJECT_STATE_KEY, "not valid json")).expect("save raw");

        let reloaded: Option<ProjectSnapshot> = block_on(load_state_with(
            &store,
            PROJECT_STATE_KEY,
            PROJECT_SNAPSHOT_SCHEMA_VERSION,
        ))
        .expect("load");
        assert_eq!(reloaded, None);
    }
}
