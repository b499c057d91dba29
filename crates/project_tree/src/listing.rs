//! Classification of the backend's extracted-files payload into an explicit
//! tagged listing.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// One node of a server-native nested listing (`{ name, path, is_dir, children? }`).
pub struct RawNode {
    /// Entry base name.
    pub name: String,
    /// Server-reported path; recomputed during tree construction.
    pub path: String,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Nested child entries.
    #[serde(default)]
    pub children: Vec<RawNode>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// One entry of a flat listing (`{ path, is_dir? }`).
pub struct RawEntry {
    /// Archive-relative path, possibly with leading/trailing slashes.
    pub path: String,
    /// Whether the entry is a directory; absent means file.
    #[serde(default)]
    pub is_dir: bool,
}

#[derive(Debug, Clone, PartialEq)]
/// The two accepted shapes of an upload listing, classified once at the boundary.
pub enum UploadListing {
    /// Server already returned a nested tree.
    Nested(Vec<RawNode>),
    /// Server returned a flat list of paths.
    Flat(Vec<RawEntry>),
}

impl UploadListing {
    /// Extracts and classifies the extracted-files listing from an upload
    /// response value.
    ///
    /// Both `upload.extracted_files` and top-level `extracted_files` are
    /// accepted. Returns `None` when the listing is absent or matches
    /// neither accepted shape; callers treat that as "no project data".
    pub fn from_upload_value(value: &Value) -> Option<Self> {
        let files = value
            .get("upload")
            .and_then(|upload| upload.get("extracted_files"))
            .or_else(|| value.get("extracted_files"))?;
        Self::from_files_value(files)
    }

    /// Classifies a bare extracted-files array value.
    pub fn from_files_value(files: &Value) -> Option<Self> {
        let entries = files.as_array()?;
        if entries.is_empty() {
            return Some(Self::Flat(Vec::new()));
        }

        // Nested nodes also satisfy the flat shape (they carry `path`), so
        // shape is decided by key presence and then parsed strictly. A
        // half-nested payload fails outright instead of silently dropping
        // its children.
        let looks_nested = entries
            .iter()
            .any(|entry| entry.get("name").is_some() || entry.get("children").is_some());
        if looks_nested {
            serde_json::from_value::<Vec<RawNode>>(files.clone())
                .ok()
                .map(Self::Nested)
        } else {
            serde_json::from_value::<Vec<RawEntry>>(files.clone())
                .ok()
                .map(Self::Flat)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn classifies_nested_payload() {
        let value = json!({
            "filename": "demo.zip",
            "extracted_files": [
                {
                    "name": "src",
                    "path": "src",
                    "is_dir": true,
                    "children": [
                        { "name": "main.rs", "path": "src/main.rs", "is_dir": false },
                    ],
                },
            ],
        });

        match UploadListing::from_upload_value(&value).expect("listing") {
            UploadListing::Nested(nodes) => {
                assert_eq!(nodes.len(), 1);
                assert_eq!(nodes[0].children.len(), 1);
            }
            other => panic!("expected nested listing, got {other:?}"),
        }
    }

    #[test]
    fn classifies_flat_payload_with_optional_is_dir() {
        let value = json!({
            "extracted_files": [
                { "path": "src/main.rs", "is_dir": false },
                { "path": "src/" },
            ],
        });

        match UploadListing::from_upload_value(&value).expect("listing") {
            UploadListing::Flat(entries) => {
                assert_eq!(entries.len(), 2);
                assert!(!entries[1].is_dir);
            }
            other => panic!("expected flat listing, got {other:?}"),
        }
    }

    #[test]
    fn accepts_listing_nested_under_upload_key() {
        let value = json!({
            "upload": { "extracted_files": [ { "path": "a.txt" } ] },
        });
        assert!(matches!(
            UploadListing::from_upload_value(&value),
            Some(UploadListing::Flat(_))
        ));
    }

    #[test]
    fn rejects_missing_or_malformed_listings() {
        assert_eq!(UploadListing::from_upload_value(&json!({})), None);
        assert_eq!(
            UploadListing::from_upload_value(&json!({ "extracted_files": "nope" })),
            None
        );
        // Missing `path` field matches neither shape.
        assert_eq!(
            UploadListing::from_upload_value(&json!({
                "extracted_files": [ { "name": "src" } ],
            })),
            None
        );
    }

    #[test]
    fn empty_listing_classifies_as_empty_flat() {
        let value = json!({ "extracted_files": [] });
        assert_eq!(
            UploadListing::from_upload_value(&value),
            Some(UploadListing::Flat(Vec::new()))
        );
    }
}
