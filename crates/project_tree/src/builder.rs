//! Construction of the normalized [`FileNode`] tree from a classified listing.

use crate::listing::{RawNode, UploadListing};
use crate::node::FileNode;

/// Normalizes one archive entry path for tree insertion.
///
/// Trims whitespace, converts backslashes to `/`, resolves `.`/`..`, and
/// collapses empty segments. Returns `None` when nothing remains, in which
/// case the entry is discarded.
pub fn normalize_entry_path(path: &str) -> Option<String> {
    let mut segments: Vec<&str> = Vec::new();
    let replaced = path.trim().replace('\\', "/");
    for segment in replaced.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment == ".." {
            segments.pop();
            continue;
        }
        segments.push(segment);
    }

    if segments.is_empty() {
        None
    } else {
        Some(segments.join("/"))
    }
}

/// Builds the single-rooted display tree for a classified upload listing.
///
/// The root is a directory named after the project with `path` equal to the
/// display name. Flat entries are attached by path-segment matching with
/// intermediate directories created as needed; nested listings are wrapped
/// under the root with every `path` recomputed as `parent.path + "/" + name`.
/// Children are sorted directories-first, then by ordinal name. Duplicate
/// paths collapse to one node and a file entry never downgrades an existing
/// directory.
///
/// Returns `None` for a blank project name or a malformed nested listing
/// (empty names, files carrying children); a partially-built tree is never
/// returned.
pub fn build_tree(listing: &UploadListing, project_name: &str) -> Option<FileNode> {
    let project_name = project_name.trim();
    if project_name.is_empty() {
        return None;
    }

    let mut root = FileNode::dir(project_name, project_name);
    match listing {
        UploadListing::Flat(entries) => {
            for entry in entries {
                let Some(path) = normalize_entry_path(&entry.path) else {
                    continue;
                };
                insert_path(&mut root, &path, entry.is_dir);
            }
        }
        UploadListing::Nested(nodes) => {
            insert_nested(&mut root, nodes, "")?;
        }
    }

    sort_children(&mut root);
    Some(root)
}

fn insert_nested(root: &mut FileNode, nodes: &[RawNode], prefix: &str) -> Option<()> {
    for raw in nodes {
        let name = raw.name.trim();
        if name.is_empty() || name.contains('/') {
            return None;
        }
        if !raw.is_dir && !raw.children.is_empty() {
            return None;
        }

        let rel = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}/{name}")
        };
        insert_path(root, &rel, raw.is_dir);
        insert_nested(root, &raw.children, &rel)?;
    }
    Some(())
}

fn insert_path(root: &mut FileNode, rel_path: &str, is_dir: bool) {
    let segments: Vec<&str> = rel_path.split('/').collect();
    let mut current = root;
    for (idx, segment) in segments.iter().enumerate() {
        let last = idx + 1 == segments.len();
        let position = current
            .children
            .iter()
            .position(|child| child.name == *segment);
        let position = match position {
            Some(position) => position,
            None => {
                let child_path = format!("{}/{}", current.path, segment);
                let node = if last && !is_dir {
                    FileNode::file(*segment, child_path)
                } else {
                    FileNode::dir(*segment, child_path)
                };
                current.children.push(node);
                current.children.len() - 1
            }
        };
        if !last || is_dir {
            current.children[position].is_dir = true;
        }
        current = &mut current.children[position];
    }
}

fn sort_children(node: &mut FileNode) {
    node.children
        .sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
    for child in &mut node.children {
        sort_children(child);
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::listing::RawEntry;

    fn flat(entries: &[(&str, bool)]) -> UploadListing {
        UploadListing::Flat(
            entries
                .iter()
                .map(|(path, is_dir)| RawEntry {
                    path: (*path).to_string(),
                    is_dir: *is_dir,
                })
                .collect(),
        )
    }

    #[test]
    fn normalize_entry_path_matches_expected_cases() {
        let cases = [
            ("", None),
            ("   ", None),
            ("/", None),
            ("//", None),
            ("src/main.rs", Some("src/main.rs")),
            ("/src//main.rs/", Some("src/main.rs")),
            ("./src/../lib.rs", Some("lib.rs")),
            ("src\\win\\path.rs", Some("src/win/path.rs")),
        ];

        for (input, expected) in cases {
            assert_eq!(
                normalize_entry_path(input),
                expected.map(str::to_string),
                "input={input:?}"
            );
        }
    }

    #[test]
    fn flat_scenario_builds_expected_shape() {
        let listing = flat(&[
            ("src/main.ts", false),
            ("src/", true),
            ("README.md", false),
        ]);
        let root = build_tree(&listing, "demo").expect("tree");

        assert_eq!(root.name, "demo");
        assert_eq!(root.path, "demo");
        assert!(root.is_dir);
        assert_eq!(root.children.len(), 2);

        let src = &root.children[0];
        assert_eq!(src.name, "src");
        assert!(src.is_dir);
        assert_eq!(src.path, "demo/src");
        assert_eq!(src.children.len(), 1);
        assert_eq!(src.children[0].name, "main.ts");
        assert_eq!(src.children[0].path, "demo/src/main.ts");

        let readme = &root.children[1];
        assert_eq!(readme.name, "README.md");
        assert!(!readme.is_dir);
    }

    #[test]
    fn children_order_is_dirs_first_then_ordinal() {
        let listing = flat(&[("b.txt", false), ("a/", true), ("A.txt", false)]);
        let root = build_tree(&listing, "demo").expect("tree");

        let names: Vec<&str> = root.children.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "A.txt", "b.txt"]);
        assert!(root.children[0].is_dir);
    }

    #[test]
    fn leaf_set_equals_normalized_input_paths() {
        let listing = flat(&[
            ("src/main.rs", false),
            ("src/lib.rs", false),
            ("/src/lib.rs/", false),
            ("docs/guide.md", false),
            ("", false),
            ("//", false),
        ]);
        let root = build_tree(&listing, "p").expect("tree");

        let mut leaves = root.file_paths();
        leaves.sort();
        assert_eq!(
            leaves,
            vec![
                "p/docs/guide.md".to_string(),
                "p/src/lib.rs".to_string(),
                "p/src/main.rs".to_string(),
            ]
        );
    }

    #[test]
    fn building_twice_is_idempotent() {
        let listing = flat(&[("src/a.rs", false), ("src/b/", true), ("top.md", false)]);
        let first = build_tree(&listing, "demo").expect("tree");
        let second = build_tree(&listing, "demo").expect("tree");
        assert_eq!(first, second);
    }

    #[test]
    fn file_entry_never_downgrades_existing_directory() {
        let listing = flat(&[("src/lib.rs", false), ("src", false)]);
        let root = build_tree(&listing, "demo").expect("tree");

        let src = root.node_at("demo/src").expect("src node");
        assert!(src.is_dir);
        assert_eq!(src.children.len(), 1);
    }

    #[test]
    fn implicit_directories_have_empty_children_until_filled() {
        let listing = flat(&[("assets/", true)]);
        let root = build_tree(&listing, "demo").expect("tree");
        let assets = root.node_at("demo/assets").expect("assets node");
        assert!(assets.is_dir);
        assert!(assets.children.is_empty());
    }

    #[test]
    fn nested_listing_is_wrapped_with_recomputed_paths() {
        let value = json!([
            {
                "name": "src",
                "path": "stale/prefix/src",
                "is_dir": true,
                "children": [
                    { "name": "main.rs", "path": "also/stale", "is_dir": false },
                ],
            },
            { "name": "README.md", "path": "README.md", "is_dir": false },
        ]);
        let listing = UploadListing::from_files_value(&value).expect("listing");
        let root = build_tree(&listing, "demo").expect("tree");

        assert!(root.node_at("demo/src/main.rs").is_some());
        assert!(root.node_at("demo/README.md").is_some());
        assert_eq!(root.node_at("demo/stale"), None);
    }

    #[test]
    fn malformed_nested_listing_yields_no_tree() {
        // A file node carrying children is inconsistent; no partial tree
        // may escape.
        let listing = UploadListing::Nested(vec![RawNode {
            name: "main.rs".to_string(),
            path: "main.rs".to_string(),
            is_dir: false,
            children: vec![RawNode {
                name: "impossible".to_string(),
                path: "x".to_string(),
                is_dir: false,
                children: Vec::new(),
            }],
        }]);
        assert_eq!(build_tree(&listing, "demo"), None);

        let blank_name = UploadListing::Nested(vec![RawNode {
            name: "   ".to_string(),
            path: "x".to_string(),
            is_dir: true,
            children: Vec::new(),
        }]);
        assert_eq!(build_tree(&blank_name, "demo"), None);
    }

    #[test]
    fn blank_project_name_yields_no_tree() {
        let listing = flat(&[("a.txt", false)]);
        assert_eq!(build_tree(&listing, "   "), None);
    }

    #[test]
    fn empty_listing_builds_bare_root() {
        let root = build_tree(&UploadListing::Flat(Vec::new()), "demo").expect("tree");
        assert!(root.children.is_empty());
        assert!(root.is_dir);
    }
}
