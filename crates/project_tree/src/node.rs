//! The recursive file/directory node model shared by the explorer and panels.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One entry in the client-side representation of an uploaded project tree.
pub struct FileNode {
    /// Last path segment, used as the display label.
    pub name: String,
    /// Full forward-slash-delimited path from the project root; unique within a tree.
    pub path: String,
    /// Whether this node is a directory.
    pub is_dir: bool,
    /// Ordered child nodes; always empty for files.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FileNode>,
}

impl FileNode {
    /// Creates a file node with no children.
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_dir: false,
            children: Vec::new(),
        }
    }

    /// Creates an empty directory node.
    pub fn dir(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_dir: true,
            children: Vec::new(),
        }
    }

    /// Looks up a descendant (or this node) by exact path.
    ///
    /// Walks path segments from this node, so the lookup cost is bounded by
    /// tree depth rather than tree size.
    pub fn node_at(&self, path: &str) -> Option<&FileNode> {
        if self.path == path {
            return Some(self);
        }
        let rest = path.strip_prefix(self.path.as_str())?.strip_prefix('/')?;
        let head = rest.split('/').next()?;
        let child = self.children.iter().find(|child| child.name == head)?;
        child.node_at(path)
    }

    /// Counts files and directories beneath this node (the node itself is excluded).
    pub fn summary(&self) -> TreeSummary {
        let mut summary = TreeSummary::default();
        fn walk(node: &FileNode, summary: &mut TreeSummary) {
            for child in &node.children {
                if child.is_dir {
                    summary.dirs += 1;
                } else {
                    summary.files += 1;
                }
                walk(child, summary);
            }
        }
        walk(self, &mut summary);
        summary
    }

    /// Collects the paths of all file (leaf) nodes beneath this node in display order.
    pub fn file_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        fn walk(node: &FileNode, paths: &mut Vec<String>) {
            for child in &node.children {
                if child.is_dir {
                    walk(child, paths);
                } else {
                    paths.push(child.path.clone());
                }
            }
        }
        walk(self, &mut paths);
        paths
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// File/directory counts shown in the explorer status bar.
pub struct TreeSummary {
    /// Number of file nodes in the tree.
    pub files: usize,
    /// Number of directory nodes in the tree, excluding the root.
    pub dirs: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> FileNode {
        FileNode {
            name: "demo".to_string(),
            path: "demo".to_string(),
            is_dir: true,
            children: vec![
                FileNode {
                    name: "src".to_string(),
                    path: "demo/src".to_string(),
                    is_dir: true,
                    children: vec![FileNode::file("main.rs", "demo/src/main.rs")],
                },
                FileNode::file("README.md", "demo/README.md"),
            ],
        }
    }

    #[test]
    fn node_at_resolves_nested_paths() {
        let root = sample_tree();
        assert_eq!(root.node_at("demo").map(|n| n.name.as_str()), Some("demo"));
        assert_eq!(
            root.node_at("demo/src/main.rs").map(|n| n.name.as_str()),
            Some("main.rs")
        );
        assert_eq!(root.node_at("demo/src/other.rs"), None);
        assert_eq!(root.node_at("elsewhere/src"), None);
    }

    #[test]
    fn summary_counts_descendants_only() {
        let root = sample_tree();
        let summary = root.summary();
        assert_eq!(summary.files, 2);
        assert_eq!(summary.dirs, 1);
    }

    #[test]
    fn file_paths_lists_leaves_in_display_order() {
        let root = sample_tree();
        assert_eq!(
            root.file_paths(),
            vec!["demo/src/main.rs".to_string(), "demo/README.md".to_string()]
        );
    }

    #[test]
    fn serde_skips_empty_children_and_round_trips() {
        let root = sample_tree();
        let value = serde_json::to_value(&root).expect("serialize");
        assert!(value["children"][1].get("children").is_none());

        let reloaded: FileNode = serde_json::from_value(value).expect("deserialize");
        assert_eq!(reloaded, root);
    }
}
