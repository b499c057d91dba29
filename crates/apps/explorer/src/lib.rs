//! File explorer panel: recursive tree rendering and file selection.
//!
//! The renderer threads each node's full path down through the recursion
//! and hands it to the selection callback directly, so a selected file
//! never needs to be re-resolved against the tree after the fact.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use project_tree::FileNode;
use system_ui::prelude::*;

/// Directories are never analyzable; only file nodes may become the
/// current selection.
fn is_selectable(node: &FileNode) -> bool {
    !node.is_dir
}

/// Picks the display icon for one tree row.
fn icon_for_node(name: &str, is_dir: bool) -> IconName {
    if is_dir {
        return IconName::Folder;
    }
    let extension = name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
    match extension {
        "rs" | "ts" | "tsx" | "js" | "jsx" | "py" | "go" | "c" | "h" | "cpp" | "java" => {
            IconName::Code
        }
        "md" | "txt" | "rst" => IconName::Doc,
        "toml" | "json" | "yaml" | "yml" | "lock" => IconName::Data,
        "png" | "jpg" | "jpeg" | "svg" | "gif" | "webp" => IconName::Image,
        _ => IconName::File,
    }
}

#[component]
/// One node of the project tree and its visible descendants.
///
/// Expansion state is owned per instantiated node: the root starts
/// expanded, everything else collapsed, and toggling one directory never
/// touches siblings or ancestors. Clicking a file row reports the node and
/// its threaded path; clicking a directory row only toggles it.
pub fn TreeNode(
    /// Node to render.
    node: FileNode,
    /// Nesting depth; the root is level 0.
    level: usize,
    /// Currently selected path, for highlight.
    selected_path: RwSignal<String>,
    /// Selection callback receiving the node and its full path.
    on_select: Callback<(FileNode, String)>,
) -> impl IntoView {
    let expanded = create_rw_signal(level == 0);
    let is_dir = node.is_dir;
    let name = node.name.clone();
    let children = store_value(node.children.clone());
    let node_for_click = node.clone();

    let is_selected = {
        let path = node.path.clone();
        Signal::derive(move || selected_path.get() == path)
    };

    let on_row_click = Callback::new(move |_| {
        if is_dir {
            expanded.update(|open| *open = !*open);
        } else {
            on_select.call((node_for_click.clone(), node_for_click.path.clone()));
        }
    });

    view! {
        <TreeItem
            level=level
            selected=is_selected
            expanded=Signal::derive(move || is_dir.then(|| expanded.get()))
        >
            <Button
                variant=ButtonVariant::Quiet
                size=ButtonSize::Sm
                layout_class="explorer-row"
                ui_slot="tree-row"
                selected=is_selected
                aria_label=name.clone()
                on_click=on_row_click
            >
                {is_dir
                    .then(|| {
                        view! {
                            <span data-ui-slot="disclosure" aria-hidden="true">
                                {move || {
                                    let icon = if expanded.get() {
                                        IconName::ChevronDown
                                    } else {
                                        IconName::ChevronRight
                                    };
                                    view! { <Icon icon size=IconSize::Sm /> }
                                }}
                            </span>
                        }
                    })}
                <Icon icon=icon_for_node(&name, is_dir) size=IconSize::Sm />
                <span data-ui-slot="label">{name.clone()}</span>
            </Button>
            <Show when=move || is_dir && expanded.get() fallback=|| ()>
                <Tree layout_class="explorer-subtree">
                    {move || {
                        children
                            .get_value()
                            .iter()
                            .map(|child| {
                                view! {
                                    <TreeNode
                                        node=child.clone()
                                        level=level + 1
                                        selected_path=selected_path
                                        on_select=on_select
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </Tree>
            </Show>
        </TreeItem>
    }
    .into_view()
}

#[component]
/// Explorer container: owns selection state and guards the empty state.
///
/// With no tree loaded the panel renders a placeholder and never attempts
/// any resolution. Directory clicks leave the selected path untouched;
/// file clicks update it and notify the page so sibling panels can react.
pub fn FileExplorer(
    /// Root of the current project tree, when a project is loaded.
    #[prop(into)]
    root: Signal<Option<FileNode>>,
    /// Page-level callback fired for file (never directory) selections.
    on_file_select: Callback<(FileNode, String)>,
) -> impl IntoView {
    let selected_path = create_rw_signal(String::new());
    let notice = create_rw_signal::<Option<String>>(None);

    // A replaced tree (new upload or logout) always restarts from an empty
    // selection.
    create_effect(move |_| {
        root.with(|_| ());
        selected_path.set(String::new());
    });

    let handle_select = Callback::new(move |(node, path): (FileNode, String)| {
        if !is_selectable(&node) {
            return;
        }
        selected_path.set(path.clone());
        on_file_select.call((node, path));
    });

    let summary_text = Signal::derive(move || {
        root.get()
            .map(|root| {
                let summary = root.summary();
                format!("{} files, {} folders", summary.files, summary.dirs)
            })
            .unwrap_or_default()
    });

    view! {
        <Pane layout_class="explorer-pane" aria_label="Project files">
            <PaneHeader title="Project Files" meta=summary_text>
                <Button
                    size=ButtonSize::Sm
                    leading_icon=IconName::Download
                    aria_label="Download project archive"
                    on_click=Callback::new(move |_| {
                        // Bundling the tree back into an archive is owned by a
                        // collaborator that is not wired up yet.
                        notice.set(Some("Archive download isn't available yet".to_string()));
                    })
                >
                    "Download"
                </Button>
            </PaneHeader>

            <Show
                when=move || root.get().is_some()
                fallback=|| {
                    view! {
                        <EmptyState layout_class="explorer-empty">
                            <Icon icon=IconName::Folder size=IconSize::Lg />
                            <Heading role=TextRole::Label>"No project data"</Heading>
                            <Text tone=TextTone::Secondary>
                                "Upload a project archive to browse its files."
                            </Text>
                        </EmptyState>
                    }
                }
            >
                <Tree layout_class="explorer-tree" aria_label="Project file tree">
                    {move || {
                        root.get()
                            .map(|node| {
                                view! {
                                    <TreeNode
                                        node=node
                                        level=0
                                        selected_path=selected_path
                                        on_select=handle_select
                                    />
                                }
                            })
                    }}
                </Tree>
            </Show>

            <StatusBar layout_class="explorer-status">
                <StatusBarItem>{move || summary_text.get()}</StatusBarItem>
                <StatusBarItem>
                    {move || notice.get().unwrap_or_default()}
                </StatusBarItem>
            </StatusBar>
        </Pane>
    }
}

#[cfg(test)]
mod tests {
    use project_tree::FileNode;
    use system_ui::IconName;

    use super::{icon_for_node, is_selectable};

    #[test]
    fn only_file_nodes_are_selectable() {
        assert!(is_selectable(&FileNode::file("main.rs", "demo/main.rs")));
        assert!(!is_selectable(&FileNode::dir("src", "demo/src")));
    }

    #[test]
    fn directories_always_use_the_folder_icon() {
        assert_eq!(icon_for_node("src", true), IconName::Folder);
        assert_eq!(icon_for_node("weird.rs", true), IconName::Folder);
    }

    #[test]
    fn file_icons_follow_the_extension() {
        let cases = [
            ("main.rs", IconName::Code),
            ("app.tsx", IconName::Code),
            ("README.md", IconName::Doc),
            ("Cargo.toml", IconName::Data),
            ("Cargo.lock", IconName::Data),
            ("logo.svg", IconName::Image),
            ("LICENSE", IconName::File),
            ("noext", IconName::File),
        ];
        for (name, expected) in cases {
            assert_eq!(icon_for_node(name, false), expected, "name={name}");
        }
    }
}
