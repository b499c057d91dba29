//! Shared UI primitive library for the ZipMind panels.
//!
//! The crate owns reusable Leptos primitives, a small icon API, and the
//! stable `data-ui-*` DOM contract consumed by the styling layer. Panels
//! compose these primitives instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Cluster, EmptyState, FieldGroup, FieldVariant,
    Heading, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, Modal, Pane, PaneHeader,
    ProgressBar, ProgressVariant, SplitLayout, Stack, StatusBar, StatusBarItem, Surface,
    SurfaceVariant, Tab, TabList, Text, TextField, TextRole, TextTone, ToolBar, Tree, TreeItem,
};

/// Convenience imports for panels consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, Cluster, EmptyState, FieldGroup, FieldVariant,
        Heading, Icon, IconName, IconSize, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding,
        Modal, Pane, PaneHeader, ProgressBar, ProgressVariant, SplitLayout, Stack, StatusBar,
        StatusBarItem, Surface, SurfaceVariant, Tab, TabList, Text, TextField, TextRole, TextTone,
        ToolBar, Tree, TreeItem,
    };
}
