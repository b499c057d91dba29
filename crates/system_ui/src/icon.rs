//! Centralized icon API backing the `data-ui-icon` DOM contract.
//!
//! The inline glyph is an accessible fallback; the styling layer replaces
//! it per `data-ui-icon` token.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon vocabulary used across the panels.
pub enum IconName {
    /// Closed directory.
    Folder,
    /// Generic file.
    File,
    /// Source-code file.
    Code,
    /// Prose/markdown document.
    Doc,
    /// Structured data file (toml/json/yaml).
    Data,
    /// Image asset.
    Image,
    /// Collapsed disclosure chevron.
    ChevronRight,
    /// Expanded disclosure chevron.
    ChevronDown,
    /// Assistant/analysis brain mark.
    Brain,
    /// Send a chat message.
    Send,
    /// Upload an archive.
    Upload,
    /// Download affordance.
    Download,
    /// Human sender.
    User,
    /// Inline warning/error.
    Alert,
}

impl IconName {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
            Self::Code => "code",
            Self::Doc => "doc",
            Self::Data => "data",
            Self::Image => "image",
            Self::ChevronRight => "chevron-right",
            Self::ChevronDown => "chevron-down",
            Self::Brain => "brain",
            Self::Send => "send",
            Self::Upload => "upload",
            Self::Download => "download",
            Self::User => "user",
            Self::Alert => "alert",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Self::Folder => "\u{1F5C0}",
            Self::File => "\u{1F5CE}",
            Self::Code => "{}",
            Self::Doc => "\u{00B6}",
            Self::Data => "\u{2630}",
            Self::Image => "\u{25A6}",
            Self::ChevronRight => "\u{25B8}",
            Self::ChevronDown => "\u{25BE}",
            Self::Brain => "\u{273B}",
            Self::Send => "\u{27A4}",
            Self::Upload => "\u{21E7}",
            Self::Download => "\u{21E9}",
            Self::User => "\u{25CF}",
            Self::Alert => "!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Inline/control icon.
    Sm,
    /// Default icon.
    Md,
    /// Empty-state/hero icon.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Shared icon primitive.
pub fn Icon(
    /// Which icon to render.
    icon: IconName,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let class = match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("ui-icon {layout_class}"),
        _ => "ui-icon".to_string(),
    };
    view! {
        <span
            class=class
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
            aria-hidden="true"
        >
            {icon.glyph()}
        </span>
    }
}
