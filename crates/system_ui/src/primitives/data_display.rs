use super::*;

#[component]
/// Generic surface block.
pub fn Surface(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-surface", layout_class)
            data-ui-primitive="true"
            data-ui-kind="surface"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-padding=padding.token()
            role=role
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared inline text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared heading primitive.
pub fn Heading(
    #[prop(default = TextRole::Title)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-heading", layout_class)
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Compact status badge primitive.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Empty state content block.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared pane surface.
pub fn Pane(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-pane", layout_class)
            data-ui-primitive="true"
            data-ui-kind="pane"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            role=role
            aria-label=move || aria_label.get()
        >
            {children()}
        </section>
    }
}

#[component]
/// Shared pane header with title and optional supporting copy/actions.
pub fn PaneHeader(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] meta: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    let title_signal = Signal::derive(move || title.get());
    let meta_signal = Signal::derive(move || meta.get());
    view! {
        <header
            class=merge_layout_class("ui-pane-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="pane-header"
        >
            <div data-ui-slot="copy">
                <Show when=move || !title_signal.get().is_empty() fallback=|| ()>
                    <div data-ui-slot="title">{move || title_signal.get()}</div>
                </Show>
                <Show when=move || !meta_signal.get().is_empty() fallback=|| ()>
                    <div data-ui-slot="meta">{move || meta_signal.get()}</div>
                </Show>
            </div>
            <div data-ui-slot="actions">{children()}</div>
        </header>
    }
}

#[component]
/// Shared inline statusbar item wrapper.
pub fn StatusBarItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-statusbar-item", layout_class)
            data-ui-primitive="true"
            data-ui-kind="statusbar-item"
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared tree container.
pub fn Tree(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <ul
            class=merge_layout_class("ui-tree", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tree"
            role="tree"
            aria-label=aria_label
        >
            {children()}
        </ul>
    }
}

#[component]
/// Shared tree item surface.
pub fn TreeItem(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] expanded: MaybeSignal<Option<bool>>,
    #[prop(default = 0)] level: usize,
    children: Children,
) -> impl IntoView {
    view! {
        <li
            class=merge_layout_class("ui-tree-item", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tree-item"
            data-ui-level=level.to_string()
            data-ui-selected=move || bool_token(selected.get())
            role="treeitem"
            aria-selected=move || selected.get()
            aria-expanded=move || expanded.get()
        >
            {children()}
        </li>
    }
}
