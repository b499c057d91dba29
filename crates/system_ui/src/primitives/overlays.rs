use super::*;

#[component]
/// Modal dialog overlay with a click-to-dismiss backdrop.
pub fn Modal(
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Whether the dialog is shown.
    #[prop(into)]
    open: MaybeSignal<bool>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_close: Option<Callback<MouseEvent>>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class="ui-modal-backdrop"
                data-ui-primitive="true"
                data-ui-kind="modal-backdrop"
                on:click=move |ev| {
                    if let Some(on_close) = on_close.as_ref() {
                        on_close.call(ev);
                    }
                }
            ></div>
            <div
                class=merge_layout_class("ui-modal", layout_class)
                role="dialog"
                aria-modal="true"
                aria-label=aria_label.clone()
                data-ui-primitive="true"
                data-ui-kind="modal"
            >
                {children()}
            </div>
        </Show>
    }
}
