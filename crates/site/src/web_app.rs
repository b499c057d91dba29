//! Routes, meta tags, and the shared page chrome.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use system_ui::prelude::*;

use crate::home::HomePage;

#[component]
/// Application root: meta context plus the route table.
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="ZipMind" />
        <Meta
            name="description"
            content="Upload a zipped codebase and explore it with AI-powered insights."
        />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=HomePage />
                    <Route path="/about" view=AboutPage />
                    <Route path="/*any" view=NotFoundPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
/// Top chrome shared by every page.
pub(crate) fn Header(
    #[prop(optional, into)] is_authenticated: MaybeSignal<bool>,
    #[prop(optional)] on_login: Option<Callback<()>>,
    #[prop(optional)] on_logout: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <ToolBar layout_class="site-header" role="banner" aria_label="Site header">
            <Cluster gap=LayoutGap::Sm>
                <Icon icon=IconName::Brain size=IconSize::Md />
                <Heading role=TextRole::Title>"ZipMind"</Heading>
            </Cluster>
            <Cluster gap=LayoutGap::Sm justify=LayoutJustify::End layout_class="site-nav">
                <A href="/">"Home"</A>
                <A href="/about">"About"</A>
                <Show
                    when=move || is_authenticated.get()
                    fallback=move || {
                        view! {
                            <Button
                                variant=ButtonVariant::Primary
                                size=ButtonSize::Sm
                                on_click=Callback::new(move |_| {
                                    if let Some(on_login) = on_login.as_ref() {
                                        on_login.call(());
                                    }
                                })
                            >
                                "Sign In"
                            </Button>
                        }
                    }
                >
                    <Button
                        variant=ButtonVariant::Quiet
                        size=ButtonSize::Sm
                        on_click=Callback::new(move |_| {
                            if let Some(on_logout) = on_logout.as_ref() {
                                on_logout.call(());
                            }
                        })
                    >
                        "Log Out"
                    </Button>
                </Show>
            </Cluster>
        </ToolBar>
    }
}

#[component]
fn AboutPage() -> impl IntoView {
    view! {
        <Header />
        <Stack layout_class="about-page" gap=LayoutGap::Md padding=LayoutPadding::Lg>
            <Heading>"About ZipMind"</Heading>
            <Text>
                "ZipMind analyzes zipped source-code projects. Upload an archive, browse its \
                 file tree, read AI-generated per-file summaries, and ask the assistant \
                 questions about the code."
            </Text>
            <Text tone=TextTone::Secondary>
                "Analysis and chat answers are produced by the ZipMind backend service; this \
                 application renders the results and keeps your current project across reloads."
            </Text>
        </Stack>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <Header />
        <EmptyState layout_class="notfound-page">
            <Heading>"Page not found"</Heading>
            <Text tone=TextTone::Secondary>"There's nothing at this address."</Text>
            <A href="/">"Back to ZipMind"</A>
        </EmptyState>
    }
}
