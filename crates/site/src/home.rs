//! Landing, upload, and workspace stages of the main page.
//!
//! The page walks one state machine: unauthenticated hero, authenticated
//! upload screen, and the three-pane workspace once a project is loaded.
//! Logout or a replacement upload returns to the earlier stages and clears
//! the persisted project and transcript.

use api_client::{ApiClient, ApiConfig, UploadResponse};
use leptos::*;
use leptos_router::A;
use project_tree::{build_tree, FileNode, UploadListing};
use system_ui::prelude::*;
use zipmind_app_analysis::AnalysisPanel;
use zipmind_app_auth::AuthForm;
use zipmind_app_chat::{clear_chat_transcript, ChatPanel};
use zipmind_app_explorer::FileExplorer;
use zipmind_app_upload::UploadPanel;

use crate::project_state::{
    clear_project_snapshot, load_project_snapshot, persist_project_snapshot, ProjectSnapshot,
};
use crate::web_app::Header;

#[component]
/// The main page: auth gating, upload flow, and the project workspace.
pub fn HomePage() -> impl IntoView {
    let auth_token = create_rw_signal(platform_storage::load_session_token());
    let project = create_rw_signal::<Option<ProjectSnapshot>>(None);
    let selected_file = create_rw_signal::<Option<FileNode>>(None);
    let login_open = create_rw_signal(false);
    let upload_notice = create_rw_signal::<Option<String>>(None);

    // Restore the persisted project so the tree survives a reload.
    spawn_local(async move {
        if let Some(snapshot) = load_project_snapshot().await {
            project.set(Some(snapshot));
        }
    });

    let handle_login = Callback::new(move |token: String| {
        auth_token.set(Some(token));
        login_open.set(false);
    });

    let handle_logout = Callback::new(move |_: ()| {
        let previous_project = project.get_untracked().map(|p| p.project_name);
        auth_token.set(None);
        project.set(None);
        selected_file.set(None);
        upload_notice.set(None);
        if let Err(err) = platform_storage::clear_session_token() {
            logging::warn!("session token clear failed: {err}");
        }
        spawn_local(async move {
            if let Err(err) = clear_project_snapshot().await {
                logging::warn!("project snapshot clear failed: {err}");
            }
            if let Some(name) = previous_project {
                if let Err(err) = clear_chat_transcript(&name).await {
                    logging::warn!("chat transcript clear failed: {err}");
                }
            }
        });
    });

    let handle_upload_complete = Callback::new(move |response: UploadResponse| {
        let display_name = response.project_display_name();
        let root = UploadListing::from_upload_value(&response.extra)
            .and_then(|listing| build_tree(&listing, &display_name));
        let Some(root) = root else {
            upload_notice.set(Some(
                "The server returned no usable project data. Try uploading again.".to_string(),
            ));
            return;
        };

        let previous_project = project.get_untracked().map(|p| p.project_name);
        let snapshot = ProjectSnapshot {
            project_name: display_name,
            root,
        };
        upload_notice.set(None);
        selected_file.set(None);
        project.set(Some(snapshot.clone()));
        spawn_local(async move {
            if let Some(name) = previous_project {
                if let Err(err) = clear_chat_transcript(&name).await {
                    logging::warn!("stale chat transcript clear failed: {err}");
                }
            }
            if let Err(err) = persist_project_snapshot(&snapshot).await {
                logging::warn!("project snapshot persist failed: {err}");
            }
        });
    });

    let handle_file_select = Callback::new(move |(node, _path): (FileNode, String)| {
        selected_file.set(Some(node));
    });

    let is_authenticated = Signal::derive(move || auth_token.get().is_some());

    view! {
        <Stack layout_class="home-page" gap=LayoutGap::Md>
            <Header
                is_authenticated=is_authenticated
                on_login=Callback::new(move |_| login_open.set(true))
                on_logout=handle_logout
            />

            <Modal
                open=Signal::derive(move || login_open.get())
                aria_label="Sign in to ZipMind"
                on_close=Callback::new(move |_| login_open.set(false))
            >
                <AuthForm client=ApiClient::new(ApiConfig::default()) on_success=handle_login />
            </Modal>

            {move || {
                let Some(token) = auth_token.get() else {
                    return view! { <HeroSection on_login=Callback::new(move |_| login_open.set(true)) /> }
                        .into_view();
                };
                let client = ApiClient::new(ApiConfig::default()).with_token(Some(token));

                let Some(snapshot) = project.get() else {
                    return view! {
                        <Stack layout_class="upload-stage" gap=LayoutGap::Md padding=LayoutPadding::Lg>
                            <Heading>"Upload Your Project"</Heading>
                            <Text tone=TextTone::Secondary>
                                "Upload a ZIP file containing your project to start analyzing it"
                            </Text>
                            <Show when=move || upload_notice.get().is_some() fallback=|| ()>
                                <Text tone=TextTone::Danger>
                                    {move || upload_notice.get().unwrap_or_default()}
                                </Text>
                            </Show>
                            <UploadPanel
                                client=client.clone()
                                on_upload_complete=handle_upload_complete
                            />
                        </Stack>
                    }
                        .into_view();
                };

                let project_name = snapshot.project_name.clone();
                let heading_name = project_name.clone();
                view! {
                    <Stack layout_class="workspace-stage" gap=LayoutGap::Sm>
                        <Cluster justify=LayoutJustify::Between>
                            <Heading>{format!("Project: {heading_name}")}</Heading>
                            <Text tone=TextTone::Secondary>"Click on files to analyze"</Text>
                        </Cluster>
                        <SplitLayout layout_class="workspace-panes" gap=LayoutGap::Sm>
                            <FileExplorer
                                root=Signal::derive(move || project.get().map(|p| p.root))
                                on_file_select=handle_file_select
                            />
                            <AnalysisPanel selected=selected_file client=client.clone() />
                            <ChatPanel
                                project_name=project_name
                                selected=selected_file
                                client=client
                            />
                        </SplitLayout>
                    </Stack>
                }
                    .into_view()
            }}
        </Stack>
    }
}

#[component]
fn HeroSection(on_login: Callback<()>) -> impl IntoView {
    view! {
        <Stack layout_class="hero" gap=LayoutGap::Lg padding=LayoutPadding::Lg align=LayoutAlign::Center>
            <Icon icon=IconName::Brain size=IconSize::Lg />
            <Heading>"Understand code projects with AI-powered insights"</Heading>
            <Text tone=TextTone::Secondary>
                "Upload a zipped codebase and let ZipMind analyze it. Get detailed summaries, \
                 understand structure, and chat with your code to find answers quickly."
            </Text>
            <Cluster gap=LayoutGap::Sm justify=LayoutJustify::Center>
                <Button
                    variant=ButtonVariant::Primary
                    size=ButtonSize::Lg
                    on_click=Callback::new(move |_| on_login.call(()))
                >
                    "Get Started"
                </Button>
                <A href="/about">"Learn More"</A>
            </Cluster>

            <Cluster layout_class="hero-features" gap=LayoutGap::Md justify=LayoutJustify::Center>
                <FeatureCard
                    icon=IconName::Upload
                    title="Upload Projects"
                    description="Drop in a zipped project file for instant analysis."
                />
                <FeatureCard
                    icon=IconName::File
                    title="Get Insights"
                    description="Receive detailed summaries and structure analysis of each file."
                />
                <FeatureCard
                    icon=IconName::Send
                    title="Ask Questions"
                    description="Chat with your code to find answers about any file or function."
                />
            </Cluster>
        </Stack>
    }
}

#[component]
fn FeatureCard(
    icon: IconName,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <Surface layout_class="feature-card" variant=SurfaceVariant::Muted>
            <Stack gap=LayoutGap::Sm>
                <Icon icon size=IconSize::Md />
                <Heading role=TextRole::Label>{title}</Heading>
                <Text tone=TextTone::Secondary>{description}</Text>
            </Stack>
        </Surface>
    }
}
