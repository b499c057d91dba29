//! AI analysis panel: tabbed display of per-file analysis and source.
//!
//! The panel reacts to the explorer's selection. Fetch failures stay inside
//! the panel with a manual retry; they never propagate to the page shell.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use api_client::{ApiClient, FileAnalysis};
use leptos::*;
use project_tree::FileNode;
use system_ui::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum FetchState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnalysisTab {
    Summary,
    Functions,
    Dependencies,
    Source,
}

impl AnalysisTab {
    const ALL: [AnalysisTab; 4] = [
        Self::Summary,
        Self::Functions,
        Self::Dependencies,
        Self::Source,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Functions => "functions",
            Self::Dependencies => "dependencies",
            Self::Source => "source",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::Functions => "Functions",
            Self::Dependencies => "Dependencies",
            Self::Source => "Source",
        }
    }

    fn tab_dom_id(self) -> String {
        format!("analysis-tab-{}", self.token())
    }
}

#[component]
/// Analysis panel for the currently selected file.
pub fn AnalysisPanel(
    /// Currently selected file node; `None` renders the empty state.
    #[prop(into)]
    selected: Signal<Option<FileNode>>,
    /// Backend client carrying the session token.
    client: ApiClient,
) -> impl IntoView {
    let analysis = create_rw_signal(FetchState::<FileAnalysis>::Idle);
    let content = create_rw_signal(FetchState::<String>::Idle);
    let active_tab = create_rw_signal(AnalysisTab::Summary);
    let retry = create_rw_signal(0u32);
    let analysis_epoch = store_value(0u64);
    let content_epoch = store_value(0u64);

    let load_content = Callback::new({
        let client = client.clone();
        move |_: ()| {
            let Some(file) = selected.get_untracked() else {
                return;
            };
            content.set(FetchState::Loading);
            content_epoch.update_value(|seq| *seq += 1);
            let seq = content_epoch.get_value();
            let client = client.clone();
            spawn_local(async move {
                let result = client.fetch_file_content(&file.path).await;
                if content_epoch.get_value() != seq {
                    return;
                }
                match result {
                    Ok(text) => content.set(FetchState::Ready(text)),
                    Err(err) => content.set(FetchState::Failed(err.to_string())),
                }
            });
        }
    });

    let client_for_analysis = client.clone();
    create_effect(move |_| {
        retry.get();
        let Some(file) = selected.get() else {
            analysis.set(FetchState::Idle);
            content.set(FetchState::Idle);
            return;
        };

        active_tab.set(AnalysisTab::Summary);
        content.set(FetchState::Idle);
        analysis.set(FetchState::Loading);
        analysis_epoch.update_value(|seq| *seq += 1);
        let seq = analysis_epoch.get_value();
        let client = client_for_analysis.clone();
        spawn_local(async move {
            let result = client.fetch_analysis(&file.path).await;
            // A newer selection owns the panel now.
            if analysis_epoch.get_value() != seq {
                return;
            }
            match result {
                Ok(data) => analysis.set(FetchState::Ready(data)),
                Err(err) => analysis.set(FetchState::Failed(err.to_string())),
            }
        });
    });

    let select_tab = Callback::new(move |tab: AnalysisTab| {
        active_tab.set(tab);
        if tab == AnalysisTab::Source
            && matches!(content.get_untracked(), FetchState::Idle)
        {
            load_content.call(());
        }
    });

    view! {
        <Pane layout_class="analysis-pane" aria_label="File analysis">
            {move || match analysis.get() {
                FetchState::Idle => {
                    view! {
                        <EmptyState layout_class="analysis-empty">
                            <Icon icon=IconName::Brain size=IconSize::Lg />
                            <Heading role=TextRole::Label>"Select a File to Analyze"</Heading>
                            <Text tone=TextTone::Secondary>
                                "Choose a file from the explorer to see AI-powered insights."
                            </Text>
                        </EmptyState>
                    }
                        .into_view()
                }
                FetchState::Loading => {
                    let name = selected.get().map(|f| f.name).unwrap_or_default();
                    view! {
                        <EmptyState layout_class="analysis-loading">
                            <Icon icon=IconName::Brain size=IconSize::Lg />
                            <Text tone=TextTone::Secondary>
                                {format!("Analyzing {name}...")}
                            </Text>
                        </EmptyState>
                    }
                        .into_view()
                }
                FetchState::Failed(message) => {
                    view! {
                        <EmptyState layout_class="analysis-error">
                            <Icon icon=IconName::Alert size=IconSize::Lg />
                            <Heading role=TextRole::Label>"Analysis Not Available"</Heading>
                            <Text tone=TextTone::Danger>{message}</Text>
                            <Button on_click=Callback::new(move |_| retry.update(|n| *n += 1))>
                                "Retry"
                            </Button>
                        </EmptyState>
                    }
                        .into_view()
                }
                FetchState::Ready(data) => {
                    let file = selected.get();
                    let name = file.as_ref().map(|f| f.name.clone()).unwrap_or_default();
                    let path = file.as_ref().map(|f| f.path.clone()).unwrap_or_default();
                    view! {
                        <PaneHeader title=name meta=path>
                            <Badge>"AI analysis"</Badge>
                        </PaneHeader>
                        <TabList layout_class="analysis-tabs" aria_label="Analysis sections">
                            {AnalysisTab::ALL
                                .iter()
                                .map(|tab| {
                                    let tab = *tab;
                                    view! {
                                        <Tab
                                            id=tab.tab_dom_id()
                                            controls="analysis-tabpanel".to_string()
                                            selected=Signal::derive(move || active_tab.get() == tab)
                                            tabindex=Signal::derive(move || {
                                                if active_tab.get() == tab { 0 } else { -1 }
                                            })
                                            on_click=Callback::new(move |_| select_tab.call(tab))
                                        >
                                            {tab.label()}
                                        </Tab>
                                    }
                                })
                                .collect_view()}
                        </TabList>
                        <div
                            id="analysis-tabpanel"
                            role="tabpanel"
                            aria-labelledby=move || active_tab.get().tab_dom_id()
                        >
                            {move || tab_panel(active_tab.get(), &data, content, load_content)}
                        </div>
                    }
                        .into_view()
                }
            }}
        </Pane>
    }
}

fn tab_panel(
    tab: AnalysisTab,
    data: &FileAnalysis,
    content: RwSignal<FetchState<String>>,
    load_content: Callback<()>,
) -> View {
    match tab {
        AnalysisTab::Summary => {
            let summary = data.summary.clone();
            view! {
                <Surface layout_class="analysis-summary" variant=SurfaceVariant::Muted>
                    <Text>{summary}</Text>
                </Surface>
            }
            .into_view()
        }
        AnalysisTab::Functions => {
            if data.functions.is_empty() {
                return view! {
                    <Text tone=TextTone::Secondary>"No documented functions in this file."</Text>
                }
                .into_view();
            }
            let functions = data
                .functions
                .iter()
                .map(|function| {
                    let name = function.name.clone();
                    let return_type = function.return_type.clone();
                    let description = function.description.clone();
                    view! {
                        <Surface variant=SurfaceVariant::Muted padding=LayoutPadding::Sm>
                            <Cluster justify=LayoutJustify::Between>
                                <Text role=TextRole::Code>{name}</Text>
                                {return_type.map(|ret| view! { <Badge>{ret}</Badge> })}
                            </Cluster>
                            <Text tone=TextTone::Secondary>
                                {description}
                            </Text>
                        </Surface>
                    }
                })
                .collect_view();
            view! {
                <Stack layout_class="analysis-functions" gap=LayoutGap::Sm>
                    {functions}
                </Stack>
            }
            .into_view()
        }
        AnalysisTab::Dependencies => {
            if data.dependencies.is_empty() {
                return view! {
                    <Text tone=TextTone::Secondary>"No dependencies detected."</Text>
                }
                .into_view();
            }
            let dependencies = data
                .dependencies
                .iter()
                .map(|dependency| {
                    let dependency = dependency.clone();
                    view! { <Badge>{dependency}</Badge> }
                })
                .collect_view();
            view! {
                <Cluster layout_class="analysis-dependencies" gap=LayoutGap::Sm>
                    {dependencies}
                </Cluster>
            }
            .into_view()
        }
        AnalysisTab::Source => view! {
            {move || match content.get() {
                FetchState::Idle | FetchState::Loading => {
                    view! { <Text tone=TextTone::Secondary>"Loading source..."</Text> }
                        .into_view()
                }
                FetchState::Failed(message) => {
                    view! {
                        <Stack gap=LayoutGap::Sm>
                            <Text tone=TextTone::Danger>{message}</Text>
                            <Button on_click=Callback::new(move |_| load_content.call(()))>
                                "Retry"
                            </Button>
                        </Stack>
                    }
                        .into_view()
                }
                FetchState::Ready(text) => {
                    view! {
                        <Surface layout_class="analysis-source" variant=SurfaceVariant::Inset>
                            <pre>
                                <Text role=TextRole::Code>{text}</Text>
                            </pre>
                        </Surface>
                    }
                        .into_view()
                }
            }}
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::AnalysisTab;

    #[test]
    fn tab_tokens_and_ids_are_stable() {
        let tokens: Vec<&str> = AnalysisTab::ALL.iter().map(|tab| tab.token()).collect();
        assert_eq!(tokens, vec!["summary", "functions", "dependencies", "source"]);
        assert_eq!(AnalysisTab::Summary.tab_dom_id(), "analysis-tab-summary");
    }

    #[test]
    fn tab_labels_are_title_case() {
        for tab in AnalysisTab::ALL {
            let label = tab.label();
            assert!(label.chars().next().expect("label").is_ascii_uppercase());
        }
    }
}
