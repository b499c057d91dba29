//! Project assistant chat panel with a locally persisted transcript.
//!
//! The transcript is keyed by project name and survives a page reload; it
//! is cleared by the page on logout or when a new project replaces the
//! current one. Send failures stay inline with a retry affordance.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use api_client::{ApiClient, ChatRequest};
use leptos::*;
use platform_host::{chat_transcript_key, next_monotonic_timestamp_ms};
use project_tree::FileNode;
use serde::{Deserialize, Serialize};
use system_ui::prelude::*;

/// Payload schema version for persisted transcripts.
const CHAT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Who authored a chat message.
pub enum Sender {
    /// The signed-in user.
    User,
    /// The project assistant.
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One transcript entry.
pub struct ChatMessage {
    /// Monotonic id within the transcript.
    pub id: u64,
    /// Message author.
    pub sender: Sender,
    /// Message text.
    pub text: String,
    /// Creation time in unix milliseconds.
    pub timestamp_unix_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ChatTranscript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatTranscript {
    fn seeded() -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        transcript.append(
            Sender::Assistant,
            "Hi there! I've analyzed your project. Feel free to ask me any questions about \
             the code, structure, or functionality."
                .to_string(),
        );
        transcript
    }

    fn append(&mut self, sender: Sender, text: String) {
        let message = ChatMessage {
            id: self.next_id,
            sender,
            text,
            timestamp_unix_ms: next_monotonic_timestamp_ms(),
        };
        self.next_id += 1;
        self.messages.push(message);
    }
}

/// Formats a unix-millisecond timestamp as `HH:MM` (UTC).
fn format_timestamp(timestamp_unix_ms: u64) -> String {
    let minutes_total = timestamp_unix_ms / 1000 / 60;
    let hours = (minutes_total / 60) % 24;
    let minutes = minutes_total % 60;
    format!("{hours:02}:{minutes:02}")
}

/// Deletes the persisted transcript for a project.
///
/// # Errors
///
/// Returns an error when the underlying store fails.
pub async fn clear_chat_transcript(project_name: &str) -> Result<(), String> {
    platform_storage::clear_state(&chat_transcript_key(project_name)).await
}

#[component]
/// Chat panel bound to the current project and selected file context.
pub fn ChatPanel(
    /// Display name of the loaded project.
    project_name: String,
    /// Currently selected file; forwarded as chat context when present.
    #[prop(into)]
    selected: Signal<Option<FileNode>>,
    /// Backend client carrying the session token.
    client: ApiClient,
) -> impl IntoView {
    let transcript = create_rw_signal(ChatTranscript::seeded());
    let draft = create_rw_signal(String::new());
    let pending = create_rw_signal(false);
    let failed = create_rw_signal::<Option<String>>(None);
    let hydrated = create_rw_signal(false);
    let last_saved = create_rw_signal::<Option<String>>(None);

    let storage_key = chat_transcript_key(&project_name);

    {
        let storage_key = storage_key.clone();
        spawn_local(async move {
            match platform_storage::load_state::<ChatTranscript>(&storage_key, CHAT_SCHEMA_VERSION)
                .await
            {
                Ok(Some(stored)) => {
                    last_saved.set(serde_json::to_string(&stored).ok());
                    transcript.set(stored);
                }
                Ok(None) => {}
                Err(err) => logging::warn!("chat transcript load failed: {err}"),
            }
            hydrated.set(true);
        });
    }

    {
        let storage_key = storage_key.clone();
        create_effect(move |_| {
            if !hydrated.get() {
                return;
            }

            let snapshot = transcript.get();
            let serialized = match serde_json::to_string(&snapshot) {
                Ok(raw) => raw,
                Err(err) => {
                    logging::warn!("chat transcript serialize failed: {err}");
                    return;
                }
            };
            if last_saved.get().as_deref() == Some(serialized.as_str()) {
                return;
            }
            last_saved.set(Some(serialized));

            let storage_key = storage_key.clone();
            spawn_local(async move {
                if let Err(err) =
                    platform_storage::save_state(&storage_key, CHAT_SCHEMA_VERSION, &snapshot).await
                {
                    logging::warn!("chat transcript save failed: {err}");
                }
            });
        });
    }

    let dispatch = Callback::new({
        let client = client.clone();
        let project_name = project_name.clone();
        move |text: String| {
            pending.set(true);
            failed.set(None);

            let file = selected.get_untracked();
            let request = ChatRequest {
                message: text.clone(),
                project_name: Some(project_name.clone()),
                selected_file_name: file.as_ref().map(|f| f.name.clone()),
                selected_file_path: file.as_ref().map(|f| f.path.clone()),
            };
            let client = client.clone();
            spawn_local(async move {
                match client.send_chat_message(&request).await {
                    Ok(reply) => {
                        transcript.update(|t| t.append(Sender::Assistant, reply.response));
                    }
                    Err(err) => {
                        logging::warn!("chat request failed: {err}");
                        failed.set(Some(text));
                    }
                }
                pending.set(false);
            });
        }
    });

    let send_draft = Callback::new(move |_: ()| {
        let text = draft.get_untracked().trim().to_string();
        if text.is_empty() || pending.get_untracked() {
            return;
        }
        draft.set(String::new());
        transcript.update(|t| t.append(Sender::User, text.clone()));
        dispatch.call(text);
    });

    let retry_failed = Callback::new(move |_: ()| {
        if let Some(text) = failed.get_untracked() {
            dispatch.call(text);
        }
    });

    let placeholder = format!("Ask something about {project_name}...");

    view! {
        <Pane layout_class="chat-pane" aria_label="Project assistant">
            <PaneHeader title="Project Assistant">
                <Icon icon=IconName::Brain size=IconSize::Sm />
            </PaneHeader>

            <Stack layout_class="chat-transcript" gap=LayoutGap::Sm ui_slot="transcript">
                <For
                    each=move || transcript.get().messages
                    key=|message| message.id
                    let:message
                >
                    <ChatMessageRow message=message />
                </For>

                <Show when=move || pending.get() fallback=|| ()>
                    <Cluster layout_class="chat-pending" gap=LayoutGap::Sm>
                        <Icon icon=IconName::Brain size=IconSize::Sm />
                        <Text tone=TextTone::Secondary>"Thinking..."</Text>
                    </Cluster>
                </Show>

                <Show when=move || failed.get().is_some() fallback=|| ()>
                    <Cluster layout_class="chat-error" gap=LayoutGap::Sm>
                        <Icon icon=IconName::Alert size=IconSize::Sm />
                        <Text tone=TextTone::Danger>"The assistant didn't answer."</Text>
                        <Button
                            size=ButtonSize::Sm
                            on_click=Callback::new(move |_| retry_failed.call(()))
                        >
                            "Retry"
                        </Button>
                    </Cluster>
                </Show>
            </Stack>

            <Cluster layout_class="chat-composer" gap=LayoutGap::Sm ui_slot="composer">
                <TextField
                    layout_class="chat-input"
                    placeholder=placeholder
                    aria_label="Chat message"
                    value=Signal::derive(move || draft.get())
                    disabled=Signal::derive(move || pending.get())
                    on_input=Callback::new(move |ev| draft.set(event_target_value(&ev)))
                    on_keydown=Callback::new(move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            send_draft.call(());
                        }
                    })
                />
                <Button
                    variant=ButtonVariant::Primary
                    leading_icon=IconName::Send
                    aria_label="Send message"
                    disabled=Signal::derive(move || {
                        pending.get() || draft.get().trim().is_empty()
                    })
                    on_click=Callback::new(move |_| send_draft.call(()))
                >
                    "Send"
                </Button>
            </Cluster>
        </Pane>
    }
}

#[component]
fn ChatMessageRow(message: ChatMessage) -> impl IntoView {
    let (row_token, icon) = match message.sender {
        Sender::User => ("user", IconName::User),
        Sender::Assistant => ("assistant", IconName::Brain),
    };

    view! {
        <div class="chat-message" data-ui-sender=row_token>
            <Icon icon size=IconSize::Sm layout_class="chat-avatar" />
            <Stack gap=LayoutGap::None>
                <Surface
                    variant=SurfaceVariant::Muted
                    padding=LayoutPadding::Sm
                    layout_class="chat-bubble"
                >
                    <Text>{message.text}</Text>
                </Surface>
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {format_timestamp(message.timestamp_unix_ms)}
                </Text>
            </Stack>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_transcript_starts_with_assistant_greeting() {
        let transcript = ChatTranscript::seeded();
        assert_eq!(transcript.messages.len(), 1);
        assert_eq!(transcript.messages[0].sender, Sender::Assistant);
        assert_eq!(transcript.messages[0].id, 1);
        assert_eq!(transcript.next_id, 2);
    }

    #[test]
    fn append_assigns_increasing_ids_and_timestamps() {
        let mut transcript = ChatTranscript::seeded();
        transcript.append(Sender::User, "what does main do?".to_string());
        transcript.append(Sender::Assistant, "it mounts the app".to_string());

        let ids: Vec<u64> = transcript.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(
            transcript.messages[2].timestamp_unix_ms > transcript.messages[1].timestamp_unix_ms
        );
    }

    #[test]
    fn transcript_round_trips_through_serde() {
        let mut transcript = ChatTranscript::seeded();
        transcript.append(Sender::User, "hello".to_string());

        let raw = serde_json::to_string(&transcript).expect("serialize");
        let reloaded: ChatTranscript = serde_json::from_str(&raw).expect("deserialize");
        assert_eq!(reloaded, transcript);
    }

    #[test]
    fn sender_serde_uses_kebab_case_tokens() {
        assert_eq!(
            serde_json::to_string(&Sender::Assistant).expect("serialize"),
            "\"assistant\""
        );
        assert_eq!(
            serde_json::to_string(&Sender::User).expect("serialize"),
            "\"user\""
        );
    }

    #[test]
    fn format_timestamp_renders_utc_hours_and_minutes() {
        // 2021-01-01T13:05:00Z
        assert_eq!(format_timestamp(1_609_506_300_000), "13:05");
        assert_eq!(format_timestamp(0), "00:00");
    }
}
