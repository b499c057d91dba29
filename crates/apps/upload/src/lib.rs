//! Project archive upload flow.
//!
//! Picks a `.zip` through the browser file picker, shows what was chosen,
//! and posts the bytes to the backend. The page receives the raw upload
//! response and owns everything that happens next (tree build, persistence,
//! workspace transition).

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use api_client::{ApiClient, UploadResponse};
use leptos::*;
use platform_host_web::{pick_archive_file, PickedFile};
use system_ui::prelude::*;

/// Maximum accepted archive size.
const MAX_ARCHIVE_BYTES: u64 = 50 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
enum UploadPhase {
    Idle,
    Uploading,
    Failed(String),
}

/// Formats a byte count the way the picker card displays it.
fn format_file_size(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
}

/// Checks whether a picked file is acceptable for upload.
///
/// Returns a user-facing rejection notice for non-zip names and oversized
/// archives.
fn validate_pick(name: &str, size: u64) -> Result<(), String> {
    if !name.ends_with(".zip") {
        return Err("Please choose a .zip archive.".to_string());
    }
    if size > MAX_ARCHIVE_BYTES {
        return Err("Archives are limited to 50 MB.".to_string());
    }
    Ok(())
}

#[component]
/// Upload card shown when no project is loaded yet.
pub fn UploadPanel(
    /// Backend client carrying the session token.
    client: ApiClient,
    /// Fired with the server response once an upload succeeds.
    on_upload_complete: Callback<UploadResponse>,
) -> impl IntoView {
    let picked = create_rw_signal::<Option<PickedFile>>(None);
    let phase = create_rw_signal(UploadPhase::Idle);
    let notice = create_rw_signal::<Option<String>>(None);

    let pick = Callback::new(move |_: ()| {
        notice.set(None);
        spawn_local(async move {
            match pick_archive_file().await {
                Ok(file) => match validate_pick(&file.name, file.size) {
                    Ok(()) => {
                        phase.set(UploadPhase::Idle);
                        picked.set(Some(file));
                    }
                    Err(message) => notice.set(Some(message)),
                },
                Err(err) => logging::warn!("archive pick failed: {err}"),
            }
        });
    });

    let upload = Callback::new({
        let client = client.clone();
        move |_: ()| {
            let Some(file) = picked.get_untracked() else {
                return;
            };
            phase.set(UploadPhase::Uploading);
            let client = client.clone();
            spawn_local(async move {
                match client.upload_project(&file.name, &file.bytes).await {
                    Ok(response) => {
                        phase.set(UploadPhase::Idle);
                        picked.set(None);
                        on_upload_complete.call(response);
                    }
                    Err(err) => phase.set(UploadPhase::Failed(err.to_string())),
                }
            });
        }
    });

    let reset = Callback::new(move |_: ()| {
        picked.set(None);
        phase.set(UploadPhase::Idle);
        notice.set(None);
    });

    let uploading = Signal::derive(move || phase.get() == UploadPhase::Uploading);

    view! {
        <Surface layout_class="upload-card" aria_label="Upload project archive">
            <Show
                when=move || picked.get().is_some()
                fallback=move || {
                    view! {
                        <EmptyState layout_class="upload-empty">
                            <Icon icon=IconName::Upload size=IconSize::Lg />
                            <Heading role=TextRole::Label>"Upload Project ZIP"</Heading>
                            <Text tone=TextTone::Secondary>
                                "Pick the ZIP file containing your project to start analyzing it."
                            </Text>
                            <Button
                                variant=ButtonVariant::Primary
                                leading_icon=IconName::Upload
                                on_click=Callback::new(move |_| pick.call(()))
                            >
                                "Select ZIP File"
                            </Button>
                            <Show when=move || notice.get().is_some() fallback=|| ()>
                                <Text tone=TextTone::Danger>
                                    {move || notice.get().unwrap_or_default()}
                                </Text>
                            </Show>
                        </EmptyState>
                    }
                }
            >
                <Stack gap=LayoutGap::Sm>
                    <Cluster justify=LayoutJustify::Between>
                        <Cluster gap=LayoutGap::Sm>
                            <Icon icon=IconName::File size=IconSize::Md />
                            <Stack gap=LayoutGap::None>
                                <Text>
                                    {move || {
                                        picked.get().map(|f| f.name).unwrap_or_default()
                                    }}
                                </Text>
                                <Text role=TextRole::Caption tone=TextTone::Secondary>
                                    {move || {
                                        picked
                                            .get()
                                            .map(|f| format_file_size(f.size))
                                            .unwrap_or_default()
                                    }}
                                </Text>
                            </Stack>
                        </Cluster>
                        <Button
                            size=ButtonSize::Sm
                            variant=ButtonVariant::Quiet
                            aria_label="Discard chosen archive"
                            disabled=uploading
                            on_click=Callback::new(move |_| reset.call(()))
                        >
                            "Remove"
                        </Button>
                    </Cluster>

                    {move || match phase.get() {
                        UploadPhase::Uploading => {
                            view! {
                                <Cluster gap=LayoutGap::Sm>
                                    <ProgressBar max=1 value=0_u16 variant=ProgressVariant::Accent />
                                    <Text tone=TextTone::Secondary>"Uploading..."</Text>
                                </Cluster>
                            }
                                .into_view()
                        }
                        UploadPhase::Failed(message) => {
                            view! {
                                <Cluster gap=LayoutGap::Sm>
                                    <Icon icon=IconName::Alert size=IconSize::Sm />
                                    <Text tone=TextTone::Danger>{message}</Text>
                                </Cluster>
                            }
                                .into_view()
                        }
                        UploadPhase::Idle => ().into_view(),
                    }}

                    <Button
                        variant=ButtonVariant::Primary
                        disabled=uploading
                        on_click=Callback::new(move |_| upload.call(()))
                    >
                        "Upload and Analyze"
                    </Button>
                </Stack>
            </Show>
            <Text role=TextRole::Caption tone=TextTone::Secondary>
                "Maximum file size: 50MB. Supported format: .zip"
            </Text>
        </Surface>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_size_is_rendered_in_megabytes() {
        assert_eq!(format_file_size(1024 * 1024), "1.00 MB");
        assert_eq!(format_file_size(1_572_864), "1.50 MB");
        assert_eq!(format_file_size(0), "0.00 MB");
    }

    #[test]
    fn validate_pick_rejects_non_zip_names() {
        assert!(validate_pick("project.zip", 1024).is_ok());
        assert!(validate_pick("project.tar.gz", 1024).is_err());
        assert!(validate_pick("zipless", 1024).is_err());
    }

    #[test]
    fn validate_pick_rejects_oversized_archives() {
        assert!(validate_pick("big.zip", MAX_ARCHIVE_BYTES).is_ok());
        assert!(validate_pick("big.zip", MAX_ARCHIVE_BYTES + 1).is_err());
    }
}
