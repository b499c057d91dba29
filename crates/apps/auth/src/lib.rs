//! Login/register form.
//!
//! On success the opaque bearer token is persisted through the storage
//! facade and handed to the page, which flips the authenticated route
//! state. Failures render inline under the form.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use api_client::{ApiClient, AuthRequest};
use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    fn token(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Register => "Create Account",
        }
    }
}

/// Validates the form fields before a request is made.
fn validate_credentials(
    mode: AuthMode,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), String> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.".to_string());
    }
    if password.is_empty() {
        return Err("Enter a password.".to_string());
    }
    if mode == AuthMode::Register && password != confirm {
        return Err("Passwords do not match.".to_string());
    }
    Ok(())
}

#[component]
/// Authentication form with login and register modes.
pub fn AuthForm(
    /// Backend client (no token yet).
    client: ApiClient,
    /// Fired with the fresh session token after it has been persisted.
    on_success: Callback<String>,
) -> impl IntoView {
    let mode = create_rw_signal(AuthMode::Login);
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm = create_rw_signal(String::new());
    let pending = create_rw_signal(false);
    let error = create_rw_signal::<Option<String>>(None);

    let submit = Callback::new({
        let client = client.clone();
        move |_: ()| {
            if pending.get_untracked() {
                return;
            }
            let active_mode = mode.get_untracked();
            let email_value = email.get_untracked();
            let password_value = password.get_untracked();
            if let Err(message) = validate_credentials(
                active_mode,
                &email_value,
                &password_value,
                &confirm.get_untracked(),
            ) {
                error.set(Some(message));
                return;
            }

            pending.set(true);
            error.set(None);
            let request = AuthRequest {
                email: email_value.trim().to_string(),
                password: password_value,
            };
            let client = client.clone();
            spawn_local(async move {
                let result = match active_mode {
                    AuthMode::Login => client.login(&request).await,
                    AuthMode::Register => client.register(&request).await,
                };
                match result {
                    Ok(response) => {
                        if let Err(err) = platform_storage::save_session_token(&response.token) {
                            logging::warn!("session token save failed: {err}");
                        }
                        on_success.call(response.token);
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                pending.set(false);
            });
        }
    });

    let select_mode = move |next: AuthMode| {
        Callback::new(move |_| {
            mode.set(next);
            error.set(None);
        })
    };

    view! {
        <Stack layout_class="auth-form" gap=LayoutGap::Md>
            <TabList aria_label="Authentication mode">
                <Tab
                    id="auth-tab-login"
                    controls="auth-panel".to_string()
                    selected=Signal::derive(move || mode.get() == AuthMode::Login)
                    tabindex=Signal::derive(move || {
                        if mode.get() == AuthMode::Login { 0 } else { -1 }
                    })
                    on_click=select_mode(AuthMode::Login)
                >
                    "Login"
                </Tab>
                <Tab
                    id="auth-tab-register"
                    controls="auth-panel".to_string()
                    selected=Signal::derive(move || mode.get() == AuthMode::Register)
                    tabindex=Signal::derive(move || {
                        if mode.get() == AuthMode::Register { 0 } else { -1 }
                    })
                    on_click=select_mode(AuthMode::Register)
                >
                    "Sign Up"
                </Tab>
            </TabList>

            <div
                id="auth-panel"
                role="tabpanel"
                aria-label="Credentials"
                data-ui-mode=move || mode.get().token()
            >
            <Stack gap=LayoutGap::Sm layout_class="auth-fields" ui_slot="fields">
                <FieldGroup title="Email">
                    <TextField
                        input_type="email"
                        placeholder="you@example.com"
                        aria_label="Email"
                        autocomplete="email"
                        value=Signal::derive(move || email.get())
                        disabled=Signal::derive(move || pending.get())
                        on_input=Callback::new(move |ev| email.set(event_target_value(&ev)))
                    />
                </FieldGroup>
                <FieldGroup title="Password">
                    <TextField
                        input_type="password"
                        aria_label="Password"
                        autocomplete="current-password"
                        value=Signal::derive(move || password.get())
                        disabled=Signal::derive(move || pending.get())
                        on_input=Callback::new(move |ev| password.set(event_target_value(&ev)))
                        on_keydown=Callback::new(move |ev: ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.call(());
                            }
                        })
                    />
                </FieldGroup>
                <Show when=move || mode.get() == AuthMode::Register fallback=|| ()>
                    <FieldGroup title="Confirm Password">
                        <TextField
                            input_type="password"
                            aria_label="Confirm password"
                            autocomplete="new-password"
                            value=Signal::derive(move || confirm.get())
                            disabled=Signal::derive(move || pending.get())
                            on_input=Callback::new(move |ev| confirm.set(event_target_value(&ev)))
                        />
                    </FieldGroup>
                </Show>
            </Stack>
            </div>

            <Show when=move || error.get().is_some() fallback=|| ()>
                <Text tone=TextTone::Danger>
                    {move || error.get().unwrap_or_default()}
                </Text>
            </Show>

            <Button
                variant=ButtonVariant::Primary
                disabled=Signal::derive(move || pending.get())
                on_click=Callback::new(move |_| submit.call(()))
            >
                {move || {
                    if pending.get() {
                        "Signing in..."
                    } else {
                        mode.get().submit_label()
                    }
                }}
            </Button>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_tokens_are_stable() {
        assert_eq!(AuthMode::Login.token(), "login");
        assert_eq!(AuthMode::Register.token(), "register");
    }

    #[test]
    fn validation_requires_plausible_email_and_password() {
        assert!(validate_credentials(AuthMode::Login, "a@b.c", "pw", "").is_ok());
        assert!(validate_credentials(AuthMode::Login, "", "pw", "").is_err());
        assert!(validate_credentials(AuthMode::Login, "not-an-email", "pw", "").is_err());
        assert!(validate_credentials(AuthMode::Login, "a@b.c", "", "").is_err());
    }

    #[test]
    fn registration_requires_matching_password_confirmation() {
        assert!(validate_credentials(AuthMode::Register, "a@b.c", "pw", "pw").is_ok());
        assert!(validate_credentials(AuthMode::Register, "a@b.c", "pw", "other").is_err());
        // Login ignores the confirmation field entirely.
        assert!(validate_credentials(AuthMode::Login, "a@b.c", "pw", "other").is_ok());
    }
}
