//! Email/password sign-in form.

use api::UserInfo;
use dioxus::prelude::*;

use crate::auth::{use_auth, AuthState};

/// Sign-in page. Calls `on_signed_in` once a user is known, whether they just
/// signed in or already had a session when the page loaded.
#[component]
pub fn LoginView(on_signed_in: EventHandler<UserInfo>) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    use_effect(move || {
        let state = auth();
        if let (false, Some(user)) = (state.loading, state.user) {
            on_signed_in.call(user);
        }
    });

    let onsubmit = move |evt: FormEvent| async move {
        evt.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);
        error.set(None);

        match api::login_password(email(), password()).await {
            Ok(user) => auth.set(AuthState::signed_in(user)),
            Err(e) => {
                tracing::warn!("Sign-in rejected: {}", e);
                error.set(Some("Invalid email or password".to_string()));
            }
        }
        submitting.set(false);
    };

    rsx! {
        div {
            class: "flex min-h-[70vh] items-center justify-center px-6",
            form {
                class: "w-full max-w-sm space-y-4 rounded-2xl border border-neutral-200 bg-white p-8 shadow-sm",
                onsubmit: onsubmit,

                h1 { class: "text-2xl font-bold text-neutral-900", "Sign in to Campus" }

                if let Some(message) = error() {
                    p { class: "rounded bg-red-50 px-3 py-2 text-sm text-red-700", role: "alert", "{message}" }
                }

                label {
                    class: "block text-sm font-medium text-neutral-700",
                    "Email"
                    input {
                        class: "mt-1 w-full rounded-lg border border-neutral-300 px-3 py-2",
                        r#type: "email",
                        autocomplete: "email",
                        required: true,
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }

                label {
                    class: "block text-sm font-medium text-neutral-700",
                    "Password"
                    input {
                        class: "mt-1 w-full rounded-lg border border-neutral-300 px-3 py-2",
                        r#type: "password",
                        autocomplete: "current-password",
                        required: true,
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }

                button {
                    class: "w-full rounded-lg bg-indigo-600 py-2 font-medium text-white hover:bg-indigo-700 disabled:opacity-50",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
