//! Authentication context and hooks for the UI.

use api::{AccountType, UserInfo};
use dioxus::prelude::*;

/// Session snapshot: who is signed in, and whether that is still being resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn account_type(&self) -> Option<AccountType> {
        self.user.as_ref().map(|u| u.account_type)
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user on mount
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(Some(user)) => auth_state.set(AuthState::signed_in(user)),
            Ok(None) => auth_state.set(AuthState::signed_out()),
            Err(e) => {
                tracing::warn!("Failed to resolve session: {}", e);
                auth_state.set(AuthState::signed_out());
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<()>,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| async move {
        match api::logout().await {
            Ok(()) => {
                auth_state.set(AuthState::signed_out());
                on_logout.call(());
            }
            Err(e) => tracing::error!("Logout failed: {}", e),
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
