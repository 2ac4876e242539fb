//! # Route access guard
//!
//! [`decide`] is a pure function over the session snapshot, the account types
//! a view requires, and the requested location. [`ProtectedRoute`] applies the
//! outcome: it renders its children, a loading placeholder, or asks the
//! platform package to perform a replace-navigation through `on_redirect`.
//!
//! The session is passed in explicitly rather than read from context, so the
//! decision can be exercised without a running app.

use api::{AccountType, UserInfo};
use dioxus::prelude::*;

use crate::auth::AuthState;

/// Where the guard sends a visitor who may not see the requested view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Redirect {
    /// Not signed in. `from` is the originally requested location.
    Login { from: String },
    /// Signed in with the wrong account type; go to that type's home area.
    Home(AccountType),
}

impl Redirect {
    /// Destination path, without the remembered location.
    pub fn path(&self) -> &'static str {
        match self {
            Redirect::Login { .. } => "/login",
            Redirect::Home(account_type) => account_type.home_path(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session still resolving; show a placeholder and do nothing else.
    Loading,
    Redirect(Redirect),
    Render,
}

/// Decide whether `requested` may render for `session`.
///
/// `required` of `None` admits any signed-in user.
pub fn decide(session: &AuthState, required: Option<&[AccountType]>, requested: &str) -> GuardOutcome {
    if session.loading {
        return GuardOutcome::Loading;
    }

    let Some(user) = &session.user else {
        return GuardOutcome::Redirect(Redirect::Login {
            from: requested.to_string(),
        });
    };

    match required {
        Some(allowed) if !allowed.contains(&user.account_type) => {
            GuardOutcome::Redirect(Redirect::Home(user.account_type))
        }
        _ => GuardOutcome::Render,
    }
}

/// Where to go after signing in.
///
/// The remembered location is honoured only when it is a local absolute path
/// that is not the login page itself; anything else falls back to the user's
/// home area.
pub fn post_login_destination(remembered: &str, user: &UserInfo) -> String {
    let remembered = remembered.trim();
    let path = remembered.split(['?', '#']).next().unwrap_or_default();

    let is_local = remembered.starts_with('/')
        && !remembered.starts_with("//")
        && !remembered.contains('\\');

    if is_local && path != "/login" {
        remembered.to_string()
    } else {
        user.account_type.home_path().to_string()
    }
}

/// Renders `children` only when [`decide`] allows it.
#[component]
pub fn ProtectedRoute(
    /// Current session snapshot.
    session: AuthState,
    /// Location being guarded, remembered for the post-login return.
    requested: String,
    /// Account types allowed to see the view; `None` admits any signed-in user.
    #[props(!optional)]
    required: Option<Vec<AccountType>>,
    /// Performs the replace-navigation for a redirect outcome.
    on_redirect: EventHandler<Redirect>,
    children: Element,
) -> Element {
    let outcome = decide(&session, required.as_deref(), &requested);

    use_effect(use_reactive((&outcome,), move |(outcome,)| {
        if let GuardOutcome::Redirect(redirect) = outcome {
            tracing::debug!("Guard redirecting to {}", redirect.path());
            on_redirect.call(redirect);
        }
    }));

    match outcome {
        GuardOutcome::Render => rsx! { {children} },
        GuardOutcome::Loading | GuardOutcome::Redirect(_) => rsx! { LoadingPlaceholder {} },
    }
}

#[component]
pub fn LoadingPlaceholder() -> Element {
    rsx! {
        div {
            class: "flex min-h-screen items-center justify-center text-neutral-500",
            role: "status",
            "aria-live": "polite",
            "Loading..."
        }
    }
}
