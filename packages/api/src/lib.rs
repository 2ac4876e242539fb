//! # API crate: shared fullstack server functions
//!
//! Defines the Dioxus server functions the web frontend calls, plus the
//! modules they depend on.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | partly `server` | Session key, Argon2 password hashing, credential checks against `site.toml` accounts |
//! | [`models`] | none | [`UserInfo`], [`ClientSettings`] and the re-exported [`AccountType`] |
//! | [`settings`] | `server` | Lazy `OnceCell` singleton holding the parsed [`SiteConfig`](store::SiteConfig) |
//! | [`sitemap`] | none | Static page list + content items → `sitemap.xml` |
//!
//! ## Server functions exposed here
//!
//! Every public `async fn` in this file is a Dioxus server function, compiled
//! once with full server logic (behind `#[cfg(feature = "server")]`) and once
//! as a thin client stub.
//!
//! - `get_current_user`: the session provider contract consumed by the UI
//! - `login_password`, `logout`
//! - `get_client_settings`: shell and reveal tuning from `site.toml`

use dioxus::prelude::*;

pub mod auth;
pub mod models;
#[cfg(feature = "server")]
pub mod settings;
pub mod sitemap;

pub use models::{AccountType, ClientSettings, UserInfo};

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    let user: Option<UserInfo> = session
        .get(auth::SESSION_USER_KEY)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(user)
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Log in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login-password", session: tower_sessions::Session)]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    let config = settings::get_settings()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let user = match auth::authenticate(config, &email, &password) {
        Ok(user) => user,
        Err(auth::AuthError::InvalidCredentials) => {
            return Err(ServerFnError::new(auth::AuthError::InvalidCredentials.to_string()));
        }
        Err(e) => {
            tracing::error!("Login failed: {}", e);
            return Err(ServerFnError::new(e.to_string()));
        }
    };

    // Fresh session id on privilege change
    session
        .cycle_id()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    session
        .insert(auth::SESSION_USER_KEY, user.clone())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    tracing::info!(user = %user.id, account_type = %user.account_type, "User signed in");
    Ok(user)
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login-password")]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    session
        .flush()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(())
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Shell and reveal tuning for the browser.
#[cfg(feature = "server")]
#[get("/api/settings")]
pub async fn get_client_settings() -> Result<ClientSettings, ServerFnError> {
    let config = settings::get_settings()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    Ok(ClientSettings::from(config))
}

#[cfg(not(feature = "server"))]
#[get("/api/settings")]
pub async fn get_client_settings() -> Result<ClientSettings, ServerFnError> {
    Ok(ClientSettings::default())
}
