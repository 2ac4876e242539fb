//! Shared UI for the Campus site: session context, the route guard, page
//! transition, scroll reveal, the dashboard shell and the page bodies.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

pub mod guard;
pub use guard::{decide, post_login_destination, GuardOutcome, LoadingPlaceholder, ProtectedRoute, Redirect};

pub mod transition;
pub use transition::PageTransition;

pub mod reveal;
pub use reveal::{use_scroll_reveal, RevealOnScroll};

mod prefs;
pub use prefs::preference_store;

mod settings;
pub use settings::{use_client_settings, SettingsProvider};

pub mod views;

pub use components::dashboard_shell::DashboardShell;
pub use components::navbar::{Footer, Navbar};

/// Tailwind runtime used by every page.
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Styles that are not Tailwind utilities: the reveal animation and the
/// sidebar entries.
pub const THEME_CSS: &str = r#"
@keyframes fade-in-up {
    from { opacity: 0; transform: translateY(2rem); }
    to { opacity: 1; transform: translateY(0); }
}
.animate-fade-in-up {
    animation: fade-in-up 0.7s ease-out both;
}
.sidebar-item {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    width: 100%;
    padding: 0.5rem 0.75rem;
    border-radius: 0.5rem;
    color: #525252;
    text-align: left;
}
.sidebar-item:hover {
    background-color: #f5f5f5;
}
.sidebar-item.active {
    background-color: #eef2ff;
    color: #4338ca;
    font-weight: 500;
}
"#;
