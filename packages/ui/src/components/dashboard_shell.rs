//! # Dashboard shell
//!
//! Fixed sidebar plus content area. The only state is whether the sidebar is
//! collapsed; it is loaded once after mount from the platform preference store
//! (missing or unreadable → expanded) and written back on every toggle.

use api::{AccountType, UserInfo};
use dioxus::prelude::*;
use store::{KeyValueStore, SidebarPreference, StoreError};

use crate::auth::LogoutButton;
use crate::icons::{FaAnglesLeft, FaAnglesRight, FaBuilding, FaComments, FaHouse};
use crate::prefs::preference_store;
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Overview,
    Organization,
    Communication,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
}

/// Sidebar entries for an account type.
pub fn nav_items_for(account_type: AccountType) -> Vec<NavItem> {
    let home = match account_type {
        AccountType::Student => NavItem {
            label: "Overview",
            path: "/dashboard",
            icon: NavIcon::Overview,
        },
        AccountType::Organization => NavItem {
            label: "Organization",
            path: "/admin",
            icon: NavIcon::Organization,
        },
    };
    vec![
        home,
        NavItem {
            label: "Communication",
            path: "/dashboard/communication",
            icon: NavIcon::Communication,
        },
    ]
}

/// Layout state of the shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellLayout {
    pub collapsed: bool,
}

impl ShellLayout {
    /// Read the persisted preference.
    pub fn mount(store: &impl KeyValueStore) -> Self {
        Self {
            collapsed: SidebarPreference::load(store).collapsed,
        }
    }

    /// Flip the sidebar and persist the new value. The in-memory state flips
    /// even when persisting fails.
    pub fn toggle(&mut self, store: &impl KeyValueStore) -> Result<(), StoreError> {
        let next = SidebarPreference {
            collapsed: self.collapsed,
        }
        .toggled();
        self.collapsed = next.collapsed;
        next.save(store)
    }

    /// Leading margin reserved for the sidebar.
    pub fn content_margin_class(&self) -> &'static str {
        if self.collapsed {
            "ml-16"
        } else {
            "ml-64"
        }
    }

    pub fn sidebar_width_class(&self) -> &'static str {
        if self.collapsed {
            "w-16"
        } else {
            "w-64"
        }
    }
}

#[component]
pub fn DashboardShell(
    user: Option<UserInfo>,
    /// Current location, used to highlight the active entry.
    active_path: String,
    on_navigate: EventHandler<String>,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    let mut layout = use_signal(ShellLayout::default);

    // Effects only run in the client, after hydration
    use_effect(move || {
        layout.set(ShellLayout::mount(&preference_store()));
    });

    let toggle = move |_| {
        let mut next = *layout.peek();
        if let Err(e) = next.toggle(&preference_store()) {
            tracing::warn!("Failed to persist sidebar preference: {}", e);
        }
        layout.set(next);
    };

    let state = layout();
    let items = user
        .as_ref()
        .map(|u| nav_items_for(u.account_type))
        .unwrap_or_default();

    rsx! {
        div {
            class: "min-h-screen bg-neutral-50",
            aside {
                class: "fixed inset-y-0 left-0 flex flex-col border-r border-neutral-200 bg-white transition-all duration-300 {state.sidebar_width_class()}",
                "data-collapsed": if state.collapsed { "true" } else { "false" },

                div {
                    class: "flex items-center justify-between px-3 py-4",
                    if !state.collapsed {
                        span { class: "text-sm font-semibold", "Campus" }
                    }
                    button {
                        class: "rounded p-1 text-neutral-500 hover:bg-neutral-100",
                        title: if state.collapsed { "Expand sidebar" } else { "Collapse sidebar" },
                        "aria-expanded": if state.collapsed { "false" } else { "true" },
                        onclick: toggle,
                        if state.collapsed {
                            Icon { icon: FaAnglesRight, width: 14, height: 14 }
                        } else {
                            Icon { icon: FaAnglesLeft, width: 14, height: 14 }
                        }
                    }
                }

                nav {
                    class: "flex-1 px-2",
                    for item in items {
                        button {
                            key: "{item.path}",
                            class: if active_path == item.path { "sidebar-item active" } else { "sidebar-item" },
                            title: "{item.label}",
                            onclick: move |_| on_navigate.call(item.path.to_string()),
                            NavIconView { icon: item.icon }
                            if !state.collapsed {
                                span { "{item.label}" }
                            }
                        }
                    }
                }

                div {
                    class: "border-t border-neutral-200 px-3 py-3 text-sm",
                    if let Some(ref u) = user {
                        if !state.collapsed {
                            p { class: "truncate font-medium", "{u.display_name()}" }
                            p { class: "text-xs text-neutral-500", "{u.account_type}" }
                        }
                    }
                    LogoutButton {
                        class: "sidebar-item",
                        on_logout: move |_| on_logout.call(()),
                    }
                }
            }

            main {
                class: "transition-all duration-300 {state.content_margin_class()}",
                {children}
            }
        }
    }
}

#[component]
fn NavIconView(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Overview => rsx! { Icon { icon: FaHouse, width: 14, height: 14 } },
        NavIcon::Organization => rsx! { Icon { icon: FaBuilding, width: 14, height: 14 } },
        NavIcon::Communication => rsx! { Icon { icon: FaComments, width: 14, height: 14 } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    #[test]
    fn test_absent_key_mounts_expanded() {
        let store = MemoryStore::new();
        let layout = ShellLayout::mount(&store);
        assert!(!layout.collapsed);
        assert_eq!(layout.content_margin_class(), "ml-64");
        assert_eq!(layout.sidebar_width_class(), "w-64");
    }

    #[test]
    fn test_stored_true_mounts_collapsed() {
        let store = MemoryStore::new();
        store.set(SidebarPreference::KEY, "true").unwrap();
        let layout = ShellLayout::mount(&store);
        assert!(layout.collapsed);
        assert_eq!(layout.content_margin_class(), "ml-16");
        assert_eq!(layout.sidebar_width_class(), "w-16");
    }

    #[test]
    fn test_toggle_persists_for_next_mount() {
        let store = MemoryStore::new();
        let mut layout = ShellLayout::mount(&store);

        layout.toggle(&store).unwrap();
        assert!(layout.collapsed);
        assert_eq!(ShellLayout::mount(&store), layout);

        layout.toggle(&store).unwrap();
        assert!(!layout.collapsed);
        assert_eq!(store.get(SidebarPreference::KEY).as_deref(), Some("false"));
        assert_eq!(ShellLayout::mount(&store), layout);
    }

    #[test]
    fn test_nav_items_per_account_type() {
        let student = nav_items_for(AccountType::Student);
        assert_eq!(student[0].path, "/dashboard");
        let org = nav_items_for(AccountType::Organization);
        assert_eq!(org[0].path, "/admin");
        assert!(org.iter().any(|i| i.path == "/dashboard/communication"));
    }
}
