use dioxus::prelude::*;

use ui::{use_auth, use_client_settings, DashboardShell, PageTransition, ProtectedRoute, Redirect};

use super::route_for_path;
use crate::{required_account_types, Route};

/// Signed-in area: guard, then the page transition, then the sidebar shell.
#[component]
pub fn DashboardLayout() -> Element {
    let auth = use_auth();
    let settings = use_client_settings();
    let route = use_route::<Route>();
    let nav = use_navigator();

    let requested = route.to_string();
    let required = required_account_types(&route).map(<[_]>::to_vec);

    rsx! {
        ProtectedRoute {
            session: auth(),
            requested: requested.clone(),
            required: required,
            on_redirect: move |redirect: Redirect| {
                let target = match redirect {
                    Redirect::Login { from } => Route::Login { redirect: from },
                    Redirect::Home(account_type) => Route::home_for(account_type),
                };
                nav.replace(target);
            },
            PageTransition {
                delay_ms: settings().transition_delay_ms,
                DashboardShell {
                    user: auth().user,
                    active_path: requested,
                    on_navigate: move |path: String| {
                        nav.push(route_for_path(&path));
                    },
                    on_logout: move |_| {
                        nav.replace(Route::Home {});
                    },
                    Outlet::<Route> {}
                }
            }
        }
    }
}
