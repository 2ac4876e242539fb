use dioxus::prelude::*;

use ui::{use_auth, Footer, Navbar};

use crate::Route;

/// Public pages: top navigation, content, footer.
#[component]
pub fn SiteLayout() -> Element {
    let auth = use_auth();
    let account_link = match auth().account_type() {
        Some(account_type) => rsx! {
            Link { class: "rounded-lg bg-indigo-600 px-4 py-2 font-medium text-white", to: Route::home_for(account_type), "Dashboard" }
        },
        None => rsx! {
            Link { class: "rounded-lg bg-indigo-600 px-4 py-2 font-medium text-white", to: Route::Login { redirect: String::new() }, "Sign in" }
        },
    };

    rsx! {
        div {
            class: "flex min-h-screen flex-col bg-white text-neutral-900",
            Navbar {
                Link { to: Route::Home {}, "Home" }
                Link { to: Route::Team {}, "Team" }
                Link { to: Route::Leadership {}, "Leadership" }
                Link { to: Route::Pricing {}, "Pricing" }
                Link { to: Route::Faq {}, "FAQ" }
                {account_link}
            }
            main {
                class: "flex-1",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
