use api::UserInfo;
use dioxus::prelude::*;

use ui::post_login_destination;
use ui::views::LoginView;

use super::route_for_path;

/// `/login?redirect=<path>`. Sends the user on once a session exists.
#[component]
pub fn Login(redirect: String) -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView {
            on_signed_in: move |user: UserInfo| {
                let destination = post_login_destination(&redirect, &user);
                tracing::debug!("Signed in, continuing to {}", destination);
                nav.replace(route_for_path(&destination));
            },
        }
    }
}
