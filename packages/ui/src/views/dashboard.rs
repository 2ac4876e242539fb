use api::UserInfo;
use dioxus::prelude::*;

use crate::components::cards::StatCard;

/// Student home area.
#[component]
pub fn StudentOverviewView(user: Option<UserInfo>) -> Element {
    let greeting = user.as_ref().map(|u| u.display_name().to_string()).unwrap_or_default();

    rsx! {
        div {
            class: "space-y-6 p-8",
            h1 { class: "text-2xl font-bold", "Welcome back, {greeting}" }
            div {
                class: "grid gap-4 sm:grid-cols-3",
                StatCard { label: "Due this week", value: "4" }
                StatCard { label: "Study hours", value: "12" }
                StatCard { label: "Unread announcements", value: "2" }
            }
        }
    }
}

/// Organization admin area.
#[component]
pub fn OrganizationOverviewView(user: Option<UserInfo>) -> Element {
    let name = user.as_ref().map(|u| u.display_name().to_string()).unwrap_or_default();

    rsx! {
        div {
            class: "space-y-6 p-8",
            h1 { class: "text-2xl font-bold", "{name}" }
            p { class: "text-neutral-600", "Manage members and broadcast updates." }
            div {
                class: "grid gap-4 sm:grid-cols-3",
                StatCard { label: "Members", value: "128" }
                StatCard { label: "Announcements sent", value: "9" }
                StatCard { label: "Open discussions", value: "3" }
            }
        }
    }
}
