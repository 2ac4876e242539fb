use dioxus::prelude::*;

use ui::use_auth;
use ui::use_client_settings;
use ui::views::{
    CommunicationView, FaqView, HomeView, LeadershipView, NotFoundView, OrganizationOverviewView,
    PricingView, StudentOverviewView, TeamView,
};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let settings = use_client_settings();
    rsx! {
        HomeView { reveal_threshold: settings().reveal_threshold }
    }
}

#[component]
pub fn Team() -> Element {
    rsx! { TeamView {} }
}

#[component]
pub fn Leadership() -> Element {
    rsx! { LeadershipView {} }
}

#[component]
pub fn Pricing() -> Element {
    rsx! { PricingView {} }
}

#[component]
pub fn Faq() -> Element {
    rsx! { FaqView {} }
}

#[component]
pub fn StudentDashboard() -> Element {
    let auth = use_auth();
    rsx! { StudentOverviewView { user: auth().user } }
}

#[component]
pub fn OrganizationDashboard() -> Element {
    let auth = use_auth();
    rsx! { OrganizationOverviewView { user: auth().user } }
}

#[component]
pub fn Communication() -> Element {
    rsx! { CommunicationView {} }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    let path = format!("/{}", segments.join("/"));

    rsx! {
        NotFoundView {
            path,
            on_home: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}
