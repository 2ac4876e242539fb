use dioxus::prelude::*;

/// Feature highlight with a title and a short description.
#[component]
pub fn FeatureCard(title: String, description: String, #[props(default)] class: String) -> Element {
    rsx! {
        div {
            class: "rounded-xl border border-neutral-200 bg-white p-6 shadow-sm {class}",
            h3 { class: "mb-2 text-lg font-semibold text-neutral-900", "{title}" }
            p { class: "text-sm text-neutral-600", "{description}" }
        }
    }
}

/// A single figure with its label, used on dashboard overviews.
#[component]
pub fn StatCard(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "rounded-lg border border-neutral-200 bg-white p-4",
            p { class: "text-xs uppercase tracking-wide text-neutral-500", "{label}" }
            p { class: "mt-1 text-2xl font-semibold text-neutral-900", "{value}" }
        }
    }
}

/// Person card for the team and leadership pages.
#[component]
pub fn ProfileCard(
    name: String,
    role: String,
    #[props(default)] bio: String,
) -> Element {
    let initials: String = name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect();

    rsx! {
        div {
            class: "flex flex-col items-center rounded-xl border border-neutral-200 bg-white p-6 text-center",
            div {
                class: "mb-3 flex h-16 w-16 items-center justify-center rounded-full bg-indigo-100 text-lg font-semibold text-indigo-700",
                "{initials}"
            }
            h3 { class: "font-semibold text-neutral-900", "{name}" }
            p { class: "text-sm text-indigo-600", "{role}" }
            if !bio.is_empty() {
                p { class: "mt-2 text-sm text-neutral-600", "{bio}" }
            }
        }
    }
}
