use dioxus::prelude::*;

/// Full-width banner with a headline, supporting copy and a call to action.
///
/// `children` render below the call to action (secondary links, badges).
#[component]
pub fn Hero(
    title: String,
    subtitle: String,
    #[props(default)] cta_label: String,
    #[props(default)] cta_href: String,
    #[props(default)] eyebrow: String,
    children: Element,
) -> Element {
    rsx! {
        section {
            id: "hero",
            class: "bg-gradient-to-b from-indigo-50 to-white px-6 py-24 text-center",
            if !eyebrow.is_empty() {
                p { class: "mb-3 text-sm font-semibold uppercase tracking-wide text-indigo-600", "{eyebrow}" }
            }
            h1 { class: "mx-auto max-w-3xl text-4xl font-bold text-neutral-900 sm:text-5xl", "{title}" }
            p { class: "mx-auto mt-4 max-w-2xl text-lg text-neutral-600", "{subtitle}" }
            if !cta_label.is_empty() && !cta_href.is_empty() {
                a {
                    class: "mt-8 inline-block rounded-lg bg-indigo-600 px-6 py-3 font-medium text-white hover:bg-indigo-700",
                    href: "{cta_href}",
                    "{cta_label}"
                }
            }
            {children}
        }
    }
}
