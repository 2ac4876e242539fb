use dioxus::prelude::*;

/// 404 page. `path` is the location that failed to match.
#[component]
pub fn NotFoundView(path: String, on_home: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "flex min-h-[60vh] flex-col items-center justify-center px-6 text-center",
            p { class: "text-sm font-semibold text-indigo-600", "404" }
            h1 { class: "mt-2 text-3xl font-bold text-neutral-900", "Page not found" }
            p { class: "mt-3 text-neutral-600", "Nothing lives at " code { "{path}" } "." }
            button {
                class: "mt-6 rounded-lg bg-indigo-600 px-5 py-2 font-medium text-white hover:bg-indigo-700",
                onclick: move |_| on_home.call(()),
                "Back to home"
            }
        }
    }
}
