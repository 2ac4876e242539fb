use dioxus::prelude::*;

/// Top navigation bar. Platform packages pass router links as children.
#[component]
pub fn Navbar(#[props(default = "Campus".to_string())] brand: String, children: Element) -> Element {
    rsx! {
        header {
            class: "sticky top-0 z-10 border-b border-neutral-200 bg-white/90 backdrop-blur",
            nav {
                class: "mx-auto flex max-w-6xl items-center justify-between px-6 py-4",
                span { class: "text-lg font-bold text-indigo-700", "{brand}" }
                div { class: "flex items-center gap-6 text-sm text-neutral-700", {children} }
            }
        }
    }
}

#[component]
pub fn Footer(#[props(default = "Campus".to_string())] brand: String) -> Element {
    rsx! {
        footer {
            class: "border-t border-neutral-200 py-8 text-center text-sm text-neutral-500",
            "© {brand}. Built for students and the organizations that support them."
        }
    }
}
