use dioxus::prelude::*;

use crate::components::communication::CommunicationTabs;

#[component]
pub fn CommunicationView() -> Element {
    rsx! {
        div {
            class: "space-y-6 p-8",
            h1 { class: "text-2xl font-bold", "Communication" }
            CommunicationTabs {}
        }
    }
}
