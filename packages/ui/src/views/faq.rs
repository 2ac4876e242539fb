use dioxus::prelude::*;

use super::content::faqs;
use crate::components::faq::FaqList;
use crate::components::hero::Hero;

#[component]
pub fn FaqView() -> Element {
    rsx! {
        Hero {
            title: "Frequently asked questions",
            subtitle: "Can't find an answer? Reach out to the team.",
        }
        section { class: "py-12", FaqList { entries: faqs(), open_first: true } }
    }
}
