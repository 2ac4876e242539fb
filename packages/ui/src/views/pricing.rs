use dioxus::prelude::*;

use super::content::plans;
use crate::components::hero::Hero;
use crate::components::pricing::PricingTable;

#[component]
pub fn PricingView() -> Element {
    rsx! {
        Hero {
            title: "Pricing",
            subtitle: "Free for students. Flexible for organizations.",
        }
        section { class: "py-12", PricingTable { plans: plans() } }
    }
}
