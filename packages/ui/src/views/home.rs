use dioxus::prelude::*;

use super::content::{faqs, plans, FEATURES};
use crate::components::cards::FeatureCard;
use crate::components::faq::FaqList;
use crate::components::hero::Hero;
use crate::components::pricing::PricingTable;
use crate::reveal::{use_scroll_reveal, RevealOnScroll, DEFAULT_THRESHOLD};

/// Landing page: hero, features, pricing preview and FAQ, revealed on scroll.
#[component]
pub fn HomeView(#[props(default = DEFAULT_THRESHOLD)] reveal_threshold: f64) -> Element {
    use_scroll_reveal(reveal_threshold);

    rsx! {
        Hero {
            eyebrow: "Student productivity",
            title: "Your semester, organized",
            subtitle: "Campus brings plans, deadlines and school communication into one dashboard.",
            cta_label: "Get started",
            cta_href: "/login",
        }

        section {
            class: "mx-auto grid max-w-6xl gap-6 px-6 py-16 md:grid-cols-3",
            for feature in FEATURES.iter() {
                RevealOnScroll {
                    key: "{feature.title}",
                    FeatureCard { title: "{feature.title}", description: "{feature.description}" }
                }
            }
        }

        RevealOnScroll {
            class: "py-16",
            h2 { class: "mb-10 text-center text-3xl font-bold", "Simple pricing" }
            PricingTable { plans: plans() }
        }

        RevealOnScroll {
            class: "py-16",
            h2 { class: "mb-6 text-center text-3xl font-bold", "Questions" }
            FaqList { entries: faqs() }
        }
    }
}
