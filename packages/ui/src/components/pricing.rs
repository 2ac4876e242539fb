//! Pricing tiers.

use dioxus::prelude::*;

use crate::icons::FaCheck;
use crate::Icon;

/// One pricing tier.
#[derive(Clone, Debug, PartialEq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub description: &'static str,
    /// Monthly price in whole dollars. `None` means custom pricing.
    pub monthly_price: Option<u32>,
    pub features: &'static [&'static str],
    /// Rendered with emphasis as the recommended tier.
    pub highlighted: bool,
    pub cta_label: &'static str,
    pub cta_href: &'static str,
}

impl PricingPlan {
    pub fn price_label(&self) -> String {
        match self.monthly_price {
            None => "Contact us".to_string(),
            Some(0) => "Free".to_string(),
            Some(dollars) => format!("${dollars}"),
        }
    }

    /// Suffix shown after the price, if any.
    pub fn period_label(&self) -> &'static str {
        match self.monthly_price {
            Some(n) if n > 0 => "/month",
            _ => "",
        }
    }
}

#[component]
pub fn PricingTier(plan: PricingPlan) -> Element {
    let card_class = if plan.highlighted {
        "relative flex flex-col rounded-2xl border-2 border-indigo-600 bg-white p-8 shadow-lg"
    } else {
        "relative flex flex-col rounded-2xl border border-neutral-200 bg-white p-8"
    };
    let button_class = if plan.highlighted {
        "mt-8 rounded-lg bg-indigo-600 px-4 py-2 text-center font-medium text-white hover:bg-indigo-700"
    } else {
        "mt-8 rounded-lg border border-indigo-600 px-4 py-2 text-center font-medium text-indigo-600 hover:bg-indigo-50"
    };

    rsx! {
        div {
            class: card_class,
            if plan.highlighted {
                span {
                    class: "absolute -top-3 left-1/2 -translate-x-1/2 rounded-full bg-indigo-600 px-3 py-1 text-xs font-semibold text-white",
                    "Most popular"
                }
            }
            h3 { class: "text-lg font-semibold text-neutral-900", "{plan.name}" }
            p { class: "mt-1 text-sm text-neutral-600", "{plan.description}" }
            p {
                class: "mt-6",
                span { class: "text-4xl font-bold text-neutral-900", "{plan.price_label()}" }
                span { class: "text-sm text-neutral-500", "{plan.period_label()}" }
            }
            ul {
                class: "mt-6 flex-1 space-y-2 text-sm text-neutral-700",
                for feature in plan.features.iter() {
                    li {
                        key: "{feature}",
                        class: "flex items-center gap-2",
                        Icon { icon: FaCheck, width: 12, height: 12 }
                        "{feature}"
                    }
                }
            }
            a { class: button_class, href: plan.cta_href, "{plan.cta_label}" }
        }
    }
}

#[component]
pub fn PricingTable(plans: Vec<PricingPlan>) -> Element {
    rsx! {
        div {
            class: "mx-auto grid max-w-5xl gap-8 px-6 md:grid-cols-3",
            for plan in plans {
                PricingTier { key: "{plan.name}", plan: plan.clone() }
            }
        }
    }
}
