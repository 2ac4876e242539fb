//! Static page copy.

use crate::components::faq::FaqEntry;
use crate::components::pricing::PricingPlan;

pub(crate) struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub(crate) struct Person {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

pub(crate) const FEATURES: &[Feature] = &[
    Feature {
        title: "Plan your week",
        description: "Deadlines, classes and study blocks in one calendar-aware dashboard.",
    },
    Feature {
        title: "Stay in the loop",
        description: "Announcements and messages from your school, without another inbox.",
    },
    Feature {
        title: "Built for organizations",
        description: "Schools and clubs manage members and broadcast updates from one place.",
    },
];

pub(crate) fn plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            name: "Student",
            description: "Everything an individual student needs.",
            monthly_price: Some(0),
            features: &["Personal dashboard", "Communication hub", "Unlimited study plans"],
            highlighted: false,
            cta_label: "Get started",
            cta_href: "/login",
        },
        PricingPlan {
            name: "Student Plus",
            description: "Extra tools for heavy course loads.",
            monthly_price: Some(6),
            features: &["Everything in Student", "Priority support", "Progress insights"],
            highlighted: true,
            cta_label: "Upgrade",
            cta_href: "/login",
        },
        PricingPlan {
            name: "Organization",
            description: "For schools, departments and student clubs.",
            monthly_price: None,
            features: &["Admin area", "Member management", "Broadcast announcements"],
            highlighted: false,
            cta_label: "Talk to us",
            cta_href: "/team",
        },
    ]
}

pub(crate) fn faqs() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Is Campus free for students?",
            answer: "Yes. The Student plan is free; Student Plus adds optional extras.",
        },
        FaqEntry {
            question: "Can my school manage accounts for me?",
            answer: "Organizations get an admin area to invite members and share announcements.",
        },
        FaqEntry {
            question: "Does the dashboard remember my layout?",
            answer: "Yes. Collapsing the sidebar is remembered on this device.",
        },
    ]
}

pub(crate) const TEAM: &[Person] = &[
    Person { name: "Priya Raman", role: "Product", bio: "" },
    Person { name: "Jonas Weber", role: "Engineering", bio: "" },
    Person { name: "Amara Okafor", role: "Student Success", bio: "" },
    Person { name: "Luis Ortega", role: "Design", bio: "" },
];

pub(crate) const LEADERS: &[Person] = &[
    Person {
        name: "Dana Whitfield",
        role: "Chief Executive Officer",
        bio: "Former high-school counselor who started Campus to give students one place to plan.",
    },
    Person {
        name: "Marcus Lee",
        role: "Chief Technology Officer",
        bio: "Leads the platform and keeps student data private by default.",
    },
];
