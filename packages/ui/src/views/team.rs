use dioxus::prelude::*;

use super::content::TEAM;
use crate::components::cards::ProfileCard;
use crate::components::hero::Hero;

#[component]
pub fn TeamView() -> Element {
    rsx! {
        Hero {
            title: "Meet the team",
            subtitle: "The people building Campus.",
        }
        section {
            class: "mx-auto grid max-w-5xl gap-6 px-6 py-12 sm:grid-cols-2 lg:grid-cols-4",
            for person in TEAM.iter() {
                ProfileCard { key: "{person.name}", name: "{person.name}", role: "{person.role}" }
            }
        }
    }
}
