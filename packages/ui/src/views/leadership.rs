use dioxus::prelude::*;

use super::content::LEADERS;
use crate::components::cards::ProfileCard;
use crate::components::hero::Hero;

#[component]
pub fn LeadershipView() -> Element {
    rsx! {
        Hero {
            title: "Leadership",
            subtitle: "Guiding Campus and the students who rely on it.",
        }
        section {
            class: "mx-auto grid max-w-4xl gap-8 px-6 py-12 md:grid-cols-2",
            for person in LEADERS.iter() {
                ProfileCard {
                    key: "{person.name}",
                    name: "{person.name}",
                    role: "{person.role}",
                    bio: "{person.bio}",
                }
            }
        }
    }
}
