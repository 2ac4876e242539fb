//! Communication tab view: one panel visible at a time.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CommunicationTab {
    #[default]
    Announcements,
    Messages,
    Discussions,
}

impl CommunicationTab {
    pub const ALL: [CommunicationTab; 3] = [
        CommunicationTab::Announcements,
        CommunicationTab::Messages,
        CommunicationTab::Discussions,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CommunicationTab::Announcements => "Announcements",
            CommunicationTab::Messages => "Messages",
            CommunicationTab::Discussions => "Discussions",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            CommunicationTab::Announcements => "announcements",
            CommunicationTab::Messages => "messages",
            CommunicationTab::Discussions => "discussions",
        }
    }

    pub fn empty_text(self) -> &'static str {
        match self {
            CommunicationTab::Announcements => "No announcements yet.",
            CommunicationTab::Messages => "Your inbox is empty.",
            CommunicationTab::Discussions => "No discussions have been started.",
        }
    }
}

#[component]
pub fn CommunicationTabs(#[props(default)] initial: CommunicationTab) -> Element {
    let mut active = use_signal(|| initial);

    rsx! {
        div {
            class: "rounded-xl border border-neutral-200 bg-white",
            div {
                class: "flex border-b border-neutral-200",
                role: "tablist",
                for tab in CommunicationTab::ALL {
                    button {
                        key: "{tab.id()}",
                        id: "tab-{tab.id()}",
                        role: "tab",
                        "aria-selected": if active() == tab { "true" } else { "false" },
                        "aria-controls": "panel-{tab.id()}",
                        class: if active() == tab {
                            "border-b-2 border-indigo-600 px-4 py-3 text-sm font-medium text-indigo-600"
                        } else {
                            "px-4 py-3 text-sm text-neutral-500 hover:text-neutral-800"
                        },
                        onclick: move |_| active.set(tab),
                        "{tab.label()}"
                    }
                }
            }
            div {
                id: "panel-{active().id()}",
                role: "tabpanel",
                "aria-labelledby": "tab-{active().id()}",
                class: "p-6 text-sm text-neutral-600",
                "{active().empty_text()}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab() {
        assert_eq!(CommunicationTab::default(), CommunicationTab::Announcements);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: std::collections::HashSet<_> = CommunicationTab::ALL.iter().map(|tab| tab.id()).collect();
        assert_eq!(ids.len(), CommunicationTab::ALL.len());
    }
}
