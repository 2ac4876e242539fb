//! FAQ accordion. Items are independent: opening one never closes another.

use dioxus::prelude::*;

use crate::icons::{FaChevronDown, FaChevronUp};
use crate::Icon;

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Value of `aria-expanded` for a header.
pub fn aria_expanded(expanded: bool) -> &'static str {
    if expanded {
        "true"
    } else {
        "false"
    }
}

#[component]
pub fn FaqItem(question: String, answer: String, #[props(default)] default_open: bool) -> Element {
    let mut expanded = use_signal(|| default_open);

    rsx! {
        div {
            class: "border-b border-neutral-200",
            button {
                class: "flex w-full items-center justify-between py-4 text-left font-medium text-neutral-900",
                "aria-expanded": aria_expanded(expanded()),
                onclick: move |_| expanded.set(!expanded()),
                span { "{question}" }
                if expanded() {
                    Icon { icon: FaChevronUp, width: 14, height: 14 }
                } else {
                    Icon { icon: FaChevronDown, width: 14, height: 14 }
                }
            }
            if expanded() {
                div { class: "pb-4 text-sm text-neutral-600", "{answer}" }
            }
        }
    }
}

#[component]
pub fn FaqList(entries: Vec<FaqEntry>, #[props(default)] open_first: bool) -> Element {
    rsx! {
        div {
            class: "mx-auto max-w-3xl px-6",
            for (i, entry) in entries.iter().enumerate() {
                FaqItem {
                    key: "{entry.question}",
                    question: "{entry.question}",
                    answer: "{entry.answer}",
                    default_open: open_first && i == 0,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::{ElementId, Mutation, NoOpMutations};
    use dioxus_html::{set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};
    use std::any::Any;
    use std::rc::Rc;

    const FIRST: &str = "Refunds are issued within a week.";
    const SECOND: &str = "Yes, any student email works.";

    fn two_items() -> Element {
        rsx! {
            FaqItem { question: "Can I get a refund?", answer: "{FIRST}", default_open: true }
            FaqItem { question: "Can I sign up with a school email?", answer: "{SECOND}" }
        }
    }

    /// Mount `two_items` and return the dom plus the header buttons in order.
    fn mount() -> (VirtualDom, Vec<ElementId>) {
        set_event_converter(Box::new(SerializedHtmlEventConverter));
        let mut dom = VirtualDom::new(two_items);
        let edits = dom.rebuild_to_vec();
        let headers = edits
            .edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "click" => Some(*id),
                _ => None,
            })
            .collect();
        (dom, headers)
    }

    fn click(dom: &mut VirtualDom, header: ElementId) {
        let event = Event::new(
            Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
            true,
        );
        dom.runtime().handle_event("click", event, header);
        dom.render_immediate(&mut NoOpMutations);
    }

    #[test]
    fn test_aria_expanded() {
        assert_eq!(aria_expanded(true), "true");
        assert_eq!(aria_expanded(false), "false");
    }

    #[test]
    fn test_items_start_from_default_open() {
        let (dom, headers) = mount();
        assert_eq!(headers.len(), 2);

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(FIRST));
        assert!(!html.contains(SECOND));
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains(r#"aria-expanded="false""#));
    }

    #[test]
    fn test_clicking_a_header_toggles_only_that_item() {
        let (mut dom, headers) = mount();

        // Opening the second leaves the first open
        click(&mut dom, headers[1]);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(FIRST));
        assert!(html.contains(SECOND));
        assert!(!html.contains(r#"aria-expanded="false""#));

        // Closing the first leaves the second open
        click(&mut dom, headers[0]);
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains(FIRST));
        assert!(html.contains(SECOND));

        click(&mut dom, headers[1]);
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains(FIRST));
        assert!(!html.contains(SECOND));
        assert!(!html.contains(r#"aria-expanded="true""#));
    }
}
