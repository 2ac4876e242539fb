//! Browser bindings for the scroll reveal: DOM query + `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{ElementSource, IntersectionSample, IntersectionWatcher, RevealElement, RevealTracker};

impl RevealElement for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }
}

/// Queries the current document.
struct DocumentSource;

impl ElementSource for DocumentSource {
    type Element = Element;

    fn query(&self, marker: &str) -> Vec<Element> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let Ok(nodes) = document.query_selector_all(&format!(".{marker}")) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

impl IntersectionWatcher<Element> for IntersectionObserver {
    fn observe(&self, element: &Element) {
        IntersectionObserver::observe(self, element);
    }

    fn unobserve(&self, element: &Element) {
        IntersectionObserver::unobserve(self, element);
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// A live activation. Dropping it tears the observer down.
struct ActiveReveal {
    tracker: Rc<RefCell<RevealTracker<Element>>>,
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl ActiveReveal {
    fn start(threshold: f64) -> Option<Self> {
        let tracker = Rc::new(RefCell::new(RevealTracker::new(threshold)));

        let callback_tracker = tracker.clone();
        let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            let mut tracker = callback_tracker.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let sample = IntersectionSample {
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio(),
                };
                if tracker.on_intersection(&entry.target(), sample) && tracker.pending() == 0 {
                    tracing::debug!("Scroll reveal complete");
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(tracker.borrow().threshold()));
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                tracing::warn!("IntersectionObserver unavailable: {:?}", e);
                return None;
            }
        };

        tracker.borrow_mut().activate(&DocumentSource, &observer);
        if tracker.borrow().is_empty() {
            tracing::debug!("No {} elements on this page", super::MARKER_CLASS);
        }

        Some(Self {
            tracker,
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ActiveReveal {
    fn drop(&mut self) {
        self.tracker.borrow_mut().teardown(&self.observer);
        self.observer.disconnect();
    }
}

pub(super) fn use_dom_reveal(threshold: f64) {
    let slot = use_hook(|| Rc::new(RefCell::new(None::<ActiveReveal>)));

    let effect_slot = slot.clone();
    use_effect(use_reactive((&threshold,), move |(threshold,)| {
        // Tear down the previous activation before capturing again
        effect_slot.borrow_mut().take();
        let next = ActiveReveal::start(threshold);
        *effect_slot.borrow_mut() = next;
    }));

    use_drop(move || {
        slot.borrow_mut().take();
    });
}
