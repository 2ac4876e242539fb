//! # Scroll reveal
//!
//! Elements carrying [`MARKER_CLASS`] start hidden and slightly offset, and
//! fade in the first time they become visible enough. Each element is revealed
//! at most once; later scrolling never hides it again.
//!
//! [`RevealTracker`] holds the per-element state machine and talks to the page
//! through two capabilities:
//!
//! | Trait | Browser implementation | Tests |
//! |-------|------------------------|-------|
//! | [`ElementSource`] | `document.querySelectorAll(".marker")` | in-memory fake |
//! | [`IntersectionWatcher`] | `IntersectionObserver` | recording fake |
//!
//! The marker set is captured once, at activation. Elements that gain the
//! marker afterwards are not observed. [`use_scroll_reveal`] wires the tracker
//! into a component's lifecycle.

#[cfg(target_arch = "wasm32")]
mod dom;

use dioxus::prelude::*;

/// Class that opts an element into the reveal.
pub const MARKER_CLASS: &str = "animate-on-scroll";
/// Hidden/offset state applied while an element waits to be revealed.
pub const PENDING_CLASSES: [&str; 2] = ["opacity-0", "translate-y-8"];
/// Transition classes applied alongside the pending state.
pub const TRANSITION_CLASSES: [&str; 3] = ["transition-all", "duration-700", "ease-out"];
/// Animation applied on reveal.
pub const REVEALED_CLASS: &str = "animate-fade-in-up";
/// Visible fraction required to reveal, unless the caller overrides it.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

// Browsers report ratios a hair under the configured threshold when crossing it.
const RATIO_TOLERANCE: f64 = 1e-3;

/// A handle on something whose CSS classes can be changed.
pub trait RevealElement: Clone + PartialEq {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

/// Finds the elements that carry a marker class.
pub trait ElementSource {
    type Element: RevealElement;

    fn query(&self, marker: &str) -> Vec<Self::Element>;
}

/// Reports visibility changes for observed elements.
pub trait IntersectionWatcher<E> {
    fn observe(&self, element: &E);
    fn unobserve(&self, element: &E);
}

/// One visibility report for an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    /// Visible fraction of the element, `0.0..=1.0`.
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn crosses(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio + RATIO_TOLERANCE >= threshold
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

/// Per-element reveal state for one activation.
#[derive(Debug)]
pub struct RevealTracker<E> {
    threshold: f64,
    tracked: Vec<(E, RevealState)>,
}

impl<E: RevealElement> RevealTracker<E> {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: if threshold.is_finite() {
                threshold.clamp(0.0, 1.0)
            } else {
                DEFAULT_THRESHOLD
            },
            tracked: Vec::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Capture the current marker elements, mark them pending and start
    /// watching them. Elements revealed by an earlier activation are skipped.
    /// Returns how many elements were captured.
    pub fn activate<S, W>(&mut self, source: &S, watcher: &W) -> usize
    where
        S: ElementSource<Element = E>,
        W: IntersectionWatcher<E>,
    {
        for element in source.query(MARKER_CLASS) {
            if element.has_class(REVEALED_CLASS) || self.tracked.iter().any(|(e, _)| *e == element) {
                continue;
            }
            for class in PENDING_CLASSES.iter().chain(TRANSITION_CLASSES.iter()) {
                element.add_class(class);
            }
            watcher.observe(&element);
            self.tracked.push((element, RevealState::Pending));
        }
        tracing::debug!("Scroll reveal watching {} elements", self.tracked.len());
        self.tracked.len()
    }

    /// Apply a visibility report. Returns `true` when this report revealed
    /// the element.
    pub fn on_intersection(&mut self, element: &E, sample: IntersectionSample) -> bool {
        let threshold = self.threshold;
        let Some((el, state)) = self.tracked.iter_mut().find(|(e, _)| e == element) else {
            return false;
        };
        if *state == RevealState::Revealed || !sample.crosses(threshold) {
            return false;
        }
        for class in PENDING_CLASSES {
            el.remove_class(class);
        }
        el.add_class(REVEALED_CLASS);
        *state = RevealState::Revealed;
        true
    }

    /// Stop watching every captured element.
    pub fn teardown<W: IntersectionWatcher<E>>(&mut self, watcher: &W) {
        for (element, _) in self.tracked.drain(..) {
            watcher.unobserve(&element);
        }
    }

    pub fn state_of(&self, element: &E) -> Option<RevealState> {
        self.tracked
            .iter()
            .find(|(e, _)| e == element)
            .map(|(_, state)| *state)
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.tracked
            .iter()
            .filter(|(_, state)| *state == RevealState::Pending)
            .count()
    }
}

/// Reveal every [`MARKER_CLASS`] element under the current page once it is
/// `threshold` visible. Tears down on unmount and re-captures when the
/// threshold changes. No-op outside the browser.
pub fn use_scroll_reveal(threshold: f64) {
    #[cfg(target_arch = "wasm32")]
    dom::use_dom_reveal(threshold);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = threshold;
}

/// Wraps `children` in a block that takes part in the scroll reveal.
#[component]
pub fn RevealOnScroll(#[props(default = "".to_string())] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "{MARKER_CLASS} {class}",
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    #[derive(Clone, Debug)]
    struct FakeElement {
        id: u32,
        classes: Rc<RefCell<BTreeSet<String>>>,
    }

    impl FakeElement {
        fn new(id: u32, classes: &[&str]) -> Self {
            Self {
                id,
                classes: Rc::new(RefCell::new(classes.iter().map(|c| c.to_string()).collect())),
            }
        }

        fn has(&self, class: &str) -> bool {
            self.classes.borrow().contains(class)
        }
    }

    impl PartialEq for FakeElement {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl RevealElement for FakeElement {
        fn has_class(&self, class: &str) -> bool {
            self.has(class)
        }

        fn add_class(&self, class: &str) {
            self.classes.borrow_mut().insert(class.to_string());
        }

        fn remove_class(&self, class: &str) {
            self.classes.borrow_mut().remove(class);
        }
    }

    #[derive(Default)]
    struct FakeSource {
        elements: RefCell<Vec<FakeElement>>,
    }

    impl FakeSource {
        fn push(&self, element: FakeElement) {
            self.elements.borrow_mut().push(element);
        }
    }

    impl ElementSource for FakeSource {
        type Element = FakeElement;

        fn query(&self, marker: &str) -> Vec<FakeElement> {
            self.elements
                .borrow()
                .iter()
                .filter(|e| e.has(marker))
                .cloned()
                .collect()
        }
    }

    #[derive(Default)]
    struct FakeWatcher {
        observed: RefCell<Vec<u32>>,
    }

    impl IntersectionWatcher<FakeElement> for FakeWatcher {
        fn observe(&self, element: &FakeElement) {
            self.observed.borrow_mut().push(element.id);
        }

        fn unobserve(&self, element: &FakeElement) {
            self.observed.borrow_mut().retain(|id| *id != element.id);
        }
    }

    fn visible(ratio: f64) -> IntersectionSample {
        IntersectionSample {
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }

    fn page() -> (FakeSource, FakeElement, FakeElement) {
        let source = FakeSource::default();
        let a = FakeElement::new(1, &[MARKER_CLASS, "card"]);
        let b = FakeElement::new(2, &[MARKER_CLASS]);
        source.push(a.clone());
        source.push(b.clone());
        source.push(FakeElement::new(3, &["unmarked"]));
        (source, a, b)
    }

    #[test]
    fn test_activation_marks_pending_and_observes() {
        let (source, a, b) = page();
        let watcher = FakeWatcher::default();
        let mut tracker = RevealTracker::new(DEFAULT_THRESHOLD);

        assert_eq!(tracker.activate(&source, &watcher), 2);
        assert_eq!(*watcher.observed.borrow(), vec![1, 2]);
        for el in [&a, &b] {
            for class in PENDING_CLASSES.iter().chain(TRANSITION_CLASSES.iter()) {
                assert!(el.has(class), "missing {class}");
            }
            assert_eq!(tracker.state_of(el), Some(RevealState::Pending));
        }
    }

    #[test]
    fn test_reveal_once_past_threshold() {
        let (source, a, b) = page();
        let watcher = FakeWatcher::default();
        let mut tracker = RevealTracker::new(0.1);
        tracker.activate(&source, &watcher);

        // Below threshold: nothing changes
        assert!(!tracker.on_intersection(&a, visible(0.05)));
        assert!(a.has("opacity-0"));

        assert!(tracker.on_intersection(&a, visible(0.1)));
        assert!(!a.has("opacity-0"));
        assert!(!a.has("translate-y-8"));
        assert!(a.has(REVEALED_CLASS));
        assert!(a.has("card"));
        assert_eq!(tracker.state_of(&a), Some(RevealState::Revealed));
        assert_eq!(tracker.state_of(&b), Some(RevealState::Pending));
        assert_eq!(tracker.pending(), 1);

        // Still observed: revealed elements are only released at teardown
        assert!(watcher.observed.borrow().contains(&1));
    }

    #[test]
    fn test_revealed_element_stays_revealed_after_leaving_viewport() {
        let (source, a, _) = page();
        let watcher = FakeWatcher::default();
        let mut tracker = RevealTracker::new(0.1);
        tracker.activate(&source, &watcher);

        tracker.on_intersection(&a, visible(0.6));
        assert!(!tracker.on_intersection(&a, visible(0.0)));
        assert!(!tracker.on_intersection(&a, visible(0.9)));
        assert!(!a.has("opacity-0"));
        assert!(!a.has("translate-y-8"));
        assert_eq!(tracker.state_of(&a), Some(RevealState::Revealed));
    }

    #[test]
    fn test_non_intersecting_sample_never_reveals() {
        let (source, a, _) = page();
        let watcher = FakeWatcher::default();
        let mut tracker = RevealTracker::new(0.0);
        tracker.activate(&source, &watcher);

        let sample = IntersectionSample {
            is_intersecting: false,
            ratio: 0.0,
        };
        assert!(!tracker.on_intersection(&a, sample));
        assert!(tracker.on_intersection(&a, visible(0.01)));
    }

    #[test]
    fn test_late_marker_elements_are_not_observed() {
        let (source, _, _) = page();
        let watcher = FakeWatcher::default();
        let mut tracker = RevealTracker::new(0.1);
        tracker.activate(&source, &watcher);

        let late = FakeElement::new(9, &[MARKER_CLASS]);
        source.push(late.clone());

        assert!(!late.has("opacity-0"));
        assert!(!tracker.on_intersection(&late, visible(1.0)));
        assert!(!late.has(REVEALED_CLASS));
        assert_eq!(tracker.state_of(&late), None);
        assert!(!watcher.observed.borrow().contains(&9));
    }

    #[test]
    fn test_teardown_unobserves_everything() {
        let (source, a, _) = page();
        let watcher = FakeWatcher::default();
        let mut tracker = RevealTracker::new(0.1);
        tracker.activate(&source, &watcher);
        tracker.on_intersection(&a, visible(0.5));

        tracker.teardown(&watcher);
        assert!(watcher.observed.borrow().is_empty());
        assert!(tracker.is_empty());
        // Revealed element keeps its final classes
        assert!(a.has(REVEALED_CLASS));
    }

    #[test]
    fn test_reactivation_skips_revealed_elements() {
        let (source, a, b) = page();
        let watcher = FakeWatcher::default();
        let mut tracker = RevealTracker::new(0.1);
        tracker.activate(&source, &watcher);
        tracker.on_intersection(&a, visible(0.5));
        tracker.teardown(&watcher);

        let mut next = RevealTracker::new(0.3);
        assert_eq!(next.activate(&source, &watcher), 1);
        assert!(!a.has("opacity-0"));
        assert_eq!(next.state_of(&a), None);
        assert_eq!(next.state_of(&b), Some(RevealState::Pending));
    }

    #[test]
    fn test_no_marker_elements_is_a_no_op() {
        let source = FakeSource::default();
        source.push(FakeElement::new(1, &["plain"]));
        let watcher = FakeWatcher::default();
        let mut tracker = RevealTracker::new(DEFAULT_THRESHOLD);

        assert_eq!(tracker.activate(&source, &watcher), 0);
        assert!(watcher.observed.borrow().is_empty());
        tracker.teardown(&watcher);
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(RevealTracker::<FakeElement>::new(2.0).threshold(), 1.0);
        assert_eq!(RevealTracker::<FakeElement>::new(-1.0).threshold(), 0.0);
        assert_eq!(RevealTracker::<FakeElement>::new(f64::NAN).threshold(), DEFAULT_THRESHOLD);
    }
}
