//! Page transition wrapper that masks the first paint of a view.

use std::time::Duration;

use dioxus::prelude::*;

/// Delay between mount and the content becoming visible.
pub const TRANSITION_DELAY: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionPhase {
    #[default]
    Hidden,
    Visible,
}

impl TransitionPhase {
    pub fn class(self) -> &'static str {
        match self {
            TransitionPhase::Hidden => "opacity-0",
            TransitionPhase::Visible => "opacity-100",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TransitionPhase::Hidden => "hidden",
            TransitionPhase::Visible => "visible",
        }
    }
}

/// Platform sleep: `gloo-timers` in the browser, tokio elsewhere.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Hides `children` until `delay_ms` after mount, then fades them in once.
///
/// The timer task belongs to this component's scope, so unmounting before it
/// fires drops it without touching state.
#[component]
pub fn PageTransition(
    #[props(default = TRANSITION_DELAY.as_millis() as u64)] delay_ms: u64,
    children: Element,
) -> Element {
    let mut phase = use_signal(TransitionPhase::default);

    use_effect(move || {
        spawn(async move {
            sleep(Duration::from_millis(delay_ms)).await;
            phase.set(TransitionPhase::Visible);
        });
    });

    rsx! {
        div {
            class: "transition-opacity duration-300 {phase().class()}",
            "data-phase": phase().name(),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::NoOpMutations;
    use std::time::Instant;

    const HIDDEN: &str = r#"data-phase="hidden""#;
    const VISIBLE: &str = r#"data-phase="visible""#;

    fn delayed_page() -> Element {
        rsx! {
            PageTransition { delay_ms: 20, p { "Dashboard" } }
        }
    }

    fn unmounted_before_delay() -> Element {
        let mut shown = use_signal(|| true);
        use_hook(move || {
            spawn(async move {
                sleep(Duration::from_millis(5)).await;
                shown.set(false);
            })
        });

        rsx! {
            if shown() {
                PageTransition { delay_ms: 50, p { "Dashboard" } }
            } else {
                p { "Signed out" }
            }
        }
    }

    /// Drive the dom until `done` holds for the rendered html or `limit` passes.
    async fn run_until(dom: &mut VirtualDom, limit: Duration, done: impl Fn(&str) -> bool) -> String {
        let _ = tokio::time::timeout(limit, async {
            loop {
                dom.wait_for_work().await;
                dom.render_immediate(&mut NoOpMutations);
                if done(&dioxus_ssr::render(dom)) {
                    break;
                }
            }
        })
        .await;
        dioxus_ssr::render(dom)
    }

    #[test]
    fn test_phase_classes() {
        assert_eq!(TransitionPhase::default(), TransitionPhase::Hidden);
        assert_eq!(TransitionPhase::Hidden.class(), "opacity-0");
        assert_eq!(TransitionPhase::Visible.class(), "opacity-100");
    }

    #[test]
    fn test_default_delay() {
        assert_eq!(TRANSITION_DELAY, Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_sleep_waits_for_the_delay() {
        let start = Instant::now();
        sleep(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_content_becomes_visible_after_delay() {
        let mut dom = VirtualDom::new(delayed_page);
        dom.rebuild_in_place();
        let start = Instant::now();

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(HIDDEN));
        assert!(html.contains("opacity-0"));
        assert!(html.contains("Dashboard"));

        let html = run_until(&mut dom, Duration::from_secs(2), |html| html.contains(VISIBLE)).await;
        assert!(html.contains(VISIBLE), "never became visible: {html}");
        assert!(html.contains("opacity-100"));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_unmount_before_delay_drops_the_timer() {
        let mut dom = VirtualDom::new(unmounted_before_delay);
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains(HIDDEN));

        // Past the transition delay: the timer must not have touched anything
        let html = run_until(&mut dom, Duration::from_millis(150), |_| false).await;
        assert!(html.contains("Signed out"));
        assert!(!html.contains("data-phase"));
    }
}
