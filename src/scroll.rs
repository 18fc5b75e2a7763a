use dioxus::prelude::*;

use crate::dom::SectionSpan;

pub const SCROLLED_THRESHOLD: f64 = 50.0;
pub const HIDE_THRESHOLD: f64 = 200.0;
/// Distance below the viewport top used to decide which section is current.
pub const ACTIVE_OFFSET: f64 = 100.0;
pub const ACTIVE_THROTTLE_MS: f64 = 100.0;
pub const PARALLAX_THROTTLE_MS: f64 = 16.0;
pub const PARALLAX_FACTOR: f64 = 0.5;
/// Height of the fixed navbar.
pub const NAV_OFFSET: f64 = 80.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavbarView {
    pub scrolled: bool,
    pub hidden: bool,
}

impl NavbarView {
    pub fn class(self) -> &'static str {
        if self.scrolled {
            "navbar scrolled"
        } else {
            "navbar"
        }
    }

    pub fn transform(self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NavbarScroll {
    last_scroll_top: f64,
}

impl NavbarScroll {
    pub fn update(&mut self, scroll_top: f64) -> NavbarView {
        let view = NavbarView {
            scrolled: scroll_top > SCROLLED_THRESHOLD,
            hidden: scroll_top > self.last_scroll_top && scroll_top > HIDE_THRESHOLD,
        };
        self.last_scroll_top = scroll_top;
        view
    }
}

/// Returns the id of the section under `scroll_y + ACTIVE_OFFSET`. Sections
/// are checked in order and a later match overrides an earlier one.
pub fn active_section(scroll_y: f64, sections: &[SectionSpan]) -> Option<&str> {
    let position = scroll_y + ACTIVE_OFFSET;
    sections
        .iter()
        .filter(|section| section.contains(position))
        .last()
        .map(|section| section.id.as_str())
}

pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_FACTOR
}

pub fn section_scroll_target(section_top: f64) -> f64 {
    (section_top - NAV_OFFSET).max(0.0)
}

/// Leading-edge rate limiter: the first call runs, later calls are dropped
/// until `limit_ms` has passed. A clock that moves backwards reopens it.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    limit_ms: f64,
    last_run: Option<f64>,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            last_run: None,
        }
    }

    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_run {
            Some(last_run) if now_ms >= last_run && now_ms < last_run + self.limit_ms => false,
            _ => {
                self.last_run = Some(now_ms);
                true
            }
        }
    }
}

#[derive(Clone, Copy)]
pub struct ScrollSignals {
    pub navbar: Signal<NavbarView>,
    pub active: Signal<Option<String>>,
}

/// Tracks navbar styling and the current section from window scroll events.
pub fn use_scroll_tracking() -> ScrollSignals {
    let navbar = use_signal(NavbarView::default);
    let active = use_signal(|| None::<String>);

    #[cfg(target_arch = "wasm32")]
    {
        let mut listener = use_signal(|| None::<crate::dom::Listener>);
        use_effect(move || {
            if listener.peek().is_some() {
                return;
            }
            let mut navbar = navbar;
            let mut active = active;
            let mut tracker = NavbarScroll::default();
            let mut throttle = Throttle::new(ACTIVE_THROTTLE_MS);
            let handler = move |_event: web_sys::Event| {
                let scroll_y = crate::dom::scroll_y();
                let view = tracker.update(scroll_y);
                if *navbar.peek() != view {
                    navbar.set(view);
                }
                if !throttle.ready(crate::dom::now_ms()) {
                    return;
                }
                let spans = crate::dom::section_spans();
                if let Some(id) = active_section(scroll_y, &spans) {
                    let changed = active.peek().as_deref() != Some(id);
                    if changed {
                        active.set(Some(id.to_string()));
                    }
                }
            };
            match crate::dom::window()
                .and_then(|window| crate::dom::Listener::attach(&window, "scroll", handler))
            {
                Ok(attached) => listener.set(Some(attached)),
                Err(err) => tracing::warn!("scroll: {err}"),
            }
        });
        use_drop(move || {
            listener.write().take();
        });
    }

    ScrollSignals { navbar, active }
}

/// Vertical offset for the hero background, refreshed at most every 16 ms.
pub fn use_parallax() -> Signal<f64> {
    let offset = use_signal(|| 0.0f64);

    #[cfg(target_arch = "wasm32")]
    {
        let mut listener = use_signal(|| None::<crate::dom::Listener>);
        use_effect(move || {
            if listener.peek().is_some() {
                return;
            }
            let mut offset = offset;
            let mut throttle = Throttle::new(PARALLAX_THROTTLE_MS);
            let handler = move |_event: web_sys::Event| {
                if throttle.ready(crate::dom::now_ms()) {
                    offset.set(parallax_offset(crate::dom::scroll_y()));
                }
            };
            match crate::dom::window()
                .and_then(|window| crate::dom::Listener::attach(&window, "scroll", handler))
            {
                Ok(attached) => listener.set(Some(attached)),
                Err(err) => tracing::warn!("parallax: {err}"),
            }
        });
        use_drop(move || {
            listener.write().take();
        });
    }

    offset
}

pub fn scroll_to_section(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(section) = crate::dom::element_by_id(id) else {
            tracing::warn!("scroll: no section #{id}");
            return;
        };
        let target = section_scroll_target(f64::from(section.offset_top()));
        if let Err(err) = crate::dom::scroll_to_smooth(target) {
            tracing::warn!("scroll: {err}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn span(id: &str, top: f64, height: f64) -> SectionSpan {
        SectionSpan {
            id: id.to_string(),
            top,
            height,
        }
    }

    fn page() -> Vec<SectionSpan> {
        vec![
            span("home", 0.0, 600.0),
            span("about", 600.0, 400.0),
            span("contact", 1000.0, 500.0),
        ]
    }

    #[test]
    fn active_section_uses_offset_position() {
        let sections = page();
        assert_eq!(active_section(0.0, &sections), Some("home"));
        assert_eq!(active_section(499.0, &sections), Some("home"));
        assert_eq!(active_section(500.0, &sections), Some("about"));
        assert_eq!(active_section(950.0, &sections), Some("contact"));
    }

    #[test]
    fn boundary_matches_exactly_one_section() {
        let sections = page();
        let position = 1000.0;
        let matches = sections
            .iter()
            .filter(|section| section.contains(position))
            .count();
        assert_eq!(matches, 1);
        assert_eq!(active_section(position - ACTIVE_OFFSET, &sections), Some("contact"));
    }

    #[test]
    fn later_overlapping_section_wins() {
        let sections = vec![span("outer", 0.0, 1000.0), span("inner", 200.0, 100.0)];
        assert_eq!(active_section(150.0, &sections), Some("inner"));
        assert_eq!(active_section(400.0, &sections), Some("outer"));
    }

    #[test]
    fn nothing_active_past_the_last_section() {
        assert_eq!(active_section(5_000.0, &page()), None);
        assert_eq!(active_section(0.0, &[]), None);
    }

    #[test]
    fn navbar_scrolled_after_threshold() {
        let mut tracker = NavbarScroll::default();
        assert!(!tracker.update(50.0).scrolled);
        assert!(tracker.update(51.0).scrolled);
        assert!(!tracker.update(0.0).scrolled);
    }

    #[test]
    fn navbar_hides_only_when_scrolling_down_past_threshold() {
        let mut tracker = NavbarScroll::default();
        assert!(!tracker.update(150.0).hidden);
        assert!(tracker.update(250.0).hidden);
        assert!(tracker.update(300.0).hidden);
        assert!(!tracker.update(280.0).hidden);
        assert!(!tracker.update(280.0).hidden);
    }

    #[test]
    fn navbar_view_styles() {
        let view = NavbarView {
            scrolled: true,
            hidden: true,
        };
        assert_eq!(view.class(), "navbar scrolled");
        assert_eq!(view.transform(), "translateY(-100%)");
        assert_eq!(NavbarView::default().transform(), "translateY(0)");
    }

    #[test]
    fn throttle_is_leading_edge() {
        let mut throttle = Throttle::new(100.0);
        assert!(throttle.ready(1_000.0));
        assert!(!throttle.ready(1_050.0));
        assert!(!throttle.ready(1_099.0));
        assert!(throttle.ready(1_100.0));
        assert!(!throttle.ready(1_150.0));
    }

    #[test]
    fn throttle_recovers_when_clock_goes_backwards() {
        let mut throttle = Throttle::new(16.0);
        assert!(throttle.ready(50_000.0));
        assert!(throttle.ready(10_000.0));
        assert!(!throttle.ready(10_008.0));
        assert!(throttle.ready(10_016.0));
    }

    #[test]
    fn scroll_target_accounts_for_fixed_navbar() {
        assert_eq!(section_scroll_target(600.0), 520.0);
        assert_eq!(section_scroll_target(40.0), 0.0);
    }

    #[test]
    fn parallax_moves_at_half_speed() {
        assert_eq!(parallax_offset(300.0), 150.0);
    }
}
