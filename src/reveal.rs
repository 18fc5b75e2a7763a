use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use dioxus::web::WebEventExt;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

pub const FADE_CLASS: &str = "fade-up";
pub const ANIMATE_CLASS: &str = "animate";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub delay_ms: u32,
}

/// Section blocks fade up once a tenth of them is visible.
pub const FADE_UP: RevealOptions = RevealOptions {
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
    delay_ms: 0,
};

/// Skill bars fill once half visible, after a short beat.
pub const PROGRESS: RevealOptions = RevealOptions {
    threshold: 0.5,
    root_margin: "0px",
    delay_ms: 200,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

impl RevealState {
    /// Moves to `Revealed`. Returns `false` if it already was.
    pub fn reveal(&mut self) -> bool {
        if *self == RevealState::Revealed {
            return false;
        }
        *self = RevealState::Revealed;
        true
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }
}

/// Parses a `data-percent` value such as `85`, `72.5` or `90%`, clamped to 0..=100.
pub fn parse_percent(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().trim_end_matches('%').trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.clamp(0.0, 100.0))
}

pub fn percent_css(value: f64) -> String {
    format!("{value}%")
}

pub fn reveal_class(base: &str, state: RevealState) -> String {
    if state.is_revealed() {
        format!("{base} {ANIMATE_CLASS}")
    } else {
        base.to_string()
    }
}

#[cfg(target_arch = "wasm32")]
struct OneShotObserver {
    observer: web_sys::IntersectionObserver,
    _closure: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for OneShotObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Watches `target` and runs `on_visible` the first time it intersects,
/// unobserving it right away.
#[cfg(target_arch = "wasm32")]
fn observe_once<F>(
    target: &web_sys::Element,
    options: RevealOptions,
    mut on_visible: F,
) -> Result<OneShotObserver, String>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    observer.unobserve(&entry.target());
                    on_visible();
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    let observer =
        web_sys::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
            .map_err(|_| "intersection observer unavailable".to_string())?;
    observer.observe(target);

    Ok(OneShotObserver {
        observer,
        _closure: closure,
    })
}

#[derive(Clone, Copy)]
pub struct RevealHandle {
    state: Signal<RevealState>,
    #[cfg(target_arch = "wasm32")]
    target: Signal<Option<web_sys::Element>>,
}

impl RevealHandle {
    pub fn state(&self) -> RevealState {
        *self.state.read()
    }

    pub fn mount(&self, event: MountedEvent) {
        #[cfg(target_arch = "wasm32")]
        {
            let mut target = self.target;
            let element = event.data.as_ref().as_web_event();
            if let Ok(node) = element.dyn_into::<web_sys::Element>() {
                target.set(Some(node));
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = event;
        }
    }
}

pub fn use_reveal(options: RevealOptions) -> RevealHandle {
    let state = use_signal(RevealState::default);

    #[cfg(target_arch = "wasm32")]
    {
        let target = use_signal(|| None::<web_sys::Element>);
        let mut observer = use_signal(|| None::<OneShotObserver>);

        use_effect(move || {
            let Some(element) = target.read().as_ref().cloned() else {
                return;
            };
            if observer.peek().is_some() || state.peek().is_revealed() {
                return;
            }
            let mut state = state;
            let on_visible = move || {
                if options.delay_ms == 0 {
                    if state.write().reveal() {
                        tracing::debug!("reveal: element revealed");
                    }
                    return;
                }
                gloo_timers::callback::Timeout::new(options.delay_ms, move || {
                    if state.write().reveal() {
                        tracing::debug!("reveal: element revealed after delay");
                    }
                })
                .forget();
            };
            match observe_once(&element, options, on_visible) {
                Ok(handle) => observer.set(Some(handle)),
                Err(err) => {
                    tracing::warn!("reveal: {err}");
                    state.write().reveal();
                }
            }
        });

        use_drop(move || {
            observer.write().take();
        });

        RevealHandle { state, target }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = options;
        RevealHandle { state }
    }
}

#[component]
pub fn Reveal(#[props(into)] class: String, children: Element) -> Element {
    let reveal = use_reveal(FADE_UP);
    let class = reveal_class(&format!("{class} {FADE_CLASS}"), reveal.state());
    rsx! {
        div { class: "{class}", onmounted: move |event| reveal.mount(event), {children} }
    }
}

#[component]
pub fn SkillBar(#[props(into)] name: String, #[props(into)] percent: String) -> Element {
    let reveal = use_reveal(PROGRESS);
    let state = reveal.state();
    let class = reveal_class("skill-progress", state);
    let style = match (state.is_revealed(), parse_percent(&percent)) {
        (true, Some(value)) => format!("--percent: {}", percent_css(value)),
        _ => String::new(),
    };
    rsx! {
        div { class: "skill-item",
            div { class: "skill-info",
                span { class: "skill-name", "{name}" }
                span { class: "skill-percent", "{percent}%" }
            }
            div { class: "skill-bar",
                div {
                    class: "{class}",
                    "data-percent": "{percent}",
                    style: "{style}",
                    onmounted: move |event| reveal.mount(event),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn reveal_is_one_shot() {
        let mut state = RevealState::default();
        assert!(state.reveal());
        assert!(!state.reveal());
        assert!(!state.reveal());
        assert_eq!(state, RevealState::Revealed);
    }

    #[test]
    fn parses_and_clamps_percentages() {
        assert_eq!(parse_percent("85"), Some(85.0));
        assert_eq!(parse_percent(" 72.5 "), Some(72.5));
        assert_eq!(parse_percent("90%"), Some(90.0));
        assert_eq!(parse_percent("140"), Some(100.0));
        assert_eq!(parse_percent("-3"), Some(0.0));
    }

    #[test]
    fn rejects_non_numeric_percentages() {
        assert_eq!(parse_percent(""), None);
        assert_eq!(parse_percent("lots"), None);
        assert_eq!(parse_percent("NaN"), None);
        assert_eq!(parse_percent("inf"), None);
    }

    #[test]
    fn css_value_drops_trailing_zero() {
        assert_eq!(percent_css(85.0), "85%");
        assert_eq!(percent_css(72.5), "72.5%");
    }

    #[test]
    fn animate_class_only_after_reveal() {
        assert_eq!(reveal_class("card fade-up", RevealState::Pending), "card fade-up");
        assert_eq!(
            reveal_class("card fade-up", RevealState::Revealed),
            "card fade-up animate"
        );
    }
}
