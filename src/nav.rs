use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use dioxus::web::WebEventExt;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::content::NAV_ITEMS;
use crate::scroll::{scroll_to_section, use_scroll_tracking};
use crate::theme::{Theme, ThemeToggle};

/// Widths above this use the desktop layout, where the menu is always shown.
pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MenuEvent {
    Toggle,
    LinkClicked,
    OutsideClick,
    Escape,
    Resized { width: f64 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn apply(&mut self, event: MenuEvent) {
        match event {
            MenuEvent::Toggle => self.open = !self.open,
            MenuEvent::LinkClicked | MenuEvent::OutsideClick | MenuEvent::Escape => {
                self.open = false
            }
            MenuEvent::Resized { width } if width > MOBILE_BREAKPOINT => self.open = false,
            MenuEvent::Resized { .. } => {}
        }
    }

    pub fn class(self, base: &str) -> String {
        if self.open {
            format!("{base} active")
        } else {
            base.to_string()
        }
    }
}

fn dispatch(mut menu: Signal<MenuState>, event: MenuEvent) {
    let current = *menu.peek();
    let mut next = current;
    next.apply(event);
    if next != current {
        tracing::debug!("nav: {event:?} -> open={}", next.is_open());
        menu.set(next);
    }
}

#[cfg(target_arch = "wasm32")]
fn attach_menu_listeners(
    menu: Signal<MenuState>,
    navbar: Signal<Option<web_sys::Element>>,
) -> Result<Vec<crate::dom::Listener>, String> {
    use crate::dom::Listener;

    let document = crate::dom::document()?;
    let window = crate::dom::window()?;

    let on_click = Listener::attach(&document, "click", move |event: web_sys::Event| {
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
        let inside = match (navbar.peek().as_ref(), target) {
            (Some(navbar), Some(target)) => navbar.contains(Some(&target)),
            _ => false,
        };
        if !inside {
            dispatch(menu, MenuEvent::OutsideClick);
        }
    })?;

    let on_keydown = Listener::attach(&document, "keydown", move |event: web_sys::Event| {
        let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
            return;
        };
        if event.key() == "Escape" {
            dispatch(menu, MenuEvent::Escape);
        }
    })?;

    let mut pending: Option<gloo_timers::callback::Timeout> = None;
    let on_resize = Listener::attach(&window, "resize", move |_event: web_sys::Event| {
        if let Some(previous) = pending.take() {
            previous.cancel();
        }
        pending = Some(gloo_timers::callback::Timeout::new(RESIZE_DEBOUNCE_MS, move || {
            dispatch(
                menu,
                MenuEvent::Resized {
                    width: crate::dom::inner_width(),
                },
            );
        }));
    })?;

    Ok(vec![on_click, on_keydown, on_resize])
}

#[component]
pub fn Navbar(#[props(into)] brand: String, default_theme: Theme) -> Element {
    let scroll = use_scroll_tracking();
    let menu = use_signal(MenuState::default);
    #[cfg(target_arch = "wasm32")]
    let mut navbar_ref = use_signal(|| None::<web_sys::Element>);
    #[cfg(target_arch = "wasm32")]
    let mut listeners = use_signal(Vec::<crate::dom::Listener>::new);

    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            if !listeners.peek().is_empty() {
                return;
            }
            match attach_menu_listeners(menu, navbar_ref) {
                Ok(attached) => listeners.set(attached),
                Err(err) => tracing::warn!("nav: {err}"),
            }
        });
        use_drop(move || {
            listeners.write().clear();
        });
    }

    let view = *scroll.navbar.read();
    let active = scroll.active.read().clone();
    let state = *menu.read();
    let menu_class = state.class("nav-menu");
    let toggle_class = state.class("mobile-menu-toggle");
    let expanded = state.is_open().to_string();

    rsx! {
        nav {
            id: "navbar",
            class: "{view.class()}",
            style: "transform: {view.transform()}",
            onmounted: move |_event| {
                #[cfg(target_arch = "wasm32")]
                {
                    let element = _event.data.as_ref().as_web_event();
                    if let Ok(node) = element.dyn_into::<web_sys::Element>() {
                        navbar_ref.set(Some(node));
                    }
                }
            },
            div { class: "nav-container",
                a {
                    class: "nav-logo",
                    href: "#home",
                    onclick: move |event| {
                        event.prevent_default();
                        dispatch(menu, MenuEvent::LinkClicked);
                        scroll_to_section("home");
                    },
                    "{brand}"
                }
                ul { id: "nav-menu", class: "{menu_class}",
                    for item in NAV_ITEMS {
                        li { key: "{item.id}",
                            a {
                                class: if active.as_deref() == Some(item.id) { "nav-link active" } else { "nav-link" },
                                href: "#{item.id}",
                                onclick: move |event| {
                                    event.prevent_default();
                                    dispatch(menu, MenuEvent::LinkClicked);
                                    scroll_to_section(item.id);
                                },
                                "{item.label}"
                            }
                        }
                    }
                }
                div { class: "nav-actions",
                    ThemeToggle { default_theme }
                    button {
                        id: "mobile-menu-toggle",
                        r#type: "button",
                        class: "{toggle_class}",
                        aria_label: "Toggle navigation menu",
                        aria_expanded: "{expanded}",
                        onclick: move |_| dispatch(menu, MenuEvent::Toggle),
                        span { class: "hamburger-line" }
                        span { class: "hamburger-line" }
                        span { class: "hamburger-line" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn open_menu() -> MenuState {
        let mut state = MenuState::default();
        state.apply(MenuEvent::Toggle);
        state
    }

    #[test]
    fn toggle_flips_open_state() {
        let mut state = MenuState::default();
        state.apply(MenuEvent::Toggle);
        assert!(state.is_open());
        state.apply(MenuEvent::Toggle);
        assert!(!state.is_open());
    }

    #[test]
    fn every_close_trigger_closes() {
        for event in [
            MenuEvent::LinkClicked,
            MenuEvent::OutsideClick,
            MenuEvent::Escape,
            MenuEvent::Resized { width: 1024.0 },
        ] {
            let mut state = open_menu();
            state.apply(event);
            assert!(!state.is_open(), "{event:?} left the menu open");
        }
    }

    #[test]
    fn resize_within_mobile_width_keeps_menu() {
        let mut state = open_menu();
        state.apply(MenuEvent::Resized { width: 768.0 });
        assert!(state.is_open());
        state.apply(MenuEvent::Resized { width: 375.0 });
        assert!(state.is_open());
    }

    #[test]
    fn close_events_on_closed_menu_are_noops() {
        let mut state = MenuState::default();
        state.apply(MenuEvent::Escape);
        assert_eq!(state, MenuState::default());
    }

    #[test]
    fn active_class_follows_open_state() {
        assert_eq!(MenuState::default().class("nav-menu"), "nav-menu");
        assert_eq!(open_menu().class("nav-menu"), "nav-menu active");
    }
}
