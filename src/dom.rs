//! Browser plumbing shared by the interactive sections.
//!
//! Everything touching `web_sys` lives behind `target_arch = "wasm32"`; the
//! native build only keeps the plain data types so the pure logic around
//! them stays testable.

/// Vertical span of a `section[id]` element, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = ms;
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::*;

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use super::SectionSpan;

    pub fn window() -> Result<web_sys::Window, String> {
        web_sys::window().ok_or_else(|| "window unavailable".to_string())
    }

    pub fn document() -> Result<web_sys::Document, String> {
        window()?
            .document()
            .ok_or_else(|| "document unavailable".to_string())
    }

    pub fn root_element() -> Result<web_sys::Element, String> {
        document()?
            .document_element()
            .ok_or_else(|| "document element missing".to_string())
    }

    pub fn body() -> Result<web_sys::HtmlElement, String> {
        document()?
            .body()
            .ok_or_else(|| "document body missing".to_string())
    }

    /// Monotonic milliseconds from `performance.now()`.
    pub fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now())
            .unwrap_or(0.0)
    }

    pub fn scroll_y() -> f64 {
        window()
            .and_then(|window| window.scroll_y().map_err(|_| "scroll position unavailable".to_string()))
            .unwrap_or(0.0)
    }

    pub fn inner_width() -> f64 {
        window()
            .ok()
            .and_then(|window| window.inner_width().ok())
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0)
    }

    pub fn scroll_to_smooth(top: f64) -> Result<(), String> {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window()?.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }

    pub fn element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
        document()
            .ok()?
            .get_element_by_id(id)?
            .dyn_into::<web_sys::HtmlElement>()
            .ok()
    }

    pub fn query_all(selector: &str) -> Result<Vec<web_sys::Element>, String> {
        let nodes = document()?
            .query_selector_all(selector)
            .map_err(|_| format!("invalid selector {selector}"))?;
        let mut elements = Vec::with_capacity(nodes.length() as usize);
        for index in 0..nodes.length() {
            if let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
            {
                elements.push(element);
            }
        }
        Ok(elements)
    }

    /// Snapshot of every `section[id]` in document order.
    pub fn section_spans() -> Vec<SectionSpan> {
        let Ok(elements) = query_all("section[id]") else {
            return Vec::new();
        };
        elements
            .into_iter()
            .filter_map(|element| {
                let id = element.id();
                let element = element.dyn_into::<web_sys::HtmlElement>().ok()?;
                Some(SectionSpan {
                    id,
                    top: f64::from(element.offset_top()),
                    height: f64::from(element.offset_height()),
                })
            })
            .collect()
    }

    /// An event listener that detaches itself when dropped.
    pub struct Listener {
        target: web_sys::EventTarget,
        event: &'static str,
        closure: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl Listener {
        pub fn attach<F>(
            target: &web_sys::EventTarget,
            event: &'static str,
            handler: F,
        ) -> Result<Self, String>
        where
            F: FnMut(web_sys::Event) + 'static,
        {
            let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
            target
                .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
                .map_err(|_| format!("{event} listener attach failed"))?;
            tracing::debug!("dom: attached {event} listener");
            Ok(Self {
                target: target.clone(),
                event,
                closure,
            })
        }
    }

    impl Drop for Listener {
        fn drop(&mut self) {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
            tracing::debug!("dom: detached {} listener", self.event);
        }
    }
}
