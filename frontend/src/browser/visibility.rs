use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{window, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom::apply_style;
use crate::error::SiteError;
use crate::interaction::reveal::{IntersectionEvent, ObserverOptions, RevealId, VisibilityObserver};
use crate::interaction::style;

/// Attribute that maps observed elements back to their `RevealId`.
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

pub fn intersection_supported() -> bool {
    window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

pub struct DomVisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl DomVisibilityObserver {
    pub fn new<F>(options: &ObserverOptions, mut on_events: F) -> Result<Self, SiteError>
    where
        F: FnMut(Vec<IntersectionEvent>) + 'static,
    {
        if !intersection_supported() {
            return Err(SiteError::EnvironmentUnsupported("IntersectionObserver"));
        }

        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let events: Vec<IntersectionEvent> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry.target();
                    let id = target.get_attribute(REVEAL_ID_ATTR)?.parse().ok()?;
                    Some(IntersectionEvent {
                        id: RevealId(id),
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                        detached: !target.is_connected(),
                    })
                })
                .collect();
            on_events(events);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|_| SiteError::EnvironmentUnsupported("IntersectionObserver"))?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl VisibilityObserver<HtmlElement> for DomVisibilityObserver {
    fn observe(&mut self, id: RevealId, node: &HtmlElement) {
        // Without the id attribute its events cannot be routed back.
        if let Err(e) = node.set_attribute(REVEAL_ID_ATTR, &id.0.to_string()) {
            warn!("Could not tag {:?} for reveal, leaving it visible: {:?}", id, e);
            apply_style(node, &style::reveal_shown());
            return;
        }
        self.observer.observe(node);
    }

    fn unobserve(&mut self, id: RevealId, node: &HtmlElement) {
        debug!("Revealed {:?}", id);
        self.observer.unobserve(node);
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}
