use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, CustomEventInit, Event};

use super::dom::{document, DomSurface};
use super::listener::ListenerGuard;
use super::timers::delay;
use crate::interaction::clock::{Clock, SystemClock};
use crate::interaction::notifications::{NotificationCenter, NotificationHandle};
use crate::interaction::severity::Severity;

pub const SHOW_NOTIFICATION_EVENT: &str = "showNotification";

struct Inner {
    center: NotificationCenter<DomSurface, SystemClock>,
    timer: Option<Timeout>,
}

/// Shared handle to the page's notification center. One browser timer is
/// kept armed for the center's earliest pending transition.
#[derive(Clone)]
pub struct ToastHost {
    inner: Rc<RefCell<Inner>>,
}

impl PartialEq for ToastHost {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ToastHost {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                center: NotificationCenter::new(DomSurface::new(), SystemClock),
                timer: None,
            })),
        }
    }

    pub fn notify(&self, message: &str, severity: Severity) -> NotificationHandle {
        let handle = self.inner.borrow_mut().center.notify(message, severity);
        pump(&self.inner);
        handle
    }

    pub fn shutdown(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.timer = None;
        let live = inner.center.active_count();
        if live > 0 {
            debug!("Dismissing {} live notifications", live);
        }
        inner.center.shutdown();
    }

    /// Forwards `showNotification` custom events on the document into this
    /// host until the guard is dropped.
    pub fn listen_for_page_events(&self) -> Option<ListenerGuard> {
        let document = document()?;
        let host = self.clone();
        ListenerGuard::new(&document, SHOW_NOTIFICATION_EVENT, move |event: Event| {
            let Some(event) = event.dyn_ref::<CustomEvent>() else { return };
            match serde_wasm_bindgen::from_value::<NotificationRequest>(event.detail()) {
                Ok(request) => {
                    host.notify(&request.message, request.severity);
                }
                Err(e) => warn!("Malformed {} event: {}", SHOW_NOTIFICATION_EVENT, e),
            }
        })
    }
}

impl Default for ToastHost {
    fn default() -> Self {
        Self::new()
    }
}

fn pump(inner: &Rc<RefCell<Inner>>) {
    let mut state = inner.borrow_mut();
    state.center.advance();
    let now = SystemClock.now();
    state.timer = state.center.next_deadline().map(|deadline| {
        let weak = Rc::downgrade(inner);
        Timeout::new(delay(now, deadline), move || {
            if let Some(inner) = weak.upgrade() {
                pump(&inner);
            }
        })
    });
}

#[derive(Debug, Deserialize)]
struct NotificationRequest {
    message: String,
    #[serde(rename = "type", default)]
    severity: Severity,
}

/// Page-script entry point: `show_notification("Saved", "success")`.
#[wasm_bindgen]
pub fn show_notification(message: String, kind: Option<String>) {
    let Some(document) = document() else { return };
    let detail = serde_json::json!({ "message": message, "type": kind.unwrap_or_default() });
    let Ok(detail) = serde_wasm_bindgen::to_value(&detail) else { return };

    let init = CustomEventInit::new();
    init.set_detail(&detail);
    match CustomEvent::new_with_event_init_dict(SHOW_NOTIFICATION_EVENT, &init) {
        Ok(event) => {
            if let Err(e) = document.dispatch_event(&event) {
                warn!("Dispatching {} failed: {:?}", SHOW_NOTIFICATION_EVENT, e);
            }
        }
        Err(e) => info!("Could not build {} event: {:?}", SHOW_NOTIFICATION_EVENT, e),
    }
}
