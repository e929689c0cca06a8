use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, Event, PerformanceNavigationTiming};

use super::dom::document;
use super::listener::ListenerGuard;
use crate::config;

/// Logs page visibility changes until dropped.
pub fn watch_visibility() -> Option<ListenerGuard> {
    let document = document()?;
    let target = document.clone();
    ListenerGuard::new(&target, "visibilitychange", move |_: Event| {
        if document.hidden() {
            info!("Page hidden - reducing activity");
        } else {
            info!("Page visible - resuming activity");
        }
    })
}

/// Logs how long the page's load event took. Skipped on local hosts.
pub fn report_load_time() -> Option<ListenerGuard> {
    let window = window()?;
    let hostname = window.location().hostname().unwrap_or_default();
    if config::is_local_host(&hostname) {
        return None;
    }

    if document().map(|d| d.ready_state() == "complete").unwrap_or(false) {
        log_load_time();
        return None;
    }
    ListenerGuard::new(&window, "load", move |_: Event| {
        // loadEventEnd is only stamped once the load handlers have returned.
        spawn_local(async {
            TimeoutFuture::new(0).await;
            log_load_time();
        });
    })
}

fn log_load_time() {
    let Some(performance) = window().and_then(|w| w.performance()) else {
        return;
    };
    let timing = performance
        .get_entries_by_type("navigation")
        .get(0)
        .dyn_into::<PerformanceNavigationTiming>()
        .ok();
    match timing.and_then(|t| load_event_duration(t.load_event_start(), t.load_event_end())) {
        Some(ms) => info!("Page Load Time: {:.0} ms", ms),
        None => debug!("Navigation timing not available yet"),
    }
}

/// `None` until the load event has finished.
fn load_event_duration(start: f64, end: f64) -> Option<f64> {
    (end > 0.0 && end >= start).then(|| end - start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_duration_spans_the_load_event() {
        assert_eq!(load_event_duration(1_200.0, 1_235.5), Some(35.5));
    }

    #[test]
    fn unfinished_load_event_has_no_duration() {
        assert_eq!(load_event_duration(1_200.0, 0.0), None);
        assert_eq!(load_event_duration(0.0, 0.0), None);
    }
}
