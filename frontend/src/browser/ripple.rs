use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use super::dom::{apply_style, document};
use crate::interaction::geometry::{ripple_geometry, Rect};
use crate::interaction::style::{self, Style};

pub const RIPPLE_MS: u32 = 600;

/// Adds an expanding ripple to `button` centred on the click.
pub fn spawn_ripple(button: &HtmlElement, event: &MouseEvent) {
    let Some(document) = document() else { return };
    let Some(span) = document
        .create_element("span")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let bounds = button.get_bounding_client_rect();
    let geometry = ripple_geometry(
        &Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height()),
        event.client_x() as f64,
        event.client_y() as f64,
    );
    span.set_class_name("ripple");
    apply_style(&span, &style::ripple(&geometry));
    apply_style(button, &Style::new().set("position", "relative").set("overflow", "hidden"));
    if button.append_child(&span).is_err() {
        return;
    }

    // Only touches its own span, so it may outlive the page component.
    Timeout::new(RIPPLE_MS, move || span.remove()).forget();
}
