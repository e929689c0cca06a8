use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{window, Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::error::SiteError;
use crate::interaction::geometry::{is_in_viewport, smooth_scroll_target, Rect, Viewport};
use crate::interaction::style::Style;
use crate::interaction::surface::DisplaySurface;

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn apply_style(element: &HtmlElement, style: &Style) {
    let declaration = element.style();
    for (property, value) in style.iter() {
        if declaration.set_property(property, value).is_err() {
            debug!("Rejected style {}: {}", property, value);
        }
    }
}

fn viewport() -> Option<Viewport> {
    let window = window()?;
    Some(Viewport {
        width: window.inner_width().ok()?.as_f64()?,
        height: window.inner_height().ok()?.as_f64()?,
    })
}

/// Page-script entry point: `isInViewport(element)` is true when the
/// element lies entirely inside the window.
#[wasm_bindgen(js_name = isInViewport)]
pub fn element_in_viewport(element: &Element) -> bool {
    let Some(viewport) = viewport() else { return false };
    let bounds = element.get_bounding_client_rect();
    is_in_viewport(
        &Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height()),
        &viewport,
    )
}

pub fn query_all(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        warn!("Bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Smoothly scrolls to the element matching `anchor` (e.g. `#contact`),
/// keeping it clear of the fixed `.header`.
pub fn scroll_to_section(anchor: &str) {
    let Some(window) = window() else { return };
    let Some(document) = window.document() else { return };
    let Some(section) = document
        .query_selector(anchor)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        debug!("No section for {}", anchor);
        return;
    };
    let header_height = document
        .query_selector(".header")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|header| header.offset_height() as f64)
        .unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(smooth_scroll_target(section.offset_top() as f64, header_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// `web-sys` backed display surface. Toasts are appended to `<body>`.
#[derive(Clone)]
pub struct DomSurface {
    document: Option<Document>,
}

impl DomSurface {
    pub fn new() -> Self {
        Self { document: document() }
    }
}

impl Default for DomSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for DomSurface {
    type Node = HtmlElement;

    fn create_toast(&mut self, class_name: &str, text: &str, style: &Style) -> Result<HtmlElement, SiteError> {
        let document = self.document.as_ref().ok_or(SiteError::EnvironmentUnsupported("document"))?;
        let body = document.body().ok_or(SiteError::EnvironmentUnsupported("document.body"))?;
        let node = document
            .create_element("div")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or(SiteError::EnvironmentUnsupported("createElement"))?;

        node.set_class_name(class_name);
        node.set_text_content(Some(text));
        apply_style(&node, style);
        body.append_child(&node)
            .map_err(|_| SiteError::EnvironmentUnsupported("appendChild"))?;
        Ok(node)
    }

    fn apply_style(&mut self, node: &HtmlElement, style: &Style) {
        apply_style(node, style);
    }

    fn detach(&mut self, node: &HtmlElement) -> bool {
        if node.parent_node().is_none() {
            return false;
        }
        node.remove();
        true
    }
}
