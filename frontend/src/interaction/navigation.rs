use super::style::Style;

/// Scroll offset past which the header turns opaque and gains a shadow.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;
pub const HEADER_THROTTLE_MS: u64 = 16;

pub fn header_style(scroll_y: f64) -> Style {
    if scroll_y > HEADER_SCROLL_THRESHOLD {
        Style::new()
            .set("background", "rgba(255, 255, 255, 0.98)")
            .set("box-shadow", "0 2px 20px rgba(0, 0, 0, 0.1)")
    } else {
        Style::new()
            .set("background", "rgba(255, 255, 255, 0.95)")
            .set("box-shadow", "none")
    }
}

/// Style for the `index`-th bar of the hamburger icon. Open turns the
/// three bars into a cross.
pub fn hamburger_span_style(index: usize, active: bool) -> Style {
    if !active {
        return Style::new().set("transform", "none").set("opacity", "1");
    }
    match index {
        0 => Style::new().set("transform", "rotate(45deg) translate(5px, 5px)"),
        1 => Style::new().set("opacity", "0"),
        2 => Style::new().set("transform", "rotate(-45deg) translate(7px, -6px)"),
        _ => Style::new(),
    }
}
