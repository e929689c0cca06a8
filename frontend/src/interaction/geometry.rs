#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Whether `rect` lies entirely inside the viewport.
pub fn is_in_viewport(rect: &Rect, viewport: &Viewport) -> bool {
    rect.top >= 0.0 && rect.left >= 0.0 && rect.bottom() <= viewport.height && rect.right() <= viewport.width
}

/// Placement of a click ripple relative to its button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub x: f64,
    pub y: f64,
}

pub fn ripple_geometry(button: &Rect, client_x: f64, client_y: f64) -> Ripple {
    let size = button.width.max(button.height);
    Ripple {
        size,
        x: client_x - button.left - size / 2.0,
        y: client_y - button.top - size / 2.0,
    }
}

/// Scroll position that puts a section just below the fixed header.
pub fn smooth_scroll_target(section_offset_top: f64, header_height: f64) -> f64 {
    (section_offset_top - header_height).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Viewport = Viewport { width: 1280.0, height: 800.0 };

    #[test]
    fn fully_visible_rect_is_in_viewport() {
        assert!(is_in_viewport(&Rect::new(10.0, 10.0, 100.0, 100.0), &SCREEN));
        assert!(!is_in_viewport(&Rect::new(10.0, 750.0, 100.0, 100.0), &SCREEN));
        assert!(!is_in_viewport(&Rect::new(-1.0, 10.0, 100.0, 100.0), &SCREEN));
    }

    #[test]
    fn ripple_is_centred_on_click() {
        let button = Rect::new(100.0, 200.0, 160.0, 40.0);
        let ripple = ripple_geometry(&button, 180.0, 220.0);
        assert_eq!(ripple.size, 160.0);
        assert_eq!(ripple.x, 0.0);
        assert_eq!(ripple.y, -60.0);
    }

    #[test]
    fn scroll_target_accounts_for_header() {
        assert_eq!(smooth_scroll_target(900.0, 80.0), 820.0);
        assert_eq!(smooth_scroll_target(40.0, 80.0), 0.0);
    }
}
