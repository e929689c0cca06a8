use super::clock::Millis;
use super::geometry::Ripple;
use super::severity::Severity;

/// Ordered list of inline style declarations, property names in CSS
/// (kebab-case) form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(&'static str, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some(existing) => existing.1 = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    #[cfg(test)]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.declarations.iter().map(|(p, v)| (*p, v.as_str()))
    }

    /// Inline `style` attribute text.
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub const TOAST_OFFSCREEN: &str = "translateX(100%)";
pub const TOAST_ONSCREEN: &str = "translateX(0)";

/// Full initial style of a toast: fixed in the top right corner, parked
/// off-screen until the entry transition.
pub fn toast_base(severity: Severity) -> Style {
    Style::new()
        .set("position", "fixed")
        .set("top", "20px")
        .set("right", "20px")
        .set("padding", "15px 20px")
        .set("border-radius", "8px")
        .set("color", "white")
        .set("font-weight", "500")
        .set("z-index", "10000")
        .set("transform", TOAST_OFFSCREEN)
        .set("transition", "transform 0.3s ease")
        .set("max-width", "300px")
        .set("background", severity.color_token())
}

pub fn toast_position(on_screen: bool) -> Style {
    let transform = if on_screen { TOAST_ONSCREEN } else { TOAST_OFFSCREEN };
    Style::new().set("transform", transform)
}

pub fn reveal_hidden(delay: Millis) -> Style {
    let seconds = delay as f64 / 1000.0;
    Style::new()
        .set("opacity", "0")
        .set("transform", "translateY(50px)")
        .set(
            "transition",
            format!("opacity 0.6s ease {seconds}s, transform 0.6s ease {seconds}s"),
        )
}

pub fn reveal_shown() -> Style {
    Style::new().set("opacity", "1").set("transform", "translateY(0)")
}

pub const RIPPLE_KEYFRAMES: &str = "@keyframes ripple { to { transform: scale(4); opacity: 0; } }";

pub fn ripple(ripple: &Ripple) -> Style {
    Style::new()
        .set("width", format!("{}px", ripple.size))
        .set("height", format!("{}px", ripple.size))
        .set("left", format!("{}px", ripple.x))
        .set("top", format!("{}px", ripple.y))
        .set("position", "absolute")
        .set("border-radius", "50%")
        .set("background", "rgba(255, 255, 255, 0.6)")
        .set("transform", "scale(0)")
        .set("animation", "ripple 0.6s linear")
        .set("pointer-events", "none")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_existing_property() {
        let style = Style::new().set("opacity", "0").set("opacity", "1");
        assert_eq!(style.get("opacity"), Some("1"));
        assert_eq!(style.iter().count(), 1);
    }

    #[test]
    fn renders_inline_css() {
        let style = Style::new().set("opacity", "0").set("transform", "translateY(50px)");
        assert_eq!(style.to_css(), "opacity: 0; transform: translateY(50px);");
    }

    #[test]
    fn toast_starts_off_screen_with_severity_color() {
        let style = toast_base(Severity::Success);
        assert_eq!(style.get("transform"), Some(TOAST_OFFSCREEN));
        assert_eq!(style.get("background"), Some("#10B981"));
    }

    #[test]
    fn ripple_is_sized_and_placed() {
        let style = ripple(&Ripple { size: 120.0, x: -10.5, y: 4.0 });
        assert_eq!(style.get("width"), Some("120px"));
        assert_eq!(style.get("height"), Some("120px"));
        assert_eq!(style.get("left"), Some("-10.5px"));
        assert_eq!(style.get("top"), Some("4px"));
    }

    #[test]
    fn reveal_transition_carries_stagger_delay() {
        let style = reveal_hidden(150);
        assert_eq!(
            style.get("transition"),
            Some("opacity 0.6s ease 0.15s, transform 0.6s ease 0.15s")
        );
        assert_eq!(
            reveal_hidden(0).get("transition"),
            Some("opacity 0.6s ease 0s, transform 0.6s ease 0s")
        );
    }
}
