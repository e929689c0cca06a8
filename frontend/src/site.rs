use crate::interaction::reveal::{RevealGroup, FEATURE_CARDS, PRODUCT_CARDS, SERVICE_CARDS};

/// The two landing sites served by this app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Site {
    Generic,
    SmartCare,
}

impl Site {
    pub fn brand(&self) -> &'static str {
        match self {
            Site::Generic => "Brightline",
            Site::SmartCare => "SmartCare",
        }
    }

    /// (label, section anchor) pairs for the header navigation.
    pub fn nav_links(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Site::Generic => &[
                ("Home", "#home"),
                ("Features", "#features"),
                ("Services", "#services"),
                ("Contact", "#contact"),
            ],
            Site::SmartCare => &[
                ("Home", "#home"),
                ("Why us", "#features"),
                ("Care plans", "#services"),
                ("Products", "#products"),
                ("Contact", "#contact"),
            ],
        }
    }

    pub fn reveal_groups(&self) -> &'static [RevealGroup] {
        match self {
            Site::Generic => &[FEATURE_CARDS, SERVICE_CARDS],
            Site::SmartCare => &[FEATURE_CARDS, SERVICE_CARDS, PRODUCT_CARDS],
        }
    }

    pub fn easter_egg_message(&self) -> &'static str {
        match self {
            Site::Generic => "You found the secret! Have a great day.",
            Site::SmartCare => "Woof! A treat for every pet that visits today.",
        }
    }
}
