use once_cell::sync::Lazy;
use regex::Regex;

/// Shape-only check: one `@` with at least one non-whitespace character on
/// each side. Domains without a dot (`a@b`) pass; this is not RFC 5322.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").expect("email pattern is valid"));

pub fn is_email_valid(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}
