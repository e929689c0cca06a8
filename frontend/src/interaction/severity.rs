use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// Deserializes from any JSON value; only the known names map to
/// something other than `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "Value")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Parses a severity name. Anything unrecognized falls back to `Info`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    /// Background color token for the toast.
    pub fn color_token(&self) -> &'static str {
        match self {
            Severity::Success => "#10B981",
            Severity::Error => "#EF4444",
            Severity::Info => "#6366F1",
        }
    }

    pub fn class_name(&self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

impl From<Value> for Severity {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => Severity::parse(&name),
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
