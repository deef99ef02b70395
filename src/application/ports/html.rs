// src/application/ports/html.rs
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("html sanitizer failed: {0}")]
pub struct SanitizeError(pub String);

/// Reduces rich-text HTML to the allow-listed tag and attribute set.
pub trait HtmlSanitizer: Send + Sync {
    fn sanitize(&self, html: &str) -> Result<String, SanitizeError>;
}

/// What to store when the sanitizer itself fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SanitizeFailurePolicy {
    /// Keep the unsanitized input and log the failure.
    #[default]
    Passthrough,
    /// Refuse the write with a validation error.
    Reject,
}

impl SanitizeFailurePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Passthrough => "passthrough",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for SanitizeFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SanitizeFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "passthrough" => Ok(Self::Passthrough),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "unknown sanitize failure policy `{other}` (expected passthrough or reject)"
            )),
        }
    }
}
