// src/application/services/content.rs
use std::sync::Arc;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::html::{HtmlSanitizer, SanitizeFailurePolicy},
};

/// Applies the HTML sanitizer to rich-text fields under the configured
/// failure policy.
pub struct ContentSanitizer {
    sanitizer: Arc<dyn HtmlSanitizer>,
    policy: SanitizeFailurePolicy,
}

impl ContentSanitizer {
    pub fn new(sanitizer: Arc<dyn HtmlSanitizer>, policy: SanitizeFailurePolicy) -> Self {
        Self { sanitizer, policy }
    }

    pub fn policy(&self) -> SanitizeFailurePolicy {
        self.policy
    }

    pub fn clean(&self, field: &str, html: String) -> ApplicationResult<String> {
        match self.sanitizer.sanitize(&html) {
            Ok(clean) => Ok(clean),
            Err(err) => match self.policy {
                SanitizeFailurePolicy::Passthrough => {
                    tracing::error!(field, error = %err, "sanitizer failed, storing input unchanged");
                    Ok(html)
                }
                SanitizeFailurePolicy::Reject => {
                    tracing::warn!(field, error = %err, "sanitizer failed, rejecting write");
                    Err(ApplicationError::validation(format!(
                        "{field} could not be sanitized"
                    )))
                }
            },
        }
    }
}
