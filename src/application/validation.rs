// src/application/validation.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::optional_text;

/// Collects every problem with a payload so the caller sees them all in one
/// message instead of fixing fields one round-trip at a time.
#[derive(Debug, Default)]
pub struct FieldViolations {
    missing: Vec<String>,
    invalid: Vec<String>,
}

impl FieldViolations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `field` as missing when `value` is absent or blank; otherwise
    /// build the typed value and record any validation failure.
    pub fn require<T>(
        &mut self,
        field: impl Into<String>,
        value: Option<String>,
        build: impl FnOnce(String) -> DomainResult<T>,
    ) -> Option<T> {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(value) => self.check(build(value)),
            None => {
                self.missing.push(field.into());
                None
            }
        }
    }

    /// Like `require`, but an absent value is fine. A present blank value is
    /// still rejected by `build`.
    pub fn optional<T>(
        &mut self,
        value: Option<String>,
        build: impl FnOnce(String) -> DomainResult<T>,
    ) -> Option<T> {
        value.and_then(|value| self.check(build(value)))
    }

    pub fn check<T>(&mut self, result: DomainResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(DomainError::Validation(msg)) => {
                self.invalid.push(msg);
                None
            }
            Err(other) => {
                self.invalid.push(other.to_string());
                None
            }
        }
    }

    pub fn missing(&mut self, field: impl Into<String>) {
        self.missing.push(field.into());
    }

    pub fn invalid(&mut self, msg: impl Into<String>) {
        self.invalid.push(msg.into());
    }

    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.invalid.is_empty()
    }

    pub fn finish(self) -> ApplicationResult<()> {
        if self.is_empty() {
            return Ok(());
        }
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing required fields: {}", self.missing.join(", ")));
        }
        parts.extend(self.invalid);
        Err(ApplicationError::validation(parts.join("; ")))
    }
}

/// Map an optional update value onto a nullable column: absent leaves the
/// column alone, blank clears it.
pub fn clearable(value: Option<String>) -> Option<Option<String>> {
    value.map(|v| optional_text(Some(v)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_empty(value: String) -> DomainResult<String> {
        if value.len() > 5 {
            Err(DomainError::Validation("too long".into()))
        } else {
            Ok(value)
        }
    }

    #[test]
    fn lists_every_missing_field_then_invalid_ones() {
        let mut violations = FieldViolations::new();
        assert!(violations.require("title", None, non_empty).is_none());
        assert!(violations.require("excerpt", Some("  ".into()), non_empty).is_none());
        assert!(violations.require("category", Some("toolong".into()), non_empty).is_none());
        assert_eq!(
            violations.require("content", Some("ok".into()), non_empty),
            Some("ok".to_string())
        );

        let err = violations.finish().unwrap_err();
        assert_eq!(
            err.to_string(),
            "validation error: missing required fields: title, excerpt; too long"
        );
    }

    #[test]
    fn clearable_distinguishes_absent_from_blank() {
        assert_eq!(clearable(None), None);
        assert_eq!(clearable(Some("  ".into())), Some(None));
        assert_eq!(clearable(Some(" x ".into())), Some(Some("x".into())));
    }

    #[test]
    fn empty_collector_passes() {
        assert!(FieldViolations::new().finish().is_ok());
    }
}
