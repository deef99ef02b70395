// src/domain/contact/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::macros::{entity_id, non_empty_text};
use std::fmt;
use std::str::FromStr;

entity_id!(ContactSubmissionId, "contact submission");

non_empty_text!(SenderName, "name");
non_empty_text!(Message, "message");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Shape check only: one `@`, a non-empty local part and a dotted
    /// domain without whitespace.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("email cannot be empty".into()));
        }
        let valid = match value.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
                    && !value.chars().any(char::is_whitespace)
            }
            None => false,
        };
        if !valid {
            return Err(DomainError::Validation("email is not a valid address".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
    Archived,
}

impl ContactStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(Self::New),
            "read" => Ok(Self::Read),
            "replied" => Ok(Self::Replied),
            "archived" => Ok(Self::Archived),
            other => Err(DomainError::Validation(format!(
                "unknown contact status: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_checks() {
        assert!(EmailAddress::new("buyer@example.co.id").is_ok());
        assert!(EmailAddress::new(" buyer@example.com ").is_ok());
        for bad in ["", "buyer", "@example.com", "buyer@example", "a@b@c.com", "a b@c.com", "a@.com"] {
            assert!(EmailAddress::new(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Replied".parse::<ContactStatus>().unwrap(), ContactStatus::Replied);
        assert!("spam".parse::<ContactStatus>().is_err());
        assert_eq!(ContactStatus::default(), ContactStatus::New);
    }
}
