// src/domain/macros.rs

/// Positive integer identifier backed by a database sequence.
macro_rules! entity_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(id: i64) -> $crate::domain::errors::DomainResult<Self> {
                if id <= 0 {
                    Err($crate::domain::errors::DomainError::Validation(
                        concat!($label, " id must be positive").into(),
                    ))
                } else {
                    Ok(Self(id))
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// Trimmed, non-empty text field.
macro_rules! non_empty_text {
    ($name:ident, $field:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> $crate::domain::errors::DomainResult<Self> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err($crate::domain::errors::DomainError::Validation(
                        concat!($field, " cannot be empty").into(),
                    ));
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

pub(crate) use entity_id;
pub(crate) use non_empty_text;

/// Normalise an optional free-text field: blank strings become `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    non_empty_text!(Label, "label");
    entity_id!(ThingId, "thing");

    #[test]
    fn non_empty_text_trims_and_rejects_blank() {
        assert_eq!(Label::new("  hi ").unwrap().as_str(), "hi");
        assert!(Label::new("   ").is_err());
    }

    #[test]
    fn entity_id_rejects_non_positive() {
        assert!(ThingId::new(0).is_err());
        assert!(ThingId::new(-3).is_err());
        assert_eq!(i64::from(ThingId::new(7).unwrap()), 7);
    }

    #[test]
    fn optional_text_drops_blank_values() {
        assert_eq!(optional_text(Some("  ".into())), None);
        assert_eq!(optional_text(Some(" x ".into())), Some("x".into()));
        assert_eq!(optional_text(None), None);
    }
}
