// src/presentation/http/controllers/mod.rs
pub mod about;
pub mod articles;
pub mod car_models;
pub mod contact;
pub mod homepage;
pub mod media;

use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;

/// Body returned by endpoints that only report an outcome.
#[derive(Debug, serde::Serialize, ToSchema)]
pub struct StatusMessage {
    #[schema(example = "deleted")]
    pub status: String,
}

impl StatusMessage {
    pub fn deleted() -> Self {
        Self {
            status: "deleted".into(),
        }
    }
}

/// Distinguishes an explicit `null` from an absent field: absent stays
/// `None` (via `#[serde(default)]`), `null` becomes `Some(None)`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Nullable text on partial updates. `null` is treated like `""`, which
/// clears the column.
pub(crate) fn clearable_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|value| Some(value.unwrap_or_default()))
}
