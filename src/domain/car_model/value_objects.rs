use crate::domain::macros::{entity_id, non_empty_text};

entity_id!(CarModelId, "car model");

non_empty_text!(CarModelName, "name");
non_empty_text!(CarModelSlug, "slug");
non_empty_text!(CarModelCategory, "category");
