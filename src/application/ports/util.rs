// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Lowercase, hyphen-joined `[a-z0-9-]` form of `input`; may be empty.
    fn slugify(&self, input: &str) -> String;
}
