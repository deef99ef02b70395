// src/domain/slug.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::errors::DomainResult;

/// Answers which record, if any, currently holds a slug.
#[async_trait]
pub trait SlugOwnership: Send + Sync {
    async fn owner_of(&self, slug: &str) -> DomainResult<Option<i64>>;
}

/// Derives URL slugs and resolves collisions with a single disambiguation
/// step. Creation appends the current time in milliseconds; updates append
/// the record's own id. A collision that survives the suffix is left for the
/// database unique constraint to reject.
pub struct SlugAssigner {
    ownership: Arc<dyn SlugOwnership>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
    fallback_prefix: &'static str,
}

impl SlugAssigner {
    pub fn new(
        ownership: Arc<dyn SlugOwnership>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
        fallback_prefix: &'static str,
    ) -> Self {
        Self {
            ownership,
            generator,
            clock,
            fallback_prefix,
        }
    }

    pub async fn assign_for_create(
        &self,
        title: &str,
        override_slug: Option<&str>,
    ) -> DomainResult<String> {
        let candidate = match explicit(override_slug) {
            Some(slug) => slug.to_string(),
            None => self.from_title(title),
        };

        if self.ownership.owner_of(&candidate).await?.is_some() {
            let stamp = self.clock.now().timestamp_millis();
            tracing::debug!(slug = %candidate, stamp, "slug taken, appending timestamp");
            return Ok(format!("{candidate}-{stamp}"));
        }

        Ok(candidate)
    }

    /// `new_title` must only be set when the title actually changed.
    pub async fn assign_for_update(
        &self,
        id: i64,
        current_slug: &str,
        new_title: Option<&str>,
        override_slug: Option<&str>,
    ) -> DomainResult<String> {
        let candidate = match (explicit(override_slug), new_title) {
            (Some(slug), _) => slug.to_string(),
            (None, Some(title)) => self.from_title(title),
            (None, None) => return Ok(current_slug.to_string()),
        };

        if candidate == current_slug {
            return Ok(candidate);
        }

        match self.ownership.owner_of(&candidate).await? {
            Some(owner) if owner != id => {
                tracing::debug!(slug = %candidate, id, owner, "slug taken, appending id");
                Ok(format!("{candidate}-{id}"))
            }
            _ => Ok(candidate),
        }
    }

    fn from_title(&self, title: &str) -> String {
        let base = self.generator.slugify(title);
        if base.is_empty() {
            format!("{}-{}", self.fallback_prefix, self.clock.now().timestamp())
        } else {
            base
        }
    }
}

fn explicit(override_slug: Option<&str>) -> Option<&str> {
    override_slug.map(str::trim).filter(|s| !s.is_empty())
}
