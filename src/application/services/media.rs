// src/application/services/media.rs
use std::sync::Arc;

use crate::{
    application::ports::storage::ObjectStorage,
    domain::media::{self, ImageRefs},
};

/// Best-effort removal of images that no saved record references any more.
/// Runs after the primary write has succeeded; failures are logged and
/// never reach the caller.
pub struct ImageJanitor {
    storage: Arc<dyn ObjectStorage>,
}

impl ImageJanitor {
    pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
        Self { storage }
    }

    /// Release whatever `before` referenced that `after` no longer does.
    pub async fn release_orphans(&self, before: &ImageRefs, after: &ImageRefs) {
        self.release(media::orphaned(before, after)).await;
    }

    pub async fn release(&self, urls: impl IntoIterator<Item = String>) {
        for url in urls {
            if !self.storage.is_managed(&url) {
                tracing::debug!(%url, "skipping image outside managed storage");
                continue;
            }
            match self.storage.delete_object(&url).await {
                Ok(()) => tracing::info!(%url, "released orphaned image"),
                Err(err) => tracing::warn!(%url, error = %err, "failed to release orphaned image"),
            }
        }
    }
}
