// src/application/commands/car_models/service.rs
use std::sync::Arc;

use crate::{
    application::{
        ports::time::Clock,
        services::{content::ContentSanitizer, media::ImageJanitor},
    },
    domain::{
        car_model::{CarModelReadRepository, CarModelWriteRepository},
        slug::SlugAssigner,
    },
};

pub struct CarModelCommandService {
    pub(super) write_repo: Arc<dyn CarModelWriteRepository>,
    pub(super) read_repo: Arc<dyn CarModelReadRepository>,
    pub(super) slugs: Arc<SlugAssigner>,
    pub(super) sanitizer: Arc<ContentSanitizer>,
    pub(super) janitor: Arc<ImageJanitor>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CarModelCommandService {
    pub fn new(
        write_repo: Arc<dyn CarModelWriteRepository>,
        read_repo: Arc<dyn CarModelReadRepository>,
        slugs: Arc<SlugAssigner>,
        sanitizer: Arc<ContentSanitizer>,
        janitor: Arc<ImageJanitor>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slugs,
            sanitizer,
            janitor,
            clock,
        }
    }

    /// Sanitize an optional description, treating blank as absent.
    pub(super) fn clean_description(
        &self,
        description: Option<String>,
    ) -> crate::application::ApplicationResult<Option<String>> {
        crate::domain::optional_text(description)
            .map(|html| self.sanitizer.clean("description", html))
            .transpose()
            .map(crate::domain::optional_text)
    }
}
