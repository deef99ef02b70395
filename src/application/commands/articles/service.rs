// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        ports::time::Clock,
        services::{content::ContentSanitizer, media::ImageJanitor},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        slug::SlugAssigner,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) slugs: Arc<SlugAssigner>,
    pub(super) sanitizer: Arc<ContentSanitizer>,
    pub(super) janitor: Arc<ImageJanitor>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
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
}
