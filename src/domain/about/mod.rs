// src/domain/about/mod.rs
use crate::domain::errors::DomainResult;
use crate::domain::media::{self, ImageRefs};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// The single "about us" page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AboutPage {
    pub title: String,
    pub content: String,
    pub hero_image_url: Option<String>,
    pub meta_description: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl AboutPage {
    pub fn image_urls(&self) -> ImageRefs {
        let mut refs = media::image_urls_in_html(&self.content);
        media::push_optional(&mut refs, self.hero_image_url.as_deref());
        refs
    }
}

#[async_trait]
pub trait AboutPageRepository: Send + Sync {
    async fn load(&self) -> DomainResult<Option<AboutPage>>;
    async fn upsert(&self, page: AboutPage) -> DomainResult<AboutPage>;
}
