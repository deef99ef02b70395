use crate::domain::about::AboutPage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AboutPageDto {
    pub title: String,
    pub content: String,
    pub hero_image_url: Option<String>,
    pub meta_description: Option<String>,
    #[serde(default, with = "serde_time::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<AboutPage> for AboutPageDto {
    fn from(page: AboutPage) -> Self {
        Self {
            title: page.title,
            content: page.content,
            hero_image_url: page.hero_image_url,
            meta_description: page.meta_description,
            updated_at: page.updated_at,
        }
    }
}
