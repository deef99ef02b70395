use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{serde_flag, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
    pub featured_image_url: Option<String>,
    pub featured_image_alt: Option<String>,
    pub youtube_url: Option<String>,
    #[serde(with = "serde_flag")]
    #[schema(value_type = u8, minimum = 0, maximum = 1)]
    pub published: bool,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    pub meta_description: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            content: article.content.into_inner(),
            excerpt: article.excerpt.into_inner(),
            category: article.category.into_inner(),
            featured_image_url: article.featured_image_url,
            featured_image_alt: article.featured_image_alt,
            youtube_url: article.youtube_url,
            published: article.published,
            published_at: article.published_at,
            meta_description: article.meta_description,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
