// src/infrastructure/repositories/postgres_about.rs
use super::error::map_sqlx;
use crate::domain::about::{AboutPage, AboutPageRepository};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAboutPageRepository {
    pool: PgPool,
}

impl PostgresAboutPageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AboutRow {
    title: String,
    content: String,
    hero_image_url: Option<String>,
    meta_description: Option<String>,
    updated_at: DateTime<Utc>,
}

impl From<AboutRow> for AboutPage {
    fn from(row: AboutRow) -> Self {
        Self {
            title: row.title,
            content: row.content,
            hero_image_url: row.hero_image_url,
            meta_description: row.meta_description,
            updated_at: Some(row.updated_at),
        }
    }
}

#[async_trait]
impl AboutPageRepository for PostgresAboutPageRepository {
    async fn load(&self) -> DomainResult<Option<AboutPage>> {
        let row = sqlx::query_as::<_, AboutRow>(
            "SELECT title, content, hero_image_url, meta_description, updated_at
             FROM about_page WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }

    async fn upsert(&self, page: AboutPage) -> DomainResult<AboutPage> {
        let row = sqlx::query_as::<_, AboutRow>(
            "INSERT INTO about_page (id, title, content, hero_image_url, meta_description, updated_at)
             VALUES (1, $1, $2, $3, $4, $5)
             ON CONFLICT (id) DO UPDATE SET
                 title = EXCLUDED.title,
                 content = EXCLUDED.content,
                 hero_image_url = EXCLUDED.hero_image_url,
                 meta_description = EXCLUDED.meta_description,
                 updated_at = EXCLUDED.updated_at
             RETURNING title, content, hero_image_url, meta_description, updated_at",
        )
        .bind(page.title)
        .bind(page.content)
        .bind(page.hero_image_url)
        .bind(page.meta_description)
        .bind(page.updated_at.unwrap_or_else(Utc::now))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into())
    }
}
