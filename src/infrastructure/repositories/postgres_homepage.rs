// src/infrastructure/repositories/postgres_homepage.rs
use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::homepage::{
    FeatureCard, HeroBlock, HomepageConfig, HomepageRepository, HomepageSection, SectionBody,
    SectionKind,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresHomepageRepository {
    pool: PgPool,
}

impl PostgresHomepageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ConfigRow {
    hero_title: String,
    hero_subtitle: Option<String>,
    hero_image_url: Option<String>,
    hero_cta_label: Option<String>,
    hero_cta_url: Option<String>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct SectionRow {
    id: i64,
    position: i32,
    section_type: String,
    title: Option<String>,
    subtitle: Option<String>,
    payload: Json<SectionPayload>,
}

/// Variant-specific columns, stored as one JSONB document next to
/// `section_type`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SectionPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    car_model_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    cards: Vec<FeatureCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cta_label: Option<String>,
}

fn encode_body(body: &SectionBody) -> SectionPayload {
    match body.clone() {
        SectionBody::Default {
            content,
            image_url,
            car_model_ids,
        } => SectionPayload {
            content: Some(content),
            image_url,
            car_model_ids,
            ..SectionPayload::default()
        },
        SectionBody::FeatureCardsGrid { cards } => SectionPayload {
            cards,
            ..SectionPayload::default()
        },
        SectionBody::Banner {
            image_url,
            link_url,
            cta_label,
        } => SectionPayload {
            image_url: Some(image_url),
            link_url,
            cta_label,
            ..SectionPayload::default()
        },
    }
}

fn decode_body(kind: SectionKind, payload: SectionPayload) -> DomainResult<SectionBody> {
    Ok(match kind {
        SectionKind::Default => SectionBody::Default {
            content: payload.content.unwrap_or_default(),
            image_url: payload.image_url,
            car_model_ids: payload.car_model_ids,
        },
        SectionKind::FeatureCardsGrid => SectionBody::FeatureCardsGrid {
            cards: payload.cards,
        },
        SectionKind::Banner => SectionBody::Banner {
            image_url: payload.image_url.ok_or_else(|| {
                DomainError::Persistence("banner section stored without image_url".into())
            })?,
            link_url: payload.link_url,
            cta_label: payload.cta_label,
        },
    })
}

impl TryFrom<SectionRow> for HomepageSection {
    type Error = DomainError;

    fn try_from(row: SectionRow) -> Result<Self, Self::Error> {
        let kind: SectionKind = row.section_type.parse().map_err(DomainError::Persistence)?;
        Ok(HomepageSection {
            id: Some(row.id),
            position: u32::try_from(row.position).unwrap_or_default(),
            title: row.title,
            subtitle: row.subtitle,
            body: decode_body(kind, row.payload.0)?,
        })
    }
}

#[async_trait]
impl HomepageRepository for PostgresHomepageRepository {
    async fn load(&self) -> DomainResult<Option<HomepageConfig>> {
        let Some(config) = sqlx::query_as::<_, ConfigRow>(
            "SELECT hero_title, hero_subtitle, hero_image_url, hero_cta_label, hero_cta_url, updated_at
             FROM homepage_config WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        else {
            return Ok(None);
        };

        let sections = sqlx::query_as::<_, SectionRow>(
            "SELECT id, position, section_type, title, subtitle, payload
             FROM homepage_sections ORDER BY position ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?
        .into_iter()
        .map(HomepageSection::try_from)
        .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(HomepageConfig {
            hero: HeroBlock {
                title: config.hero_title,
                subtitle: config.hero_subtitle,
                image_url: config.hero_image_url,
                cta_label: config.hero_cta_label,
                cta_url: config.hero_cta_url,
            },
            sections,
            updated_at: Some(config.updated_at),
        }))
    }

    async fn replace(&self, config: HomepageConfig) -> DomainResult<HomepageConfig> {
        let updated_at = config.updated_at.unwrap_or_else(Utc::now);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query(
            "INSERT INTO homepage_config
                 (id, hero_title, hero_subtitle, hero_image_url, hero_cta_label, hero_cta_url, updated_at)
             VALUES (1, $1, $2, $3, $4, $5, $6)
             ON CONFLICT (id) DO UPDATE SET
                 hero_title = EXCLUDED.hero_title,
                 hero_subtitle = EXCLUDED.hero_subtitle,
                 hero_image_url = EXCLUDED.hero_image_url,
                 hero_cta_label = EXCLUDED.hero_cta_label,
                 hero_cta_url = EXCLUDED.hero_cta_url,
                 updated_at = EXCLUDED.updated_at",
        )
        .bind(&config.hero.title)
        .bind(&config.hero.subtitle)
        .bind(&config.hero.image_url)
        .bind(&config.hero.cta_label)
        .bind(&config.hero.cta_url)
        .bind(updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        sqlx::query("DELETE FROM homepage_sections")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let mut sections = Vec::with_capacity(config.sections.len());
        for section in config.sections {
            let position = i32::try_from(section.position)
                .map_err(|_| DomainError::Validation("too many homepage sections".into()))?;
            let id: i64 = sqlx::query_scalar(
                "INSERT INTO homepage_sections (position, section_type, title, subtitle, payload)
                 VALUES ($1, $2, $3, $4, $5)
                 RETURNING id",
            )
            .bind(position)
            .bind(section.body.kind().as_str())
            .bind(&section.title)
            .bind(&section.subtitle)
            .bind(Json(encode_body(&section.body)))
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

            sections.push(HomepageSection {
                id: Some(id),
                ..section
            });
        }

        tx.commit().await.map_err(map_sqlx)?;

        Ok(HomepageConfig {
            hero: config.hero,
            sections,
            updated_at: Some(updated_at),
        })
    }
}
