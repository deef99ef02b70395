use crate::domain::homepage::{FeatureCard, HeroBlock, HomepageConfig, HomepageSection, SectionBody};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HeroDto {
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
}

impl From<HeroBlock> for HeroDto {
    fn from(hero: HeroBlock) -> Self {
        Self {
            title: hero.title,
            subtitle: hero.subtitle,
            image_url: hero.image_url,
            cta_label: hero.cta_label,
            cta_url: hero.cta_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeatureCardDto {
    pub title: String,
    pub description: String,
    pub icon_url: Option<String>,
    pub link_url: Option<String>,
}

impl From<FeatureCard> for FeatureCardDto {
    fn from(card: FeatureCard) -> Self {
        Self {
            title: card.title,
            description: card.description,
            icon_url: card.icon_url,
            link_url: card.link_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "section_type", rename_all = "snake_case")]
pub enum SectionBodyDto {
    Default {
        content: String,
        image_url: Option<String>,
        car_model_ids: Vec<i64>,
    },
    FeatureCardsGrid {
        cards: Vec<FeatureCardDto>,
    },
    Banner {
        image_url: String,
        link_url: Option<String>,
        cta_label: Option<String>,
    },
}

impl From<SectionBody> for SectionBodyDto {
    fn from(body: SectionBody) -> Self {
        match body {
            SectionBody::Default {
                content,
                image_url,
                car_model_ids,
            } => Self::Default {
                content,
                image_url,
                car_model_ids,
            },
            SectionBody::FeatureCardsGrid { cards } => Self::FeatureCardsGrid {
                cards: cards.into_iter().map(Into::into).collect(),
            },
            SectionBody::Banner {
                image_url,
                link_url,
                cta_label,
            } => Self::Banner {
                image_url,
                link_url,
                cta_label,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SectionDto {
    pub id: Option<i64>,
    pub position: u32,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(flatten)]
    pub body: SectionBodyDto,
}

impl From<HomepageSection> for SectionDto {
    fn from(section: HomepageSection) -> Self {
        Self {
            id: section.id,
            position: section.position,
            title: section.title,
            subtitle: section.subtitle,
            body: section.body.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomepageDto {
    pub hero: HeroDto,
    pub sections: Vec<SectionDto>,
    #[serde(default, with = "serde_time::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<HomepageConfig> for HomepageDto {
    fn from(config: HomepageConfig) -> Self {
        Self {
            hero: config.hero.into(),
            sections: config.sections.into_iter().map(Into::into).collect(),
            updated_at: config.updated_at,
        }
    }
}
