// src/domain/homepage/entity.rs
use crate::domain::media::{self, ImageRefs};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroBlock {
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCard {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
}

/// Section payload; the variant is persisted as `section_type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Default {
        content: String,
        image_url: Option<String>,
        car_model_ids: Vec<i64>,
    },
    FeatureCardsGrid {
        cards: Vec<FeatureCard>,
    },
    Banner {
        image_url: String,
        link_url: Option<String>,
        cta_label: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Default,
    FeatureCardsGrid,
    Banner,
}

impl SectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::FeatureCardsGrid => "feature_cards_grid",
            Self::Banner => "banner",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "feature_cards_grid" => Ok(Self::FeatureCardsGrid),
            "banner" => Ok(Self::Banner),
            other => Err(format!("unknown section type: {other}")),
        }
    }
}

impl SectionBody {
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Default { .. } => SectionKind::Default,
            Self::FeatureCardsGrid { .. } => SectionKind::FeatureCardsGrid,
            Self::Banner { .. } => SectionKind::Banner,
        }
    }

    fn collect_images(&self, refs: &mut ImageRefs) {
        match self {
            Self::Default {
                content, image_url, ..
            } => {
                refs.extend(media::image_urls_in_html(content));
                media::push_optional(refs, image_url.as_deref());
            }
            Self::FeatureCardsGrid { cards } => {
                for card in cards {
                    media::push_optional(refs, card.icon_url.as_deref());
                }
            }
            Self::Banner { image_url, .. } => media::push_optional(refs, Some(image_url)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomepageSection {
    /// Row id once persisted. Rows are replaced on every save, so ids are
    /// not stable across saves.
    pub id: Option<i64>,
    pub position: u32,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub body: SectionBody,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomepageConfig {
    pub hero: HeroBlock,
    pub sections: Vec<HomepageSection>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl HomepageConfig {
    pub fn image_urls(&self) -> ImageRefs {
        let mut refs = ImageRefs::new();
        media::push_optional(&mut refs, self.hero.image_url.as_deref());
        for section in &self.sections {
            section.body.collect_images(&mut refs);
        }
        refs
    }

    /// Rewrite positions to match vector order (0-based, dense).
    pub fn renumber(&mut self) {
        for (index, section) in self.sections.iter_mut().enumerate() {
            section.position = u32::try_from(index).unwrap_or(u32::MAX);
        }
    }
}
