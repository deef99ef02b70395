// src/application/commands/homepage.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::HomepageDto,
        error::ApplicationResult,
        ports::time::Clock,
        services::{content::ContentSanitizer, media::ImageJanitor},
        validation::FieldViolations,
    },
    domain::{
        homepage::{
            FeatureCard, HeroBlock, HomepageConfig, HomepageRepository, HomepageSection,
            SectionBody, SectionKind,
        },
        optional_text,
    },
};

#[derive(Debug, Clone, Default)]
pub struct HeroInput {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FeatureCardInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub link_url: Option<String>,
}

/// One section as submitted by the editor. Which fields matter depends on
/// `section_type`.
#[derive(Debug, Clone, Default)]
pub struct SectionInput {
    pub section_type: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub car_model_ids: Vec<i64>,
    pub cards: Vec<FeatureCardInput>,
    pub link_url: Option<String>,
    pub cta_label: Option<String>,
}

/// Full replacement of the homepage. Section order in `sections` becomes
/// the display order.
#[derive(Debug, Clone, Default)]
pub struct SaveHomepageCommand {
    pub hero: HeroInput,
    pub sections: Vec<SectionInput>,
}

pub struct HomepageCommandService {
    repo: Arc<dyn HomepageRepository>,
    sanitizer: Arc<ContentSanitizer>,
    janitor: Arc<ImageJanitor>,
    clock: Arc<dyn Clock>,
}

impl HomepageCommandService {
    pub fn new(
        repo: Arc<dyn HomepageRepository>,
        sanitizer: Arc<ContentSanitizer>,
        janitor: Arc<ImageJanitor>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            sanitizer,
            janitor,
            clock,
        }
    }

    pub async fn save_homepage(&self, command: SaveHomepageCommand) -> ApplicationResult<HomepageDto> {
        let mut violations = FieldViolations::new();
        let hero_title = optional_text(command.hero.title);
        if hero_title.is_none() {
            violations.missing("hero.title");
        }
        let drafts: Vec<Option<HomepageSection>> = command
            .sections
            .into_iter()
            .enumerate()
            .map(|(index, input)| validate_section(&mut violations, index, input))
            .collect();
        violations.finish()?;

        let mut sections = Vec::with_capacity(drafts.len());
        for mut section in drafts.into_iter().flatten() {
            if let SectionBody::Default { content, .. } = &mut section.body {
                *content = self.sanitizer.clean("content", std::mem::take(content))?;
            }
            sections.push(section);
        }

        let mut config = HomepageConfig {
            hero: HeroBlock {
                title: hero_title.unwrap_or_default(),
                subtitle: optional_text(command.hero.subtitle),
                image_url: optional_text(command.hero.image_url),
                cta_label: optional_text(command.hero.cta_label),
                cta_url: optional_text(command.hero.cta_url),
            },
            sections,
            updated_at: Some(self.clock.now()),
        };
        config.renumber();

        let before = self
            .repo
            .load()
            .await?
            .map(|current| current.image_urls())
            .unwrap_or_default();
        let saved = self.repo.replace(config).await?;

        tracing::info!(sections = saved.sections.len(), "homepage saved");
        self.janitor.release_orphans(&before, &saved.image_urls()).await;
        Ok(saved.into())
    }
}

fn validate_section(
    violations: &mut FieldViolations,
    index: usize,
    input: SectionInput,
) -> Option<HomepageSection> {
    let path = format!("sections[{index}]");
    let Some(kind) = optional_text(input.section_type) else {
        violations.invalid(format!("{path}.section_type is required"));
        return None;
    };
    let Ok(kind) = kind.parse::<SectionKind>() else {
        violations.invalid(format!(
            "{path}.section_type must be one of default, feature_cards_grid, banner"
        ));
        return None;
    };

    let body = match kind {
        SectionKind::Default => {
            let content = optional_text(input.content);
            if content.is_none() {
                violations.invalid(format!("{path}.content is required"));
            }
            if input.car_model_ids.iter().any(|id| *id <= 0) {
                violations.invalid(format!("{path}.car_model_ids must be positive"));
            }
            SectionBody::Default {
                content: content?,
                image_url: optional_text(input.image_url),
                car_model_ids: input.car_model_ids,
            }
        }
        SectionKind::FeatureCardsGrid => {
            if input.cards.is_empty() {
                violations.invalid(format!("{path}.cards must not be empty"));
                return None;
            }
            let mut cards = Vec::with_capacity(input.cards.len());
            for (card_index, card) in input.cards.into_iter().enumerate() {
                let card_path = format!("{path}.cards[{card_index}]");
                let title = optional_text(card.title);
                let description = optional_text(card.description);
                if title.is_none() {
                    violations.invalid(format!("{card_path}.title is required"));
                }
                if description.is_none() {
                    violations.invalid(format!("{card_path}.description is required"));
                }
                if let (Some(title), Some(description)) = (title, description) {
                    cards.push(FeatureCard {
                        title,
                        description,
                        icon_url: optional_text(card.icon_url),
                        link_url: optional_text(card.link_url),
                    });
                }
            }
            SectionBody::FeatureCardsGrid { cards }
        }
        SectionKind::Banner => {
            let Some(image_url) = optional_text(input.image_url) else {
                violations.invalid(format!("{path}.image_url is required"));
                return None;
            };
            SectionBody::Banner {
                image_url,
                link_url: optional_text(input.link_url),
                cta_label: optional_text(input.cta_label),
            }
        }
    };

    Some(HomepageSection {
        id: None,
        position: 0,
        title: optional_text(input.title),
        subtitle: optional_text(input.subtitle),
        body,
    })
}
