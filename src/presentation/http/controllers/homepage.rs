// src/presentation/http/controllers/homepage.rs
use crate::application::{
    commands::homepage::{FeatureCardInput, HeroInput, SaveHomepageCommand, SectionInput},
    dto::HomepageDto,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct HeroRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub cta_label: Option<String>,
    pub cta_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct FeatureCardRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub link_url: Option<String>,
}

/// A section as edited in the admin UI. `section_type` is one of
/// `default`, `feature_cards_grid` or `banner`; fields irrelevant to the
/// type are ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SectionRequest {
    #[schema(example = "default")]
    pub section_type: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub car_model_ids: Vec<i64>,
    #[serde(default)]
    pub cards: Vec<FeatureCardRequest>,
    pub link_url: Option<String>,
    pub cta_label: Option<String>,
}

/// Full replacement. Section order in the array becomes display order.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SaveHomepageRequest {
    #[serde(default)]
    pub hero: HeroRequest,
    #[serde(default)]
    pub sections: Vec<SectionRequest>,
}

impl From<SaveHomepageRequest> for SaveHomepageCommand {
    fn from(req: SaveHomepageRequest) -> Self {
        let hero = HeroInput {
            title: req.hero.title,
            subtitle: req.hero.subtitle,
            image_url: req.hero.image_url,
            cta_label: req.hero.cta_label,
            cta_url: req.hero.cta_url,
        };
        let sections = req
            .sections
            .into_iter()
            .map(|section| SectionInput {
                section_type: section.section_type,
                title: section.title,
                subtitle: section.subtitle,
                content: section.content,
                image_url: section.image_url,
                car_model_ids: section.car_model_ids,
                cards: section
                    .cards
                    .into_iter()
                    .map(|card| FeatureCardInput {
                        title: card.title,
                        description: card.description,
                        icon_url: card.icon_url,
                        link_url: card.link_url,
                    })
                    .collect(),
                link_url: section.link_url,
                cta_label: section.cta_label,
            })
            .collect();

        Self { hero, sections }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/homepage",
    responses(
        (status = 200, description = "Current homepage configuration, sections in display order.", body = HomepageDto),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    tag = "Homepage"
)]
pub async fn get_homepage(Extension(state): Extension<HttpState>) -> HttpResult<Json<HomepageDto>> {
    state
        .services
        .homepage_queries
        .get_homepage()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/homepage",
    request_body = SaveHomepageRequest,
    responses(
        (status = 200, description = "Homepage saved.", body = HomepageDto),
        (status = 400, description = "Invalid hero or section fields.", body = ErrorResponse),
        (status = 401, description = "Unauthorized.", body = ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Homepage"
)]
pub async fn save_homepage(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    Json(payload): Json<SaveHomepageRequest>,
) -> HttpResult<Json<HomepageDto>> {
    let saved = state
        .services
        .homepage_commands
        .save_homepage(payload.into())
        .await
        .into_http()?;
    tracing::info!(admin = %admin.name, sections = saved.sections.len(), "homepage saved");
    Ok(Json(saved))
}
