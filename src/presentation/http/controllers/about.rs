// src/presentation/http/controllers/about.rs
use crate::application::{commands::about::SaveAboutPageCommand, dto::AboutPageDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SaveAboutPageRequest {
    pub title: Option<String>,
    /// HTML; sanitized before storage.
    pub content: Option<String>,
    pub hero_image_url: Option<String>,
    pub meta_description: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/about",
    responses(
        (status = 200, description = "The about page, empty if never saved.", body = AboutPageDto),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    tag = "About"
)]
pub async fn get_about_page(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<AboutPageDto>> {
    state
        .services
        .about_queries
        .get_about_page()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/about",
    request_body = SaveAboutPageRequest,
    responses(
        (status = 200, description = "About page saved.", body = AboutPageDto),
        (status = 400, description = "Missing or invalid fields.", body = ErrorResponse),
        (status = 401, description = "Unauthorized.", body = ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "About"
)]
pub async fn save_about_page(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Json(payload): Json<SaveAboutPageRequest>,
) -> HttpResult<Json<AboutPageDto>> {
    let command = SaveAboutPageCommand {
        title: payload.title,
        content: payload.content,
        hero_image_url: payload.hero_image_url,
        meta_description: payload.meta_description,
    };

    state
        .services
        .about_commands
        .save_about_page(command)
        .await
        .into_http()
        .map(Json)
}
