// src/presentation/http/controllers/car_models.rs
use crate::application::{
    commands::car_models::{
        CarColorInput, CreateCarModelCommand, DeleteCarModelCommand, GalleryImageInput,
        UpdateCarModelCommand,
    },
    dto::{CarModelDto, Page, serde_flag},
    queries::car_models::{GetCarModelByIdQuery, GetCarModelBySlugQuery, ListCarModelsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::{StatusMessage, clearable_text, nullable};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CarModelListParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// Include unpublished models. Requires an admin token.
    #[serde(default)]
    pub include_drafts: bool,
    pub category: Option<String>,
    /// Case-insensitive name search.
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CarColorRequest {
    pub name: Option<String>,
    /// `#RRGGBB`
    #[schema(example = "#1A2B3C")]
    pub hex_code: Option<String>,
    pub image_url: Option<String>,
}

impl From<CarColorRequest> for CarColorInput {
    fn from(req: CarColorRequest) -> Self {
        Self {
            name: req.name,
            hex_code: req.hex_code,
            image_url: req.image_url,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GalleryImageRequest {
    pub url: Option<String>,
    pub alt: Option<String>,
}

impl From<GalleryImageRequest> for GalleryImageInput {
    fn from(req: GalleryImageRequest) -> Self {
        Self {
            url: req.url,
            alt: req.alt,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateCarModelRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub starting_price: Option<i64>,
    pub main_image_url: Option<String>,
    pub brochure_url: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub colors: Vec<CarColorRequest>,
    #[serde(default)]
    pub gallery: Vec<GalleryImageRequest>,
    #[serde(default, deserialize_with = "serde_flag::deserialize")]
    #[schema(value_type = Option<u8>)]
    pub published: bool,
    pub display_order: Option<i32>,
}

/// Absent fields are left unchanged. `null` clears nullable fields; list
/// fields are replaced wholesale when present.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCarModelRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "clearable_text")]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "clearable_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i64>)]
    pub starting_price: Option<Option<i64>>,
    #[serde(default, deserialize_with = "clearable_text")]
    pub main_image_url: Option<String>,
    #[serde(default, deserialize_with = "clearable_text")]
    pub brochure_url: Option<String>,
    pub features: Option<Vec<String>>,
    pub colors: Option<Vec<CarColorRequest>>,
    pub gallery: Option<Vec<GalleryImageRequest>>,
    #[serde(default, deserialize_with = "serde_flag::option::deserialize")]
    #[schema(value_type = Option<u8>)]
    pub published: Option<bool>,
    pub display_order: Option<i32>,
}

fn into_inputs<R, I: From<R>>(items: Vec<R>) -> Vec<I> {
    items.into_iter().map(Into::into).collect()
}

#[utoipa::path(
    get,
    path = "/api/v1/car-models",
    params(CarModelListParams),
    responses(
        (status = 200, description = "Page of car models in display order.", body = crate::presentation::http::openapi::CarModelListResponse),
        (status = 401, description = "Invalid token.", body = ErrorResponse),
        (status = 403, description = "Drafts requested without authentication.", body = ErrorResponse)
    ),
    tag = "Car Models"
)]
pub async fn list_car_models(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(actor): MaybeAuthenticated,
    Query(params): Query<CarModelListParams>,
) -> HttpResult<Json<Page<CarModelDto>>> {
    let query = ListCarModelsQuery {
        page: params.page,
        page_size: params.page_size,
        include_drafts: params.include_drafts,
        category: params.category,
        search: params.search,
    };

    state
        .services
        .car_model_queries
        .list_car_models(actor.as_ref(), query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/car-models/by-slug/{slug}",
    params(("slug" = String, Path, description = "Car model slug")),
    responses(
        (status = 200, description = "The car model.", body = CarModelDto),
        (status = 404, description = "Unknown slug or unpublished model.", body = ErrorResponse)
    ),
    tag = "Car Models"
)]
pub async fn get_car_model_by_slug(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(actor): MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<CarModelDto>> {
    state
        .services
        .car_model_queries
        .get_car_model_by_slug(actor.as_ref(), GetCarModelBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/car-models/{id}",
    params(("id" = i64, Path, description = "Car model id")),
    responses(
        (status = 200, description = "The car model.", body = CarModelDto),
        (status = 404, description = "Unknown id or unpublished model.", body = ErrorResponse)
    ),
    tag = "Car Models"
)]
pub async fn get_car_model(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(actor): MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<CarModelDto>> {
    state
        .services
        .car_model_queries
        .get_car_model_by_id(actor.as_ref(), GetCarModelByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/car-models",
    request_body = CreateCarModelRequest,
    responses(
        (status = 201, description = "Car model created.", body = CarModelDto),
        (status = 400, description = "Missing or invalid fields.", body = ErrorResponse),
        (status = 401, description = "Unauthorized.", body = ErrorResponse),
        (status = 409, description = "Slug already exists.", body = ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Car Models"
)]
pub async fn create_car_model(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Json(payload): Json<CreateCarModelRequest>,
) -> HttpResult<(StatusCode, Json<CarModelDto>)> {
    let command = CreateCarModelCommand {
        name: payload.name,
        slug: payload.slug,
        category: payload.category,
        tagline: payload.tagline,
        description: payload.description,
        starting_price: payload.starting_price,
        main_image_url: payload.main_image_url,
        brochure_url: payload.brochure_url,
        features: payload.features,
        colors: into_inputs(payload.colors),
        gallery: into_inputs(payload.gallery),
        published: payload.published,
        display_order: payload.display_order,
    };

    let model = state
        .services
        .car_model_commands
        .create_car_model(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(model)))
}

#[utoipa::path(
    put,
    path = "/api/v1/car-models/{id}",
    params(("id" = i64, Path, description = "Car model id")),
    request_body = UpdateCarModelRequest,
    responses(
        (status = 200, description = "Car model updated.", body = CarModelDto),
        (status = 400, description = "Invalid fields.", body = ErrorResponse),
        (status = 401, description = "Unauthorized.", body = ErrorResponse),
        (status = 404, description = "Car model not found.", body = ErrorResponse),
        (status = 409, description = "Slug already exists.", body = ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Car Models"
)]
pub async fn update_car_model(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateCarModelRequest>,
) -> HttpResult<Json<CarModelDto>> {
    let command = UpdateCarModelCommand {
        id,
        name: payload.name,
        slug: payload.slug,
        category: payload.category,
        tagline: payload.tagline,
        description: payload.description,
        starting_price: payload.starting_price,
        main_image_url: payload.main_image_url,
        brochure_url: payload.brochure_url,
        features: payload.features,
        colors: payload.colors.map(into_inputs),
        gallery: payload.gallery.map(into_inputs),
        published: payload.published,
        display_order: payload.display_order,
    };

    state
        .services
        .car_model_commands
        .update_car_model(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/car-models/{id}",
    params(("id" = i64, Path, description = "Car model id")),
    responses(
        (status = 200, description = "Car model deleted.", body = StatusMessage),
        (status = 401, description = "Unauthorized.", body = ErrorResponse),
        (status = 404, description = "Car model not found.", body = ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Car Models"
)]
pub async fn delete_car_model(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusMessage>> {
    state
        .services
        .car_model_commands
        .delete_car_model(DeleteCarModelCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusMessage::deleted()))
}
