// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, CarModelDto, ContactSubmissionDto};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// Documented shape of `Page<ArticleDto>`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub items: Vec<ArticleDto>,
    pub page: u32,
    pub page_size: u32,
    pub page_count: u64,
    pub total: u64,
}

/// Documented shape of `Page<CarModelDto>`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CarModelListResponse {
    pub items: Vec<CarModelDto>,
    pub page: u32,
    pub page_size: u32,
    pub page_count: u64,
    pub total: u64,
}

/// Documented shape of `Page<ContactSubmissionDto>`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactSubmissionListResponse {
    pub items: Vec<ContactSubmissionDto>,
    pub page: u32,
    pub page_size: u32,
    pub page_count: u64,
    pub total: u64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::car_models::list_car_models,
        crate::presentation::http::controllers::car_models::get_car_model_by_slug,
        crate::presentation::http::controllers::car_models::get_car_model,
        crate::presentation::http::controllers::car_models::create_car_model,
        crate::presentation::http::controllers::car_models::update_car_model,
        crate::presentation::http::controllers::car_models::delete_car_model,
        crate::presentation::http::controllers::homepage::get_homepage,
        crate::presentation::http::controllers::homepage::save_homepage,
        crate::presentation::http::controllers::about::get_about_page,
        crate::presentation::http::controllers::about::save_about_page,
        crate::presentation::http::controllers::contact::submit_contact,
        crate::presentation::http::controllers::contact::list_contact_submissions,
        crate::presentation::http::controllers::contact::get_contact_submission,
        crate::presentation::http::controllers::contact::update_contact_status,
        crate::presentation::http::controllers::contact::delete_contact_submission,
        crate::presentation::http::controllers::media::request_upload_url,
        crate::presentation::http::controllers::media::delete_media,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleListResponse,
            CarModelListResponse,
            ContactSubmissionListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::StatusMessage,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::car_models::CarColorRequest,
            crate::presentation::http::controllers::car_models::GalleryImageRequest,
            crate::presentation::http::controllers::car_models::CreateCarModelRequest,
            crate::presentation::http::controllers::car_models::UpdateCarModelRequest,
            crate::presentation::http::controllers::homepage::HeroRequest,
            crate::presentation::http::controllers::homepage::FeatureCardRequest,
            crate::presentation::http::controllers::homepage::SectionRequest,
            crate::presentation::http::controllers::homepage::SaveHomepageRequest,
            crate::presentation::http::controllers::about::SaveAboutPageRequest,
            crate::presentation::http::controllers::contact::SubmitContactRequest,
            crate::presentation::http::controllers::contact::UpdateContactStatusRequest,
            crate::presentation::http::controllers::media::UploadUrlRequest,
            crate::presentation::http::controllers::media::DeleteMediaRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::CarModelDto,
            crate::application::dto::CarColorDto,
            crate::application::dto::GalleryImageDto,
            crate::application::dto::HomepageDto,
            crate::application::dto::HeroDto,
            crate::application::dto::SectionDto,
            crate::application::dto::SectionBodyDto,
            crate::application::dto::FeatureCardDto,
            crate::application::dto::AboutPageDto,
            crate::application::dto::ContactSubmissionDto,
            crate::application::dto::UploadTicketDto,
            crate::application::dto::DeleteMediaResultDto
        )
    ),
    tags(
        (name = "Articles", description = "News and blog articles"),
        (name = "Car Models", description = "Vehicle catalog"),
        (name = "Homepage", description = "Hero block and homepage sections"),
        (name = "About", description = "About page"),
        (name = "Contact", description = "Contact form and submission inbox"),
        (name = "Media", description = "Image upload coordination"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Showroom CMS API",
        description = "Content backend for a car dealership website",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.description = Some("Admin API token".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if !urls.iter().any(|url| url == "http://localhost:8080") {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_api_path() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/health",
            "/api/v1/articles",
            "/api/v1/articles/{id}",
            "/api/v1/articles/by-slug/{slug}",
            "/api/v1/car-models",
            "/api/v1/car-models/{id}",
            "/api/v1/car-models/by-slug/{slug}",
            "/api/v1/homepage",
            "/api/v1/about",
            "/api/v1/contact",
            "/api/v1/contact-submissions",
            "/api/v1/contact-submissions/{id}",
            "/api/v1/media/upload-url",
            "/api/v1/media/delete",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearerAuth"));
    }
}
