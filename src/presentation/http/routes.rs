// src/presentation/http/routes.rs
use crate::presentation::http::middleware::{RateLimitSettings, rate_limit_layer};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{about, articles, car_models, contact, homepage, media},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Knobs the router needs from configuration.
#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Browser origins allowed by CORS. Empty allows any origin.
    pub allowed_origins: Vec<String>,
    /// Limiter for the public contact form. `None` disables it.
    pub contact_rate_limit: Option<RateLimitSettings>,
}

pub fn build_router(state: HttpState, options: RouterOptions) -> Router {
    let cors = cors_layer(&options.allowed_origins);

    let mut contact_form = Router::new().route("/api/v1/contact", post(contact::submit_contact));
    if let Some(layer) = options.contact_rate_limit.and_then(rate_limit_layer) {
        contact_form = contact_form.layer(layer);
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/v1/articles/by-slug/{slug}",
            get(articles::get_article_by_slug),
        )
        .route(
            "/api/v1/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/api/v1/car-models",
            get(car_models::list_car_models).post(car_models::create_car_model),
        )
        .route(
            "/api/v1/car-models/by-slug/{slug}",
            get(car_models::get_car_model_by_slug),
        )
        .route(
            "/api/v1/car-models/{id}",
            get(car_models::get_car_model)
                .put(car_models::update_car_model)
                .delete(car_models::delete_car_model),
        )
        .route(
            "/api/v1/homepage",
            get(homepage::get_homepage).put(homepage::save_homepage),
        )
        .route(
            "/api/v1/about",
            get(about::get_about_page).put(about::save_about_page),
        )
        .merge(contact_form)
        .route(
            "/api/v1/contact-submissions",
            get(contact::list_contact_submissions),
        )
        .route(
            "/api/v1/contact-submissions/{id}",
            get(contact::get_contact_submission)
                .patch(contact::update_contact_status)
                .delete(contact::delete_contact_submission),
        )
        .route("/api/v1/media/upload-url", post(media::request_upload_url))
        .route("/api/v1/media/delete", post(media::delete_media))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .max_age(Duration::from_secs(3600));

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        layer.allow_origin(Any).allow_headers(Any)
    } else {
        layer
            .allow_origin(AllowOrigin::list(origins))
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
