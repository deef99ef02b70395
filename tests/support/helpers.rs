// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::AUTHORIZATION};
use serde_json::Value;

use showroom_cms::application::ports::html::{HtmlSanitizer, SanitizeFailurePolicy};
use showroom_cms::application::services::{Adapters, ApplicationServices, Repositories};
use showroom_cms::infrastructure::{
    html::AmmoniaSanitizer, security::StaticTokenAuthenticator, util::DefaultSlugGenerator,
};
use showroom_cms::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};

use super::mocks::{
    FixedClock, InMemoryAboutPage, InMemoryArticles, InMemoryCarModels, InMemoryContacts,
    InMemoryHomepage, RecordingStorage,
};

pub const ADMIN_TOKEN: &str = "test-token";

/// Services wired to in-memory fakes, with handles kept for inspection.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub articles: Arc<InMemoryArticles>,
    pub car_models: Arc<InMemoryCarModels>,
    pub homepage: Arc<InMemoryHomepage>,
    pub contacts: Arc<InMemoryContacts>,
    pub storage: Arc<RecordingStorage>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_sanitizer(Arc::new(AmmoniaSanitizer::default()), SanitizeFailurePolicy::default())
    }

    pub fn with_sanitizer(
        html_sanitizer: Arc<dyn HtmlSanitizer>,
        policy: SanitizeFailurePolicy,
    ) -> Self {
        let articles = Arc::new(InMemoryArticles::default());
        let car_models = Arc::new(InMemoryCarModels::default());
        let homepage = Arc::new(InMemoryHomepage::default());
        let contacts = Arc::new(InMemoryContacts::default());
        let storage = Arc::new(RecordingStorage::default());

        let repos = Repositories {
            article_write: articles.clone(),
            article_read: articles.clone(),
            car_model_write: car_models.clone(),
            car_model_read: car_models.clone(),
            homepage: homepage.clone(),
            about: Arc::new(InMemoryAboutPage::default()),
            contact: contacts.clone(),
        };
        let adapters = Adapters {
            clock: Arc::new(FixedClock),
            slugger: Arc::new(DefaultSlugGenerator),
            html_sanitizer,
            storage: storage.clone(),
            authenticator: Arc::new(StaticTokenAuthenticator::new([("tester", ADMIN_TOKEN)])),
        };

        Self {
            services: Arc::new(ApplicationServices::new(repos, adapters, policy)),
            articles,
            car_models,
            homepage,
            contacts,
            storage,
        }
    }

    /// Router without the contact-form limiter; test requests carry no peer
    /// address for it to key on.
    pub fn router(&self) -> axum::Router {
        build_router(
            HttpState::new(Arc::clone(&self.services)),
            RouterOptions::default(),
        )
    }
}

pub async fn make_test_router() -> axum::Router {
    TestApp::new().router()
}

pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> String {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    msg_field.to_string()
}
