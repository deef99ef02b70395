// tests/e2e_http.rs
use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

mod support;
use support::{
    ADMIN_TOKEN, ArticleBuilder, TestApp, assert_error_response, make_test_router, read_json,
    request,
};

#[tokio::test]
async fn health_is_ok() {
    let app = make_test_router().await;

    let resp = app
        .oneshot(request(Method::GET, "/health", None, None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = make_test_router().await;

    let resp = app
        .oneshot(request(Method::GET, "/openapi.json", None, None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let doc = read_json(resp).await;
    assert!(doc["paths"]["/api/v1/articles"].is_object());
    assert!(doc["paths"]["/api/v1/contact"].is_object());
}

#[tokio::test]
async fn create_article_round_trips_over_http() {
    let app = TestApp::new();
    let router = app.router();

    let resp = router
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/articles",
            Some(ADMIN_TOKEN),
            Some(json!({
                "title": "GWM Tank 300 Launch",
                "content": "<p>Launch event</p>",
                "excerpt": "Launch",
                "category": "News",
                "published": 1
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = read_json(resp).await;
    assert_eq!(created["slug"], "gwm-tank-300-launch");
    assert_eq!(created["published"], 1);
    assert!(created["published_at"].is_string());

    let resp = router
        .oneshot(request(
            Method::GET,
            "/api/v1/articles/by-slug/gwm-tank-300-launch",
            None,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["id"], created["id"]);
}

#[tokio::test]
async fn update_publish_flag_and_delete() {
    let app = TestApp::new();
    app.articles.seed(ArticleBuilder::new().id(9).build());
    let router = app.router();

    let resp = router
        .clone()
        .oneshot(request(
            Method::PUT,
            "/api/v1/articles/9",
            Some(ADMIN_TOKEN),
            Some(json!({ "published": true, "featured_image_url": null })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["published"], 1);
    assert_eq!(body["slug"], "test-article");

    let resp = router
        .oneshot(request(
            Method::DELETE,
            "/api/v1/articles/9",
            Some(ADMIN_TOKEN),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!({ "status": "deleted" }));
    assert_eq!(app.articles.len(), 0);
}

#[tokio::test]
async fn public_article_list_is_paginated() {
    let app = TestApp::new();
    for id in 1..=3 {
        app.articles.seed(
            ArticleBuilder::new()
                .id(id)
                .slug(format!("post-{id}"))
                .published()
                .build(),
        );
    }

    let resp = app
        .router()
        .oneshot(request(
            Method::GET,
            "/api/v1/articles?page=2&page_size=2",
            None,
            None,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["total"], 3);
    assert_eq!(body["page"], 2);
    assert_eq!(body["page_count"], 2);
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn car_model_create_and_public_fetch() {
    let app = TestApp::new();
    let router = app.router();

    let resp = router
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/car-models",
            Some(ADMIN_TOKEN),
            Some(json!({
                "name": "Tank 300",
                "category": "SUV",
                "starting_price": 854000000,
                "colors": [{ "name": "Crystal Black", "hex_code": "#000000" }],
                "gallery": [{ "url": "https://cdn.test/uploads/g1.jpg" }],
                "published": "1"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = router
        .oneshot(request(
            Method::GET,
            "/api/v1/car-models/by-slug/tank-300",
            None,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["published"], 1);
    assert_eq!(body["colors"][0]["hex_code"], "#000000");
    assert_eq!(body["gallery"][0]["url"], "https://cdn.test/uploads/g1.jpg");
}

#[tokio::test]
async fn homepage_save_and_read() {
    let app = TestApp::new();
    let router = app.router();

    let resp = router
        .clone()
        .oneshot(request(
            Method::PUT,
            "/api/v1/homepage",
            Some(ADMIN_TOKEN),
            Some(json!({
                "hero": { "title": "Adventure awaits" },
                "sections": [
                    { "section_type": "banner", "image_url": "https://cdn.test/b.jpg" },
                    { "section_type": "default", "content": "<p>Hello</p>", "car_model_ids": [1] }
                ]
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = router
        .oneshot(request(Method::GET, "/api/v1/homepage", None, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = read_json(resp).await;
    assert_eq!(body["hero"]["title"], "Adventure awaits");
    assert_eq!(body["sections"][0]["section_type"], "banner");
    assert_eq!(body["sections"][1]["position"], 1);
    assert_eq!(body["sections"][1]["car_model_ids"], json!([1]));
}

#[tokio::test]
async fn contact_form_is_public_but_inbox_is_not() {
    let app = TestApp::new();
    let router = app.router();

    let resp = router
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/contact",
            None,
            Some(json!({
                "name": "Rina",
                "email": "rina@example.com",
                "message": "Please call me back."
            })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let id = read_json(resp).await["id"].as_i64().unwrap();

    let resp = router
        .clone()
        .oneshot(request(Method::GET, "/api/v1/contact-submissions", None, None))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let resp = router
        .clone()
        .oneshot(request(
            Method::PATCH,
            &format!("/api/v1/contact-submissions/{id}"),
            Some(ADMIN_TOKEN),
            Some(json!({ "status": "read" })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["status"], "read");

    let resp = router
        .oneshot(request(
            Method::GET,
            "/api/v1/contact-submissions?status=read",
            Some(ADMIN_TOKEN),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await["total"], 1);
}

#[tokio::test]
async fn media_upload_url_and_delete() {
    let app = TestApp::new();
    let router = app.router();

    let resp = router
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/media/upload-url",
            Some(ADMIN_TOKEN),
            Some(json!({ "file_name": "hero.png", "file_type": "image/png" })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let ticket = read_json(resp).await;
    let public_url = ticket["public_url"].as_str().unwrap().to_string();
    assert!(ticket["presigned_url"].as_str().unwrap().contains("X-Amz-Signature"));

    let resp = router
        .oneshot(request(
            Method::POST,
            "/api/v1/media/delete",
            Some(ADMIN_TOKEN),
            Some(json!({ "url": public_url })),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(read_json(resp).await, json!({ "success": true }));
    assert_eq!(app.storage.deleted(), vec![public_url]);
}
