// tests/article_service_tests.rs
use std::sync::Arc;

use showroom_cms::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::AdminPrincipal,
    error::ApplicationError,
    ports::html::SanitizeFailurePolicy,
    queries::articles::{GetArticleBySlugQuery, ListArticlesQuery},
};

mod support;
use support::{ArticleBuilder, CDN_BASE, FIXED_NOW, FailingSanitizer, TestApp};

fn launch_command() -> CreateArticleCommand {
    CreateArticleCommand {
        title: Some("GWM Tank 300 Launch".into()),
        content: Some("<p>Launch event</p>".into()),
        excerpt: Some("Launch".into()),
        category: Some("News".into()),
        ..CreateArticleCommand::default()
    }
}

fn admin() -> AdminPrincipal {
    AdminPrincipal {
        name: "tester".into(),
    }
}

#[tokio::test]
async fn create_derives_slug_and_starts_as_draft() {
    let app = TestApp::new();

    let article = app
        .services
        .article_commands
        .create_article(launch_command())
        .await
        .unwrap();

    assert_eq!(article.slug, "gwm-tank-300-launch");
    assert!(!article.published);
    assert!(article.published_at.is_none());
    assert_eq!(article.content, "<p>Launch event</p>");
    assert_eq!(article.created_at, *FIXED_NOW);
}

#[tokio::test]
async fn publishing_sets_timestamp_and_keeps_slug() {
    let app = TestApp::new();
    let created = app
        .services
        .article_commands
        .create_article(launch_command())
        .await
        .unwrap();

    let updated = app
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: created.id,
            published: Some(true),
            ..UpdateArticleCommand::default()
        })
        .await
        .unwrap();

    assert!(updated.published);
    assert_eq!(updated.published_at, Some(*FIXED_NOW));
    assert_eq!(updated.slug, created.slug);
}

#[tokio::test]
async fn unpublishing_clears_timestamp() {
    let app = TestApp::new();
    app.articles.seed(ArticleBuilder::new().id(3).published().build());

    let updated = app
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: 3,
            published: Some(false),
            ..UpdateArticleCommand::default()
        })
        .await
        .unwrap();

    assert!(!updated.published);
    assert!(updated.published_at.is_none());
}

#[tokio::test]
async fn identical_titles_get_distinct_slugs() {
    let app = TestApp::new();
    let commands = &app.services.article_commands;

    let first = commands.create_article(launch_command()).await.unwrap();
    let second = commands.create_article(launch_command()).await.unwrap();

    assert_eq!(first.slug, "gwm-tank-300-launch");
    assert_eq!(
        second.slug,
        format!("gwm-tank-300-launch-{}", FIXED_NOW.timestamp_millis())
    );
}

#[tokio::test]
async fn title_change_regenerates_slug_but_body_edit_does_not() {
    let app = TestApp::new();
    let commands = &app.services.article_commands;
    let created = commands.create_article(launch_command()).await.unwrap();

    let body_only = commands
        .update_article(UpdateArticleCommand {
            id: created.id,
            content: Some("<p>Updated body</p>".into()),
            ..UpdateArticleCommand::default()
        })
        .await
        .unwrap();
    assert_eq!(body_only.slug, "gwm-tank-300-launch");
    assert_eq!(body_only.content, "<p>Updated body</p>");

    let retitled = commands
        .update_article(UpdateArticleCommand {
            id: created.id,
            title: Some("Tank 500 Arrives".into()),
            ..UpdateArticleCommand::default()
        })
        .await
        .unwrap();
    assert_eq!(retitled.slug, "tank-500-arrives");
}

#[tokio::test]
async fn slug_owned_by_another_article_gets_id_suffix() {
    let app = TestApp::new();
    app.articles.seed(ArticleBuilder::new().id(1).slug("taken").build());
    app.articles.seed(ArticleBuilder::new().id(2).slug("mine").build());

    let updated = app
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: 2,
            slug: Some("taken".into()),
            ..UpdateArticleCommand::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.slug, "taken-2");
}

#[tokio::test]
async fn delete_of_unknown_article_is_not_found() {
    let app = TestApp::new();
    app.articles.seed(ArticleBuilder::new().id(1).build());

    let err = app
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id: 999 })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
    assert_eq!(app.articles.len(), 1);
}

#[tokio::test]
async fn create_reports_every_missing_field_at_once() {
    let app = TestApp::new();

    let err = app
        .services
        .article_commands
        .create_article(CreateArticleCommand::default())
        .await
        .unwrap_err();

    let ApplicationError::Validation(message) = &err else {
        panic!("expected validation error, got {err:?}");
    };
    for field in ["title", "content", "excerpt", "category"] {
        assert!(message.contains(field), "{field} missing from `{message}`");
    }
    assert_eq!(app.articles.len(), 0);
}

#[tokio::test]
async fn content_is_sanitized_before_storage() {
    let app = TestApp::new();

    let article = app
        .services
        .article_commands
        .create_article(CreateArticleCommand {
            content: Some("<script>alert(1)</script><p>hi</p>".into()),
            ..launch_command()
        })
        .await
        .unwrap();

    assert_eq!(article.content, "<p>hi</p>");
}

#[tokio::test]
async fn sanitizer_failure_passes_input_through_by_default() {
    let app = TestApp::with_sanitizer(Arc::new(FailingSanitizer), SanitizeFailurePolicy::Passthrough);

    let article = app
        .services
        .article_commands
        .create_article(CreateArticleCommand {
            content: Some("<p onclick=\"x()\">raw</p>".into()),
            ..launch_command()
        })
        .await
        .unwrap();

    assert_eq!(article.content, "<p onclick=\"x()\">raw</p>");
}

#[tokio::test]
async fn sanitizer_failure_rejects_write_under_reject_policy() {
    let app = TestApp::with_sanitizer(Arc::new(FailingSanitizer), SanitizeFailurePolicy::Reject);

    let err = app
        .services
        .article_commands
        .create_article(launch_command())
        .await
        .unwrap_err();

    assert!(
        matches!(&err, ApplicationError::Validation(msg) if msg == "content could not be sanitized"),
        "unexpected error: {err:?}"
    );
    assert_eq!(app.articles.len(), 0);
}

#[tokio::test]
async fn clearing_featured_image_releases_managed_object() {
    let app = TestApp::new();
    let cover = format!("{CDN_BASE}uploads/2024/05/cover.jpg");
    app.articles
        .seed(ArticleBuilder::new().id(4).featured_image(cover.clone()).build());

    let updated = app
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id: 4,
            featured_image_url: Some(String::new()),
            ..UpdateArticleCommand::default()
        })
        .await
        .unwrap();

    assert!(updated.featured_image_url.is_none());
    assert_eq!(app.storage.deleted(), vec![cover]);
}

#[tokio::test]
async fn delete_releases_only_managed_images() {
    let app = TestApp::new();
    let inline = format!("{CDN_BASE}uploads/2024/05/inline.jpg");
    app.articles.seed(
        ArticleBuilder::new()
            .id(5)
            .content(format!(
                r#"<p>x</p><img src="{inline}"><img src="https://elsewhere.test/a.png">"#
            ))
            .build(),
    );

    app.services
        .article_commands
        .delete_article(DeleteArticleCommand { id: 5 })
        .await
        .unwrap();

    assert_eq!(app.storage.deleted(), vec![inline]);
    assert!(app.articles.get(5).is_none());
}

#[tokio::test]
async fn storage_failure_during_cleanup_does_not_fail_delete() {
    let app = TestApp::new();
    app.storage.fail_deletes();
    app.articles.seed(
        ArticleBuilder::new()
            .id(6)
            .featured_image(format!("{CDN_BASE}uploads/a.jpg"))
            .build(),
    );

    let result = app
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id: 6 })
        .await;

    assert!(result.is_ok());
    assert!(app.articles.get(6).is_none());
}

#[tokio::test]
async fn drafts_are_hidden_from_public_readers() {
    let app = TestApp::new();
    app.articles
        .seed(ArticleBuilder::new().id(1).slug("draft").build());
    app.articles.seed(
        ArticleBuilder::new()
            .id(2)
            .slug("live")
            .title("Live")
            .published()
            .build(),
    );
    let queries = &app.services.article_queries;

    let public = queries
        .list_articles(None, ListArticlesQuery::default())
        .await
        .unwrap();
    assert_eq!(public.total, 1);
    assert_eq!(public.items[0].slug, "live");

    let err = queries
        .get_article_by_slug(None, GetArticleBySlugQuery { slug: "draft".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let admin = admin();
    let found = queries
        .get_article_by_slug(Some(&admin), GetArticleBySlugQuery { slug: "draft".into() })
        .await
        .unwrap();
    assert_eq!(found.id, 1);

    let err = queries
        .list_articles(
            None,
            ListArticlesQuery {
                include_drafts: true,
                ..ListArticlesQuery::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn list_filters_by_category_and_search() {
    let app = TestApp::new();
    app.articles.seed(
        ArticleBuilder::new()
            .id(1)
            .slug("a")
            .title("Tank 300 review")
            .category("Review")
            .published()
            .build(),
    );
    app.articles.seed(
        ArticleBuilder::new()
            .id(2)
            .slug("b")
            .title("Dealer opening")
            .category("News")
            .published()
            .build(),
    );
    app.articles.seed(
        ArticleBuilder::new()
            .id(3)
            .slug("c")
            .title("TANK 500 teaser")
            .category("News")
            .published()
            .build(),
    );
    let queries = &app.services.article_queries;

    let news = queries
        .list_articles(
            None,
            ListArticlesQuery {
                category: Some("News".into()),
                ..ListArticlesQuery::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(news.total, 2);

    let tanks = queries
        .list_articles(
            None,
            ListArticlesQuery {
                category: Some("News".into()),
                search: Some("tank".into()),
                ..ListArticlesQuery::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(tanks.total, 1);
    assert_eq!(tanks.items[0].id, 3);
}
