// src/infrastructure/repositories/postgres_article.rs
use super::error::{contains_pattern, map_sqlx};
use crate::domain::article::{
    Article, ArticleCategory, ArticleContent, ArticleExcerpt, ArticleId, ArticleListFilter,
    ArticleReadRepository, ArticleSlug, ArticleTitle, ArticleUpdate, ArticleWriteRepository,
    NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, title, slug, content, excerpt, category, featured_image_url, \
     featured_image_alt, youtube_url, published, published_at, meta_description, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    excerpt: String,
    category: String,
    featured_image_url: Option<String>,
    featured_image_alt: Option<String>,
    youtube_url: Option<String>,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    meta_description: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: ArticleSlug::new(row.slug)?,
            content: ArticleContent::new(row.content)?,
            excerpt: ArticleExcerpt::new(row.excerpt)?,
            category: ArticleCategory::new(row.category)?,
            featured_image_url: row.featured_image_url,
            featured_image_alt: row.featured_image_alt,
            youtube_url: row.youtube_url,
            published: row.published,
            published_at: row.published_at,
            meta_description: row.meta_description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn push_nullable(builder: &mut QueryBuilder<'_, Postgres>, column: &str, value: Option<Option<String>>) {
    if let Some(value) = value {
        builder.push(format!(", {column} = "));
        builder.push_bind(value);
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Option<Article>> {
        let NewArticle {
            title,
            slug,
            content,
            excerpt,
            category,
            featured_image_url,
            featured_image_alt,
            youtube_url,
            published,
            published_at,
            meta_description,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, slug, content, excerpt, category, featured_image_url,
                 featured_image_alt, youtube_url, published, published_at, meta_description,
                 created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(excerpt.as_str())
        .bind(category.as_str())
        .bind(featured_image_url)
        .bind(featured_image_alt)
        .bind(youtube_url)
        .bind(published)
        .bind(published_at)
        .bind(meta_description)
        .bind(created_at)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Option<Article>> {
        let ArticleUpdate {
            id,
            title,
            slug,
            content,
            excerpt,
            category,
            featured_image_url,
            featured_image_alt,
            youtube_url,
            meta_description,
            publish_state,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }
        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt.into_inner());
        }
        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category.into_inner());
        }
        push_nullable(&mut builder, "featured_image_url", featured_image_url);
        push_nullable(&mut builder, "featured_image_alt", featured_image_alt);
        push_nullable(&mut builder, "youtube_url", youtube_url);
        push_nullable(&mut builder, "meta_description", meta_description);

        if let Some(state) = publish_state {
            builder.push(", published = ");
            builder.push_bind(state.published);
            builder.push(", published_at = ");
            builder.push_bind(state.published_at);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {COLUMNS}"));

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}

impl PostgresArticleReadRepository {
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleListFilter) {
        let mut separated = " WHERE ";
        if filter.published_only {
            builder.push(separated);
            builder.push("published = TRUE");
            separated = " AND ";
        }
        if let Some(category) = &filter.category {
            builder.push(separated);
            builder.push("category = ");
            builder.push_bind(category.clone());
            separated = " AND ";
        }
        if let Some(search) = &filter.search {
            builder.push(separated);
            builder.push("title ILIKE ");
            builder.push_bind(contains_pattern(search));
        }
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {COLUMNS} FROM articles WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: &ArticleListFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let mut count: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM articles");
        Self::apply_filter(&mut count, filter);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM articles"));
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(page.limit());
        builder.push(" OFFSET ");
        builder.push_bind(page.offset());

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((articles, u64::try_from(total).unwrap_or_default()))
    }
}
