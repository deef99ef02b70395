// src/infrastructure/repositories/postgres_car_model.rs
use super::error::{contains_pattern, map_sqlx};
use crate::domain::car_model::{
    CarColor, CarModel, CarModelCategory, CarModelId, CarModelListFilter, CarModelName,
    CarModelReadRepository, CarModelSlug, CarModelUpdate, CarModelWriteRepository, GalleryImage,
    NewCarModel,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COLUMNS: &str = "id, name, slug, category, tagline, description, starting_price, \
     main_image_url, brochure_url, features, colors, gallery, published, display_order, \
     created_at, updated_at";

#[derive(Clone)]
pub struct PostgresCarModelWriteRepository {
    pool: PgPool,
}

impl PostgresCarModelWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresCarModelReadRepository {
    pool: PgPool,
}

impl PostgresCarModelReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CarModelRow {
    id: i64,
    name: String,
    slug: String,
    category: String,
    tagline: Option<String>,
    description: Option<String>,
    starting_price: Option<i64>,
    main_image_url: Option<String>,
    brochure_url: Option<String>,
    features: Json<Vec<String>>,
    colors: Json<Vec<CarColor>>,
    gallery: Json<Vec<GalleryImage>>,
    published: bool,
    display_order: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CarModelRow> for CarModel {
    type Error = DomainError;

    fn try_from(row: CarModelRow) -> Result<Self, Self::Error> {
        Ok(CarModel {
            id: CarModelId::new(row.id)?,
            name: CarModelName::new(row.name)?,
            slug: CarModelSlug::new(row.slug)?,
            category: CarModelCategory::new(row.category)?,
            tagline: row.tagline,
            description: row.description,
            starting_price: row.starting_price,
            main_image_url: row.main_image_url,
            brochure_url: row.brochure_url,
            features: row.features.0,
            colors: row.colors.0,
            gallery: row.gallery.0,
            published: row.published,
            display_order: row.display_order,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl CarModelWriteRepository for PostgresCarModelWriteRepository {
    async fn insert(&self, model: NewCarModel) -> DomainResult<Option<CarModel>> {
        let row = sqlx::query_as::<_, CarModelRow>(&format!(
            "INSERT INTO car_models (name, slug, category, tagline, description, starting_price,
                 main_image_url, brochure_url, features, colors, gallery, published, display_order,
                 created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {COLUMNS}"
        ))
        .bind(model.name.as_str())
        .bind(model.slug.as_str())
        .bind(model.category.as_str())
        .bind(model.tagline)
        .bind(model.description)
        .bind(model.starting_price)
        .bind(model.main_image_url)
        .bind(model.brochure_url)
        .bind(Json(model.features))
        .bind(Json(model.colors))
        .bind(Json(model.gallery))
        .bind(model.published)
        .bind(model.display_order)
        .bind(model.created_at)
        .bind(model.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(CarModel::try_from).transpose()
    }

    async fn update(&self, update: CarModelUpdate) -> DomainResult<Option<CarModel>> {
        let CarModelUpdate {
            id,
            name,
            slug,
            category,
            tagline,
            description,
            starting_price,
            main_image_url,
            brochure_url,
            features,
            colors,
            gallery,
            published,
            display_order,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE car_models SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(name) = name {
            builder.push(", name = ");
            builder.push_bind(name.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category.into_inner());
        }
        if let Some(tagline) = tagline {
            builder.push(", tagline = ");
            builder.push_bind(tagline);
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description);
        }
        if let Some(price) = starting_price {
            builder.push(", starting_price = ");
            builder.push_bind(price);
        }
        if let Some(url) = main_image_url {
            builder.push(", main_image_url = ");
            builder.push_bind(url);
        }
        if let Some(url) = brochure_url {
            builder.push(", brochure_url = ");
            builder.push_bind(url);
        }
        if let Some(features) = features {
            builder.push(", features = ");
            builder.push_bind(Json(features));
        }
        if let Some(colors) = colors {
            builder.push(", colors = ");
            builder.push_bind(Json(colors));
        }
        if let Some(gallery) = gallery {
            builder.push(", gallery = ");
            builder.push_bind(Json(gallery));
        }
        if let Some(published) = published {
            builder.push(", published = ");
            builder.push_bind(published);
        }
        if let Some(order) = display_order {
            builder.push(", display_order = ");
            builder.push_bind(order);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(format!(" RETURNING {COLUMNS}"));

        let row = builder
            .build_query_as::<CarModelRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(CarModel::try_from).transpose()
    }

    async fn delete(&self, id: CarModelId) -> DomainResult<bool> {
        let result = sqlx::query("DELETE FROM car_models WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }
}

impl PostgresCarModelReadRepository {
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &CarModelListFilter) {
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
            builder.push("name ILIKE ");
            builder.push_bind(contains_pattern(search));
        }
    }
}

#[async_trait]
impl CarModelReadRepository for PostgresCarModelReadRepository {
    async fn find_by_id(&self, id: CarModelId) -> DomainResult<Option<CarModel>> {
        let row = sqlx::query_as::<_, CarModelRow>(&format!(
            "SELECT {COLUMNS} FROM car_models WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(CarModel::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &CarModelSlug) -> DomainResult<Option<CarModel>> {
        let row = sqlx::query_as::<_, CarModelRow>(&format!(
            "SELECT {COLUMNS} FROM car_models WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(CarModel::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: &CarModelListFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<CarModel>, u64)> {
        let mut count: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM car_models");
        Self::apply_filter(&mut count, filter);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM car_models"));
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY display_order ASC, name ASC, id ASC LIMIT ");
        builder.push_bind(page.limit());
        builder.push(" OFFSET ");
        builder.push_bind(page.offset());

        let rows = builder
            .build_query_as::<CarModelRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let models = rows
            .into_iter()
            .map(CarModel::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((models, u64::try_from(total).unwrap_or_default()))
    }
}
