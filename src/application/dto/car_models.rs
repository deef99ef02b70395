use crate::domain::car_model::{CarColor, CarModel, GalleryImage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{serde_flag, serde_time};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CarColorDto {
    pub name: String,
    pub hex_code: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl From<CarColor> for CarColorDto {
    fn from(color: CarColor) -> Self {
        Self {
            name: color.name,
            hex_code: color.hex_code,
            image_url: color.image_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GalleryImageDto {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

impl From<GalleryImage> for GalleryImageDto {
    fn from(image: GalleryImage) -> Self {
        Self {
            url: image.url,
            alt: image.alt,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CarModelDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub category: String,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub starting_price: Option<i64>,
    pub main_image_url: Option<String>,
    pub brochure_url: Option<String>,
    pub features: Vec<String>,
    pub colors: Vec<CarColorDto>,
    pub gallery: Vec<GalleryImageDto>,
    #[serde(with = "serde_flag")]
    #[schema(value_type = u8, minimum = 0, maximum = 1)]
    pub published: bool,
    pub display_order: i32,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<CarModel> for CarModelDto {
    fn from(model: CarModel) -> Self {
        Self {
            id: model.id.into(),
            name: model.name.into_inner(),
            slug: model.slug.into_inner(),
            category: model.category.into_inner(),
            tagline: model.tagline,
            description: model.description,
            starting_price: model.starting_price,
            main_image_url: model.main_image_url,
            brochure_url: model.brochure_url,
            features: model.features,
            colors: model.colors.into_iter().map(Into::into).collect(),
            gallery: model.gallery.into_iter().map(Into::into).collect(),
            published: model.published,
            display_order: model.display_order,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
