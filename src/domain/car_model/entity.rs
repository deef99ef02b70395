// src/domain/car_model/entity.rs
use crate::domain::car_model::value_objects::{
    CarModelCategory, CarModelId, CarModelName, CarModelSlug,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::media::{self, ImageRefs};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Paint option. Stored inside the `colors` JSON column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarColor {
    pub name: String,
    pub hex_code: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CarColor {
    pub fn new(
        name: impl Into<String>,
        hex_code: impl Into<String>,
        image_url: Option<String>,
    ) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::Validation("color name cannot be empty".into()));
        }
        let hex_code = hex_code.into().trim().to_ascii_uppercase();
        if !is_hex_color(&hex_code) {
            return Err(DomainError::Validation(format!(
                "color {name} needs a #RRGGBB hex code"
            )));
        }
        Ok(Self {
            name,
            hex_code,
            image_url: crate::domain::optional_text(image_url),
        })
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Gallery entry. Stored inside the `gallery` JSON column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

impl GalleryImage {
    pub fn new(url: impl Into<String>, alt: Option<String>) -> DomainResult<Self> {
        let url = url.into().trim().to_string();
        if url.is_empty() {
            return Err(DomainError::Validation("gallery image url cannot be empty".into()));
        }
        Ok(Self {
            url,
            alt: crate::domain::optional_text(alt),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CarModel {
    pub id: CarModelId,
    pub name: CarModelName,
    pub slug: CarModelSlug,
    pub category: CarModelCategory,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub starting_price: Option<i64>,
    pub main_image_url: Option<String>,
    pub brochure_url: Option<String>,
    pub features: Vec<String>,
    pub colors: Vec<CarColor>,
    pub gallery: Vec<GalleryImage>,
    pub published: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CarModel {
    pub fn image_urls(&self) -> ImageRefs {
        let mut refs = self
            .description
            .as_deref()
            .map(media::image_urls_in_html)
            .unwrap_or_default();
        media::push_optional(&mut refs, self.main_image_url.as_deref());
        for color in &self.colors {
            media::push_optional(&mut refs, color.image_url.as_deref());
        }
        for image in &self.gallery {
            media::push_optional(&mut refs, Some(&image.url));
        }
        refs
    }
}

#[derive(Debug, Clone)]
pub struct NewCarModel {
    pub name: CarModelName,
    pub slug: CarModelSlug,
    pub category: CarModelCategory,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub starting_price: Option<i64>,
    pub main_image_url: Option<String>,
    pub brochure_url: Option<String>,
    pub features: Vec<String>,
    pub colors: Vec<CarColor>,
    pub gallery: Vec<GalleryImage>,
    pub published: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update with the same conventions as article updates.
#[derive(Debug, Clone)]
pub struct CarModelUpdate {
    pub id: CarModelId,
    pub name: Option<CarModelName>,
    pub slug: Option<CarModelSlug>,
    pub category: Option<CarModelCategory>,
    pub tagline: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub starting_price: Option<Option<i64>>,
    pub main_image_url: Option<Option<String>>,
    pub brochure_url: Option<Option<String>>,
    pub features: Option<Vec<String>>,
    pub colors: Option<Vec<CarColor>>,
    pub gallery: Option<Vec<GalleryImage>>,
    pub published: Option<bool>,
    pub display_order: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

impl CarModelUpdate {
    pub fn new(id: CarModelId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            category: None,
            tagline: None,
            description: None,
            starting_price: None,
            main_image_url: None,
            brochure_url: None,
            features: None,
            colors: None,
            gallery: None,
            published: None,
            display_order: None,
            updated_at,
        }
    }

    pub fn apply_to(&self, mut model: CarModel) -> CarModel {
        if let Some(name) = &self.name {
            model.name = name.clone();
        }
        if let Some(slug) = &self.slug {
            model.slug = slug.clone();
        }
        if let Some(category) = &self.category {
            model.category = category.clone();
        }
        if let Some(tagline) = &self.tagline {
            model.tagline = tagline.clone();
        }
        if let Some(description) = &self.description {
            model.description = description.clone();
        }
        if let Some(price) = self.starting_price {
            model.starting_price = price;
        }
        if let Some(url) = &self.main_image_url {
            model.main_image_url = url.clone();
        }
        if let Some(url) = &self.brochure_url {
            model.brochure_url = url.clone();
        }
        if let Some(features) = &self.features {
            model.features = features.clone();
        }
        if let Some(colors) = &self.colors {
            model.colors = colors.clone();
        }
        if let Some(gallery) = &self.gallery {
            model.gallery = gallery.clone();
        }
        if let Some(published) = self.published {
            model.published = published;
        }
        if let Some(order) = self.display_order {
            model.display_order = order;
        }
        model.updated_at = self.updated_at;
        model
    }
}
