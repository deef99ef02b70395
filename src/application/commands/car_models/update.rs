// src/application/commands/car_models/update.rs
use super::{
    CarModelCommandService,
    inputs::{CarColorInput, GalleryImageInput, build_colors, build_gallery, check_price, clean_features},
};
use crate::{
    application::{
        dto::CarModelDto,
        error::{ApplicationError, ApplicationResult},
        validation::{FieldViolations, clearable},
    },
    domain::car_model::{CarModelCategory, CarModelId, CarModelName, CarModelSlug, CarModelUpdate},
};

/// Partial update. For `starting_price`, `Some(None)` clears the price.
#[derive(Debug, Clone, Default)]
pub struct UpdateCarModelCommand {
    pub id: i64,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub starting_price: Option<Option<i64>>,
    pub main_image_url: Option<String>,
    pub brochure_url: Option<String>,
    pub features: Option<Vec<String>>,
    pub colors: Option<Vec<CarColorInput>>,
    pub gallery: Option<Vec<GalleryImageInput>>,
    pub published: Option<bool>,
    pub display_order: Option<i32>,
}

impl CarModelCommandService {
    pub async fn update_car_model(
        &self,
        command: UpdateCarModelCommand,
    ) -> ApplicationResult<CarModelDto> {
        let id = CarModelId::new(command.id)?;
        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("car model not found"))?;

        let mut violations = FieldViolations::new();
        let name = violations.optional(command.name, CarModelName::new);
        let category = violations.optional(command.category, CarModelCategory::new);
        check_price(&mut violations, command.starting_price.flatten());
        let colors = command.colors.map(|c| build_colors(&mut violations, c));
        let gallery = command.gallery.map(|g| build_gallery(&mut violations, g));
        violations.finish()?;

        let mut update = CarModelUpdate::new(id, self.clock.now());

        let changed_name = name.as_ref().filter(|n| **n != existing.name);
        let slug = self
            .slugs
            .assign_for_update(
                command.id,
                existing.slug.as_str(),
                changed_name.map(CarModelName::as_str),
                command.slug.as_deref(),
            )
            .await?;
        if slug != existing.slug.as_str() {
            update.slug = Some(CarModelSlug::new(slug)?);
        }

        update.name = name;
        update.category = category;
        update.tagline = clearable(command.tagline);
        if command.description.is_some() {
            update.description = Some(self.clean_description(command.description)?);
        }
        update.starting_price = command.starting_price;
        update.main_image_url = clearable(command.main_image_url);
        update.brochure_url = clearable(command.brochure_url);
        update.features = command.features.map(clean_features);
        update.colors = colors;
        update.gallery = gallery;
        update.published = command.published;
        update.display_order = command.display_order;

        let updated = self
            .write_repo
            .update(update)
            .await?
            .ok_or_else(|| ApplicationError::not_found("car model not found"))?;

        tracing::info!(car_model_id = command.id, slug = %updated.slug, "car model updated");
        self.janitor
            .release_orphans(&existing.image_urls(), &updated.image_urls())
            .await;
        Ok(updated.into())
    }
}
