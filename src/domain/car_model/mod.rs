pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{CarColor, CarModel, CarModelUpdate, GalleryImage, NewCarModel};
pub use repository::{
    CarModelListFilter, CarModelReadRepository, CarModelSlugOwnership, CarModelWriteRepository,
};
pub use value_objects::{CarModelCategory, CarModelId, CarModelName, CarModelSlug};
