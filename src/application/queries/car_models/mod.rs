mod get;
mod list;
mod service;

pub use get::{GetCarModelByIdQuery, GetCarModelBySlugQuery};
pub use list::ListCarModelsQuery;
pub use service::CarModelQueryService;
