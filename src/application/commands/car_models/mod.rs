// src/application/commands/car_models/mod.rs
mod create;
mod delete;
mod inputs;
mod service;
mod update;

pub use create::CreateCarModelCommand;
pub use delete::DeleteCarModelCommand;
pub use inputs::{CarColorInput, GalleryImageInput};
pub use service::CarModelCommandService;
pub use update::UpdateCarModelCommand;
