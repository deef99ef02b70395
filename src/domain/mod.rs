pub mod about;
pub mod article;
pub mod car_model;
pub mod contact;
pub mod errors;
pub mod homepage;
pub mod media;
pub mod pagination;
pub mod slug;
mod macros;
pub use macros::optional_text;
