pub mod about;
pub mod articles;
pub mod car_models;
pub mod contact;
pub mod homepage;
pub mod media;
