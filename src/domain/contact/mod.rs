pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{ContactSubmission, NewContactSubmission};
pub use repository::ContactRepository;
pub use value_objects::{ContactStatus, ContactSubmissionId, EmailAddress, SenderName, Message};
