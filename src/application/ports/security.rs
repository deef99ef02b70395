// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::AdminPrincipal};
use async_trait::async_trait;

#[async_trait]
pub trait AdminAuthenticator: Send + Sync {
    /// Resolve a bearer token to the admin it was issued to.
    async fn authenticate(&self, token: &str) -> ApplicationResult<AdminPrincipal>;
}
