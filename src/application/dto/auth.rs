use serde::Serialize;
use utoipa::ToSchema;

/// The admin a bearer token was issued to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AdminPrincipal {
    pub name: String,
}
