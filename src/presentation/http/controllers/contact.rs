// src/presentation/http/controllers/contact.rs
use crate::application::{
    commands::contact::{
        DeleteContactSubmissionCommand, SubmitContactCommand, UpdateContactStatusCommand,
    },
    dto::{ContactSubmissionDto, Page},
    queries::contact::{GetContactSubmissionQuery, ListContactSubmissionsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use super::StatusMessage;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SubmitContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Name of the model the visitor asked about.
    pub car_model_interest: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateContactStatusRequest {
    /// One of `new`, `read`, `replied`, `archived`.
    #[schema(example = "read")]
    pub status: String,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContactListParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub status: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/v1/contact",
    request_body = SubmitContactRequest,
    responses(
        (status = 201, description = "Message received.", body = ContactSubmissionDto),
        (status = 400, description = "Missing or invalid fields.", body = ErrorResponse),
        (status = 429, description = "Too many submissions from this address."),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    tag = "Contact"
)]
pub async fn submit_contact(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SubmitContactRequest>,
) -> HttpResult<(StatusCode, Json<ContactSubmissionDto>)> {
    let command = SubmitContactCommand {
        name: payload.name,
        email: payload.email,
        phone: payload.phone,
        car_model_interest: payload.car_model_interest,
        message: payload.message,
    };

    let submission = state
        .services
        .contact_commands
        .submit(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(submission)))
}

#[utoipa::path(
    get,
    path = "/api/v1/contact-submissions",
    params(ContactListParams),
    responses(
        (status = 200, description = "Page of submissions, newest first.", body = crate::presentation::http::openapi::ContactSubmissionListResponse),
        (status = 400, description = "Unknown status filter.", body = ErrorResponse),
        (status = 401, description = "Unauthorized.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Contact"
)]
pub async fn list_contact_submissions(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Query(params): Query<ContactListParams>,
) -> HttpResult<Json<Page<ContactSubmissionDto>>> {
    let query = ListContactSubmissionsQuery {
        page: params.page,
        page_size: params.page_size,
        status: params.status,
    };

    state
        .services
        .contact_queries
        .list_submissions(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/contact-submissions/{id}",
    params(("id" = i64, Path, description = "Submission id")),
    responses(
        (status = 200, description = "The submission.", body = ContactSubmissionDto),
        (status = 401, description = "Unauthorized.", body = ErrorResponse),
        (status = 404, description = "Submission not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Contact"
)]
pub async fn get_contact_submission(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ContactSubmissionDto>> {
    state
        .services
        .contact_queries
        .get_submission(GetContactSubmissionQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/contact-submissions/{id}",
    params(("id" = i64, Path, description = "Submission id")),
    request_body = UpdateContactStatusRequest,
    responses(
        (status = 200, description = "Status updated.", body = ContactSubmissionDto),
        (status = 400, description = "Unknown status.", body = ErrorResponse),
        (status = 401, description = "Unauthorized.", body = ErrorResponse),
        (status = 404, description = "Submission not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Contact"
)]
pub async fn update_contact_status(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateContactStatusRequest>,
) -> HttpResult<Json<ContactSubmissionDto>> {
    state
        .services
        .contact_commands
        .update_status(UpdateContactStatusCommand {
            id,
            status: payload.status,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/contact-submissions/{id}",
    params(("id" = i64, Path, description = "Submission id")),
    responses(
        (status = 200, description = "Submission deleted.", body = StatusMessage),
        (status = 401, description = "Unauthorized.", body = ErrorResponse),
        (status = 404, description = "Submission not found.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Contact"
)]
pub async fn delete_contact_submission(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusMessage>> {
    state
        .services
        .contact_commands
        .delete(DeleteContactSubmissionCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusMessage::deleted()))
}
