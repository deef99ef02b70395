// src/presentation/http/controllers/media.rs
use crate::application::{
    commands::media::{DeleteMediaCommand, RequestUploadCommand},
    dto::{DeleteMediaResultDto, UploadTicketDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UploadUrlRequest {
    #[schema(example = "tank-300-front.jpg")]
    pub file_name: Option<String>,
    #[schema(example = "image/jpeg")]
    pub file_type: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct DeleteMediaRequest {
    /// Public URL previously returned by the upload endpoint.
    #[serde(default)]
    pub url: String,
}

#[utoipa::path(
    post,
    path = "/api/v1/media/upload-url",
    request_body = UploadUrlRequest,
    responses(
        (status = 200, description = "Presigned PUT URL and the resulting public URL.", body = UploadTicketDto),
        (status = 400, description = "Missing name or unsupported file type.", body = ErrorResponse),
        (status = 401, description = "Unauthorized.", body = ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Media"
)]
pub async fn request_upload_url(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Json(payload): Json<UploadUrlRequest>,
) -> HttpResult<Json<UploadTicketDto>> {
    let command = RequestUploadCommand {
        file_name: payload.file_name,
        file_type: payload.file_type,
    };

    state
        .services
        .media_commands
        .request_upload_url(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/media/delete",
    request_body = DeleteMediaRequest,
    responses(
        (status = 200, description = "Whether the object was removed.", body = DeleteMediaResultDto),
        (status = 400, description = "URL missing or not managed by this storage.", body = ErrorResponse),
        (status = 401, description = "Unauthorized.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Media"
)]
pub async fn delete_media(
    Extension(state): Extension<HttpState>,
    Authenticated(_admin): Authenticated,
    Json(payload): Json<DeleteMediaRequest>,
) -> HttpResult<Json<DeleteMediaResultDto>> {
    state
        .services
        .media_commands
        .delete_media(DeleteMediaCommand { url: payload.url })
        .await
        .into_http()
        .map(Json)
}
