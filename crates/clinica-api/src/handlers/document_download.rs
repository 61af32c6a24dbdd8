use crate::error::{ErrorResponse, HttpAppError};
use crate::services::DocumentService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

/// Signed URL response. The URL grants temporary read access without
/// exposing permanent credentials; expiry is enforced by the object store.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DownloadUrlResponse {
    pub success: bool,
    pub download_url: String,
    pub file_name: String,
}

#[utoipa::path(
    get,
    path = "/api/v0/clinics/{clinic_id}/documents/{id}/download",
    tag = "documents",
    params(
        ("clinic_id" = Uuid, Path, description = "Clinic ID"),
        ("id" = Uuid, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "Time-limited signed download URL", body = DownloadUrlResponse),
        (status = 404, description = "Document not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state),
    fields(clinic_id = %clinic_id, document_id = %id, operation = "download_document")
)]
pub async fn get_download_url(
    State(state): State<Arc<AppState>>,
    Path((clinic_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<DownloadUrlResponse>, HttpAppError> {
    let (download_url, file_name) = DocumentService::new(&state)
        .download_url(clinic_id, id)
        .await?;

    Ok(Json(DownloadUrlResponse {
        success: true,
        download_url,
        file_name,
    }))
}
