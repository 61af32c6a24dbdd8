use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::services::DocumentService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use clinica_core::models::{DocumentResponse, UploadDocumentRequest};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadDocumentResponse {
    pub success: bool,
    pub document: DocumentResponse,
}

#[utoipa::path(
    post,
    path = "/api/v0/clinics/{clinic_id}/documents",
    tag = "documents",
    params(
        ("clinic_id" = Uuid, Path, description = "Clinic ID")
    ),
    request_body = UploadDocumentRequest,
    responses(
        (status = 200, description = "Document uploaded successfully", body = UploadDocumentResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, request),
    fields(clinic_id = %clinic_id, operation = "upload_document")
)]
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    Path(clinic_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UploadDocumentRequest>,
) -> Result<Json<UploadDocumentResponse>, HttpAppError> {
    let document = DocumentService::new(&state)
        .upload(clinic_id, request)
        .await?;

    Ok(Json(UploadDocumentResponse {
        success: true,
        document: DocumentResponse::from(document),
    }))
}
