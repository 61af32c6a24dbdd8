use crate::error::{ErrorResponse, HttpAppError};
use crate::services::DocumentService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use clinica_core::models::DocumentResponse;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct GetDocumentResponse {
    pub success: bool,
    pub document: DocumentResponse,
}

#[utoipa::path(
    get,
    path = "/api/v0/clinics/{clinic_id}/documents/{id}",
    tag = "documents",
    params(
        ("clinic_id" = Uuid, Path, description = "Clinic ID"),
        ("id" = Uuid, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "Document metadata", body = GetDocumentResponse),
        (status = 404, description = "Document not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state),
    fields(clinic_id = %clinic_id, document_id = %id, operation = "get_document")
)]
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path((clinic_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<GetDocumentResponse>, HttpAppError> {
    let document = DocumentService::new(&state).get(clinic_id, id).await?;

    Ok(Json(GetDocumentResponse {
        success: true,
        document: DocumentResponse::from(document),
    }))
}
