use crate::error::{ErrorResponse, HttpAppError};
use crate::handlers::MessageResponse;
use crate::services::DocumentService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    delete,
    path = "/api/v0/clinics/{clinic_id}/documents/{id}",
    tag = "documents",
    params(
        ("clinic_id" = Uuid, Path, description = "Clinic ID"),
        ("id" = Uuid, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "Document deleted", body = MessageResponse),
        (status = 404, description = "Document not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state),
    fields(clinic_id = %clinic_id, document_id = %id, operation = "delete_document")
)]
pub async fn delete_document(
    State(state): State<Arc<AppState>>,
    Path((clinic_id, id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MessageResponse>, HttpAppError> {
    DocumentService::new(&state).delete(clinic_id, id).await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Document deleted successfully".to_string(),
    }))
}
