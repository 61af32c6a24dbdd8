use crate::error::{ErrorResponse, HttpAppError};
use crate::services::DocumentService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use clinica_core::constants::CATEGORY_FILTER_ALL;
use clinica_core::models::DocumentResponse;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ListDocumentsQuery {
    category: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListDocumentsResponse {
    pub success: bool,
    pub documents: Vec<DocumentResponse>,
}

#[utoipa::path(
    get,
    path = "/api/v0/clinics/{clinic_id}/documents",
    tag = "documents",
    params(
        ("clinic_id" = Uuid, Path, description = "Clinic ID"),
        ("category" = Option<String>, Query, description = "Restrict to one category ('all' disables the filter)")
    ),
    responses(
        (status = 200, description = "Documents for this clinic, newest first", body = ListDocumentsResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state),
    fields(clinic_id = %clinic_id, operation = "list_documents")
)]
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
    Path(clinic_id): Path<Uuid>,
    Query(query): Query<ListDocumentsQuery>,
) -> Result<Json<ListDocumentsResponse>, HttpAppError> {
    let category = query
        .category
        .as_deref()
        .filter(|c| *c != CATEGORY_FILTER_ALL);

    let documents = DocumentService::new(&state)
        .list(clinic_id, category)
        .await?;

    Ok(Json(ListDocumentsResponse {
        success: true,
        documents: documents.into_iter().map(DocumentResponse::from).collect(),
    }))
}
