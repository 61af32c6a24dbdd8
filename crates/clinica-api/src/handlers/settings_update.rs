use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::handlers::MessageResponse;
use crate::services::settings::UpdateSettingsRequest;
use crate::services::SettingsService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

#[utoipa::path(
    patch,
    path = "/api/v0/clinics/{clinic_id}/settings",
    tag = "settings",
    params(
        ("clinic_id" = Uuid, Path, description = "Clinic ID")
    ),
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Settings updated; re-GET to observe the merged result", body = MessageResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state, request),
    fields(clinic_id = %clinic_id, operation = "update_settings")
)]
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Path(clinic_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateSettingsRequest>,
) -> Result<Json<MessageResponse>, HttpAppError> {
    SettingsService::new(&state)
        .update(clinic_id, request)
        .await?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Settings updated successfully".to_string(),
    }))
}
