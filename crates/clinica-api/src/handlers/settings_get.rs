use crate::error::{ErrorResponse, HttpAppError};
use crate::services::SettingsService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use clinica_core::models::{ClinicProfile, SettingsGroups};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

/// Profile plus settings reshaped into the three semantic groups.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClinicSettingsResponse {
    pub clinic: ClinicProfile,
    pub settings: SettingsGroups,
}

#[utoipa::path(
    get,
    path = "/api/v0/clinics/{clinic_id}/settings",
    tag = "settings",
    params(
        ("clinic_id" = Uuid, Path, description = "Clinic ID")
    ),
    responses(
        (status = 200, description = "Clinic profile and settings", body = ClinicSettingsResponse),
        (status = 404, description = "Clinic not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(
    skip(state),
    fields(clinic_id = %clinic_id, operation = "get_settings")
)]
pub async fn get_settings(
    State(state): State<Arc<AppState>>,
    Path(clinic_id): Path<Uuid>,
) -> Result<Json<ClinicSettingsResponse>, HttpAppError> {
    let (clinic, settings) = SettingsService::new(&state).fetch(clinic_id).await?;

    Ok(Json(ClinicSettingsResponse { clinic, settings }))
}
