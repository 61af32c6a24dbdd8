//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use crate::services;
use clinica_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clinica Admin API",
        version = "0.1.0",
        description = "Clinic platform admin backend (v0): clinic-scoped document storage with signed download URLs, and per-clinic configurable settings. All endpoints are versioned under /api/v0/."
    ),
    paths(
        // Documents
        handlers::document_list::list_documents,
        handlers::document_upload::upload_document,
        handlers::document_get::get_document,
        handlers::document_download::get_download_url,
        handlers::document_delete::delete_document,
        // Settings
        handlers::settings_get::get_settings,
        handlers::settings_update::update_settings,
    ),
    components(schemas(
        models::DocumentResponse,
        models::UploadDocumentRequest,
        models::ClinicProfile,
        models::ClinicProfileUpdate,
        models::SettingsGroups,
        models::AttendanceSettings,
        models::LeaveSettings,
        models::AttendanceUpdate,
        models::LeaveUpdate,
        models::DayHours,
        services::settings::UpdateSettingsRequest,
        handlers::MessageResponse,
        handlers::document_list::ListDocumentsResponse,
        handlers::document_upload::UploadDocumentResponse,
        handlers::document_get::GetDocumentResponse,
        handlers::document_download::DownloadUrlResponse,
        handlers::settings_get::ClinicSettingsResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "documents", description = "Clinic-scoped document storage"),
        (name = "settings", description = "Per-clinic configurable settings")
    )
)]
pub struct ApiDoc;
