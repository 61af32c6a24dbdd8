pub mod document_delete;
pub mod document_download;
pub mod document_get;
pub mod document_list;
pub mod document_upload;
pub mod settings_get;
pub mod settings_update;

use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgement body for operations that return no payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}
