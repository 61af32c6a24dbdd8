//! Domain route groups (documents, settings).
//!
//! Every route is clinic-scoped: the clinic id is always a path parameter.

use crate::constants::API_PREFIX;
use crate::handlers;
use crate::state::AppState;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

pub fn document_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            &format!("{API_PREFIX}/clinics/{{clinic_id}}/documents"),
            get(handlers::document_list::list_documents)
                .post(handlers::document_upload::upload_document),
        )
        .route(
            &format!("{API_PREFIX}/clinics/{{clinic_id}}/documents/{{id}}"),
            get(handlers::document_get::get_document)
                .delete(handlers::document_delete::delete_document),
        )
        .route(
            &format!("{API_PREFIX}/clinics/{{clinic_id}}/documents/{{id}}/download"),
            get(handlers::document_download::get_download_url),
        )
}

pub fn settings_routes() -> Router<Arc<AppState>> {
    Router::new().route(
        &format!("{API_PREFIX}/clinics/{{clinic_id}}/settings"),
        get(handlers::settings_get::get_settings).patch(handlers::settings_update::update_settings),
    )
}
