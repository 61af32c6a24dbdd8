//! Repository and state wiring.

use crate::state::{AppState, DbState, DocumentState};
use clinica_core::Config;
use clinica_db::{ClinicRepository, DocumentRepository, SettingsRepository};
use clinica_storage::Storage;
use sqlx::PgPool;
use std::sync::Arc;

/// Build the application state from the connected pool and storage backend.
pub fn initialize_services(
    config: &Config,
    pool: PgPool,
    storage: Arc<dyn Storage>,
) -> Arc<AppState> {
    let db = DbState {
        pool: pool.clone(),
        clinics: ClinicRepository::new(pool.clone()),
        settings: SettingsRepository::new(pool.clone()),
    };

    let documents = DocumentState {
        repository: DocumentRepository::new(pool),
        storage,
        max_file_size: config.max_document_size_bytes(),
    };

    Arc::new(AppState {
        db,
        documents,
        is_production: config.is_production(),
        config: config.clone(),
    })
}
