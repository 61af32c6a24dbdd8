//! Application state and sub-state extractors.
//!
//! AppState is split into domain sub-states so handlers can extract only what
//! they need via Axum's `FromRef`, and to avoid a single god object with
//! duplicate repositories.

use clinica_core::Config;
use clinica_db::{ClinicRepository, DocumentRepository, SettingsRepository};
use clinica_storage::Storage;
use sqlx::PgPool;
use std::sync::Arc;

// ----- Sub-state types -----

/// Database pool and the repositories behind the settings endpoints.
#[derive(Clone)]
pub struct DbState {
    pub pool: PgPool,
    pub clinics: ClinicRepository,
    pub settings: SettingsRepository,
}

/// Document repository, blob storage, and upload limits.
#[derive(Clone)]
pub struct DocumentState {
    pub repository: DocumentRepository,
    pub storage: Arc<dyn Storage>,
    pub max_file_size: usize,
}

// ----- AppState -----

/// Main application state: aggregates sub-states for dependency injection.
#[derive(Clone)]
pub struct AppState {
    pub db: DbState,
    pub documents: DocumentState,
    pub config: Config,
    pub is_production: bool,
}

// ----- FromRef for sub-state extraction -----

impl axum::extract::FromRef<Arc<AppState>> for DbState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.db.clone()
    }
}

impl axum::extract::FromRef<Arc<AppState>> for DocumentState {
    fn from_ref(state: &Arc<AppState>) -> Self {
        state.documents.clone()
    }
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
