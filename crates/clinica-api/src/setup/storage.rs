//! Storage backend setup

use anyhow::Result;
use clinica_core::Config;
use clinica_storage::{create_storage, Storage};
use std::sync::Arc;

/// Create the configured storage backend.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage = create_storage(config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize storage backend: {}", e))?;

    tracing::info!(backend = %storage.backend_type(), "Storage backend initialized");

    Ok(storage)
}
