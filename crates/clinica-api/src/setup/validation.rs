//! Startup configuration validation

use anyhow::Result;
use clinica_core::Config;

/// Validate the loaded configuration before anything else initializes.
pub fn validate_config(config: &Config) -> Result<()> {
    config.validate()?;

    if config.max_document_size_bytes() == 0 {
        return Err(anyhow::anyhow!("MAX_DOCUMENT_SIZE_MB must be at least 1"));
    }

    Ok(())
}
