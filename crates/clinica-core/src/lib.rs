//! Clinica core library
//!
//! Shared domain models, configuration, and error types for the clinic
//! platform backend. Everything here is transport-agnostic; HTTP concerns
//! live in `clinica-api` and persistence concerns in `clinica-db`.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;
