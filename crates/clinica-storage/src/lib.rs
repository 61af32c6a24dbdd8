//! Clinica storage library
//!
//! Storage abstraction and backends for clinic document blobs: the `Storage`
//! trait plus S3 (`object_store`) and local filesystem implementations.
//!
//! # Storage key format
//!
//! Document keys are tenant-scoped: `{clinic_id}/{timestamp}_{sanitized
//! filename}`. Keys must not contain `..` or a leading `/`. Key generation
//! and filename sanitization are centralized in the [`keys`] module so the
//! layout cannot drift between backends or callers.

pub mod factory;
pub mod keys;
pub mod local;
pub mod s3;
pub mod traits;

pub use clinica_core::StorageBackend;
pub use factory::create_storage;
pub use keys::{document_key, sanitize_file_name};
pub use local::LocalStorage;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
