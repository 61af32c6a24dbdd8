//! Clinica database library
//!
//! sqlx-backed repositories over the `clinics`, `clinic_documents`, and
//! `clinic_settings` tables. Every document query is tenant-scoped: lookups
//! filter by both the record id and the clinic id, so a missed filter cannot
//! become a cross-tenant leak.

pub mod db;

pub use db::clinics::ClinicRepository;
pub use db::documents::DocumentRepository;
pub use db::settings::SettingsRepository;
