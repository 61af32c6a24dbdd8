pub mod documents;
pub mod settings;

pub use documents::DocumentService;
pub use settings::SettingsService;
