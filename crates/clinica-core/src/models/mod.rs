pub mod clinic;
pub mod document;
pub mod settings;

pub use clinic::{ClinicProfile, ClinicProfileUpdate};
pub use document::{Document, DocumentResponse, UploadDocumentRequest};
pub use settings::{
    default_business_hours, AttendanceSettings, AttendanceUpdate, BusinessHours, ClinicSettingsRow,
    DayHours, LeaveSettings, LeaveUpdate, SettingsGroups, SettingsUpdate,
};
