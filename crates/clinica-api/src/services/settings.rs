//! Settings service: read-or-create with an in-memory default fallback, and
//! partial-merge updates across the clinic profile and settings rows.

use crate::state::AppState;
use clinica_core::models::{
    AttendanceUpdate, BusinessHours, ClinicProfile, ClinicProfileUpdate, ClinicSettingsRow,
    LeaveUpdate, SettingsGroups, SettingsUpdate,
};
use clinica_core::AppError;
use clinica_db::{ClinicRepository, SettingsRepository};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// PATCH body: every group is optional; within a group, every field is
/// optional. `business_hours`, when present, replaces the stored object
/// wholesale.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateSettingsRequest {
    pub clinic: Option<ClinicProfileUpdate>,
    pub attendance: Option<AttendanceUpdate>,
    pub leave: Option<LeaveUpdate>,
    pub business_hours: Option<BusinessHours>,
}

pub struct SettingsService<'a> {
    clinics: &'a ClinicRepository,
    settings: &'a SettingsRepository,
}

impl<'a> SettingsService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            clinics: &state.db.clinics,
            settings: &state.db.settings,
        }
    }

    /// Fetch the clinic profile and its settings, creating the settings row
    /// on first access.
    ///
    /// When the row is missing, an insert relying on column defaults is
    /// attempted. If that insert fails (lost race against the auto-creation
    /// trigger, or a transient store error), in-memory defaults are served
    /// WITHOUT being persisted; the next read repeats the creation attempt.
    pub async fn fetch(
        &self,
        clinic_id: Uuid,
    ) -> Result<(ClinicProfile, SettingsGroups), AppError> {
        let clinic = self
            .clinics
            .get_profile(clinic_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Clinic not found".to_string()))?;

        let row = match self.settings.get(clinic_id).await? {
            Some(row) => row,
            None => match self.settings.create_default(clinic_id).await {
                Ok(row) => row,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        clinic_id = %clinic_id,
                        "Settings row creation failed; serving in-memory defaults"
                    );
                    ClinicSettingsRow::default_for(clinic_id)
                }
            },
        };

        Ok((clinic, row.into_groups()))
    }

    /// Apply a partial update. The profile write runs first and is fatal on
    /// failure; nothing in the settings row is touched after an aborted
    /// profile write. An empty settings update set is a valid no-op.
    pub async fn update(
        &self,
        clinic_id: Uuid,
        request: UpdateSettingsRequest,
    ) -> Result<(), AppError> {
        if let Some(clinic) = request.clinic {
            if !clinic.is_empty() {
                self.clinics.update_profile(clinic_id, &clinic).await?;
            }
        }

        let update = SettingsUpdate::from_groups(
            request.attendance,
            request.leave,
            request.business_hours,
        );
        if !update.is_empty() {
            self.settings.upsert(clinic_id, &update).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_update_request_deserializes_partial_payload() {
        let request: UpdateSettingsRequest =
            serde_json::from_str(r#"{"attendance":{"overtime_multiplier":2.0}}"#).expect("parse");

        let attendance = request.attendance.expect("attendance group");
        assert_eq!(attendance.overtime_multiplier, Some(Decimal::new(2, 0)));
        assert!(attendance.late_threshold_minutes.is_none());
        assert!(request.leave.is_none());
        assert!(request.business_hours.is_none());
    }

    #[test]
    fn test_update_request_business_hours_is_whole_object() {
        let request: UpdateSettingsRequest = serde_json::from_str(
            r#"{"business_hours":{"sunday":{"open":"10:00","close":"14:00","closed":false}}}"#,
        )
        .expect("parse");

        let hours = request.business_hours.expect("business hours");
        // only the keys supplied by the caller survive; no per-weekday merge
        assert_eq!(hours.len(), 1);
        assert_eq!(hours["sunday"].open.as_deref(), Some("10:00"));
    }

    #[test]
    fn test_empty_payload_builds_empty_update_set() {
        let request: UpdateSettingsRequest = serde_json::from_str("{}").expect("parse");
        let update = SettingsUpdate::from_groups(
            request.attendance,
            request.leave,
            request.business_hours,
        );
        assert!(update.is_empty());
    }
}
