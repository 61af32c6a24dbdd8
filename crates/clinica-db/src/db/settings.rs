//! Settings repository: one row per clinic, merged field-by-field on update.

use clinica_core::models::{ClinicSettingsRow, SettingsUpdate};
use clinica_core::AppError;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

const SETTINGS_COLUMNS: &str = "clinic_id, required_daily_hours, unpaid_break_minutes, \
     late_threshold_minutes, overtime_multiplier, annual_leave_days, sick_leave_days, \
     maternity_leave_days, paternity_leave_days, leave_carryover_allowed, business_hours";

/// Repository for the clinic_settings table.
#[derive(Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the settings row for one clinic. At most one row exists per the
    /// uniqueness constraint on clinic_id.
    #[tracing::instrument(skip(self), fields(db.table = "clinic_settings", clinic_id = %clinic_id))]
    pub async fn get(&self, clinic_id: Uuid) -> Result<Option<ClinicSettingsRow>, AppError> {
        let row = sqlx::query_as::<Postgres, ClinicSettingsRow>(&format!(
            r#"
            SELECT {SETTINGS_COLUMNS}
            FROM clinic_settings
            WHERE clinic_id = $1
            "#
        ))
        .bind(clinic_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Insert a settings row with only clinic_id set, relying on the column
    /// defaults for every other field. Fails when a row already exists (the
    /// auto-creation trigger may have won a race); callers treat that as a
    /// recoverable condition.
    #[tracing::instrument(
        skip(self),
        fields(db.table = "clinic_settings", db.operation = "insert", clinic_id = %clinic_id)
    )]
    pub async fn create_default(&self, clinic_id: Uuid) -> Result<ClinicSettingsRow, AppError> {
        let row = sqlx::query_as::<Postgres, ClinicSettingsRow>(&format!(
            r#"
            INSERT INTO clinic_settings (clinic_id)
            VALUES ($1)
            RETURNING {SETTINGS_COLUMNS}
            "#
        ))
        .bind(clinic_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Upsert keyed on the clinic_id uniqueness constraint.
    ///
    /// The insert arm lands defaults overlaid with the provided fields; the
    /// update arm overwrites only the provided fields (COALESCE against the
    /// stored value). `business_hours` replaces the whole object when given.
    #[tracing::instrument(
        skip(self, update),
        fields(db.table = "clinic_settings", db.operation = "upsert", clinic_id = %clinic_id)
    )]
    pub async fn upsert(&self, clinic_id: Uuid, update: &SettingsUpdate) -> Result<(), AppError> {
        let insert_row = update.merged_with_defaults(clinic_id);

        sqlx::query(
            r#"
            INSERT INTO clinic_settings (
                clinic_id, required_daily_hours, unpaid_break_minutes,
                late_threshold_minutes, overtime_multiplier, annual_leave_days,
                sick_leave_days, maternity_leave_days, paternity_leave_days,
                leave_carryover_allowed, business_hours
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (clinic_id) DO UPDATE SET
                required_daily_hours = COALESCE($12, clinic_settings.required_daily_hours),
                unpaid_break_minutes = COALESCE($13, clinic_settings.unpaid_break_minutes),
                late_threshold_minutes = COALESCE($14, clinic_settings.late_threshold_minutes),
                overtime_multiplier = COALESCE($15, clinic_settings.overtime_multiplier),
                annual_leave_days = COALESCE($16, clinic_settings.annual_leave_days),
                sick_leave_days = COALESCE($17, clinic_settings.sick_leave_days),
                maternity_leave_days = COALESCE($18, clinic_settings.maternity_leave_days),
                paternity_leave_days = COALESCE($19, clinic_settings.paternity_leave_days),
                leave_carryover_allowed = COALESCE($20, clinic_settings.leave_carryover_allowed),
                business_hours = COALESCE($21, clinic_settings.business_hours),
                updated_at = NOW()
            "#,
        )
        .bind(clinic_id)
        .bind(insert_row.required_daily_hours)
        .bind(insert_row.unpaid_break_minutes)
        .bind(insert_row.late_threshold_minutes)
        .bind(insert_row.overtime_multiplier)
        .bind(insert_row.annual_leave_days)
        .bind(insert_row.sick_leave_days)
        .bind(insert_row.maternity_leave_days)
        .bind(insert_row.paternity_leave_days)
        .bind(insert_row.leave_carryover_allowed)
        .bind(Json(&insert_row.business_hours))
        .bind(update.required_daily_hours)
        .bind(update.unpaid_break_minutes)
        .bind(update.late_threshold_minutes)
        .bind(update.overtime_multiplier)
        .bind(update.annual_leave_days)
        .bind(update.sick_leave_days)
        .bind(update.maternity_leave_days)
        .bind(update.paternity_leave_days)
        .bind(update.leave_carryover_allowed)
        .bind(update.business_hours.as_ref().map(Json))
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
