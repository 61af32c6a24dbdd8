//! Clinic repository: the profile subset surfaced by the settings endpoints.

use clinica_core::models::{ClinicProfile, ClinicProfileUpdate};
use clinica_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Repository for the clinics table.
#[derive(Clone)]
pub struct ClinicRepository {
    pool: PgPool,
}

impl ClinicRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the profile subset for one clinic.
    #[tracing::instrument(skip(self), fields(db.table = "clinics", clinic_id = %clinic_id))]
    pub async fn get_profile(&self, clinic_id: Uuid) -> Result<Option<ClinicProfile>, AppError> {
        let profile = sqlx::query_as::<Postgres, ClinicProfile>(
            r#"
            SELECT id, name, town, email, phone, contact_name, status
            FROM clinics
            WHERE id = $1
            "#,
        )
        .bind(clinic_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Sparse profile update: absent fields keep their stored values. Email
    /// and status are not mutable through this path. Returns the number of
    /// rows touched (0 when the clinic does not exist).
    #[tracing::instrument(
        skip(self, update),
        fields(db.table = "clinics", db.operation = "update", clinic_id = %clinic_id)
    )]
    pub async fn update_profile(
        &self,
        clinic_id: Uuid,
        update: &ClinicProfileUpdate,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE clinics SET
                name = COALESCE($2, name),
                town = COALESCE($3, town),
                phone = COALESCE($4, phone),
                contact_name = COALESCE($5, contact_name),
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(clinic_id)
        .bind(&update.name)
        .bind(&update.town)
        .bind(&update.phone)
        .bind(&update.contact_name)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
