//! Document repository: tenant-scoped CRUD for the clinic_documents table.
//!
//! Every lookup and delete filters by `id AND clinic_id`. Single-id access
//! paths do not exist in this repository; tenant scoping is not optional.

use clinica_core::models::Document;
use clinica_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

const DOCUMENT_COLUMNS: &str = "id, clinic_id, name, file_name, file_path, file_size, \
     file_type, category, uploaded_by, uploaded_by_name, created_at";

/// Repository for the clinic_documents table.
#[derive(Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new document row and return it.
    #[tracing::instrument(
        skip(self),
        fields(db.table = "clinic_documents", db.operation = "insert", clinic_id = %clinic_id)
    )]
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        clinic_id: Uuid,
        name: String,
        file_name: String,
        file_path: String,
        file_size: i64,
        file_type: String,
        category: String,
        uploaded_by: Option<Uuid>,
        uploaded_by_name: String,
    ) -> Result<Document, AppError> {
        let id = Uuid::new_v4();

        let document = sqlx::query_as::<Postgres, Document>(&format!(
            r#"
            INSERT INTO clinic_documents (
                id, clinic_id, name, file_name, file_path, file_size,
                file_type, category, uploaded_by, uploaded_by_name
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {DOCUMENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(clinic_id)
        .bind(&name)
        .bind(&file_name)
        .bind(&file_path)
        .bind(file_size)
        .bind(&file_type)
        .bind(&category)
        .bind(uploaded_by)
        .bind(&uploaded_by_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(document)
    }

    /// List a clinic's documents, newest first. `category` restricts to an
    /// exact match when given; callers pass `None` for the "all" sentinel.
    #[tracing::instrument(
        skip(self),
        fields(db.table = "clinic_documents", clinic_id = %clinic_id)
    )]
    pub async fn list(
        &self,
        clinic_id: Uuid,
        category: Option<&str>,
    ) -> Result<Vec<Document>, AppError> {
        let documents = match category {
            Some(category) => {
                sqlx::query_as::<Postgres, Document>(&format!(
                    r#"
                    SELECT {DOCUMENT_COLUMNS}
                    FROM clinic_documents
                    WHERE clinic_id = $1 AND category = $2
                    ORDER BY created_at DESC
                    "#
                ))
                .bind(clinic_id)
                .bind(category)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<Postgres, Document>(&format!(
                    r#"
                    SELECT {DOCUMENT_COLUMNS}
                    FROM clinic_documents
                    WHERE clinic_id = $1
                    ORDER BY created_at DESC
                    "#
                ))
                .bind(clinic_id)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(documents)
    }

    /// Fetch one document scoped to the clinic.
    #[tracing::instrument(
        skip(self),
        fields(db.table = "clinic_documents", clinic_id = %clinic_id, document_id = %id)
    )]
    pub async fn get(&self, clinic_id: Uuid, id: Uuid) -> Result<Option<Document>, AppError> {
        let document = sqlx::query_as::<Postgres, Document>(&format!(
            r#"
            SELECT {DOCUMENT_COLUMNS}
            FROM clinic_documents
            WHERE id = $1 AND clinic_id = $2
            "#
        ))
        .bind(id)
        .bind(clinic_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(document)
    }

    /// Delete one document row scoped to the clinic. Returns the number of
    /// rows removed (0 when the id did not belong to this clinic).
    #[tracing::instrument(
        skip(self),
        fields(db.table = "clinic_documents", db.operation = "delete", clinic_id = %clinic_id, document_id = %id)
    )]
    pub async fn delete(&self, clinic_id: Uuid, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM clinic_documents WHERE id = $1 AND clinic_id = $2")
            .bind(id)
            .bind(clinic_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
