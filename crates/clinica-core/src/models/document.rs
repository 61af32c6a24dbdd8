use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// One uploaded file belonging to a clinic.
///
/// `file_path` is the object-store key (`{clinic_id}/{timestamp}_{sanitized
/// filename}`); it is server-generated and never derived from raw client
/// input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Document {
    pub id: Uuid,
    pub clinic_id: Uuid,
    pub name: String,
    pub file_name: String,
    pub file_path: String,
    pub file_size: i64,
    pub file_type: String,
    pub category: String,
    pub uploaded_by: Option<Uuid>,
    pub uploaded_by_name: String,
    pub created_at: DateTime<Utc>,
}

/// Wire representation of a document returned by the API.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub name: String,
    pub file_name: String,
    pub file_path: String,
    pub file_size: i64,
    pub file_type: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_by: Option<Uuid>,
    pub uploaded_by_name: String,
    pub created_at: DateTime<Utc>,
}

/// Upload request body. The dashboard sends camelCase fields; `file_data` is
/// raw base64 or a `data:<mime>;base64,` URI.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadDocumentRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "fileName is required"))]
    pub file_name: String,
    #[validate(length(min = 1, message = "fileData is required"))]
    pub file_data: String,
    pub file_type: Option<String>,
    pub file_size: Option<i64>,
    pub category: Option<String>,
    pub uploaded_by: Option<Uuid>,
    pub uploaded_by_name: Option<String>,
}

impl From<Document> for DocumentResponse {
    fn from(doc: Document) -> Self {
        DocumentResponse {
            id: doc.id,
            name: doc.name,
            file_name: doc.file_name,
            file_path: doc.file_path,
            file_size: doc.file_size,
            file_type: doc.file_type,
            category: doc.category,
            uploaded_by: doc.uploaded_by,
            uploaded_by_name: doc.uploaded_by_name,
            created_at: doc.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_document(clinic_id: Uuid) -> Document {
        Document {
            id: Uuid::new_v4(),
            clinic_id,
            name: "Practice licence".to_string(),
            file_name: "licence.pdf".to_string(),
            file_path: format!("{}/1733500000000_licence.pdf", clinic_id),
            file_size: 204800,
            file_type: "application/pdf".to_string(),
            category: "compliance".to_string(),
            uploaded_by: None,
            uploaded_by_name: "Unknown".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_document_response_from_document() {
        let clinic_id = Uuid::new_v4();
        let doc = test_document(clinic_id);
        let doc_id = doc.id;
        let created_at = doc.created_at;

        let response = DocumentResponse::from(doc);

        assert_eq!(response.id, doc_id);
        assert_eq!(response.name, "Practice licence");
        assert_eq!(response.file_name, "licence.pdf");
        assert_eq!(response.category, "compliance");
        assert_eq!(response.file_size, 204800);
        assert_eq!(response.created_at, created_at);
        assert!(response.file_path.starts_with(&clinic_id.to_string()));
    }

    #[test]
    fn test_document_response_omits_absent_uploader() {
        let doc = test_document(Uuid::new_v4());
        let json = serde_json::to_value(DocumentResponse::from(doc)).expect("serialize");
        assert!(json.get("uploaded_by").is_none());
        assert_eq!(
            json.get("uploaded_by_name").and_then(|v| v.as_str()),
            Some("Unknown")
        );
    }
}
