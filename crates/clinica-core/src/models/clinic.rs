use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// The clinic profile subset surfaced by the settings endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ClinicProfile {
    pub id: Uuid,
    pub name: String,
    pub town: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contact_name: Option<String>,
    pub status: String,
}

/// Sparse profile update: only fields present in the request overwrite stored
/// values. Email and status are intentionally not mutable through this path.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ClinicProfileUpdate {
    pub name: Option<String>,
    pub town: Option<String>,
    pub phone: Option<String>,
    pub contact_name: Option<String>,
}

impl ClinicProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.town.is_none()
            && self.phone.is_none()
            && self.contact_name.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_update_is_empty() {
        assert!(ClinicProfileUpdate::default().is_empty());
        let update = ClinicProfileUpdate {
            town: Some("Mossel Bay".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_profile_update_ignores_unknown_fields() {
        // email/status in the payload must not reach the update set
        let update: ClinicProfileUpdate = serde_json::from_str(
            r#"{"name":"Harbour Clinic","email":"x@y.z","status":"suspended"}"#,
        )
        .expect("deserialize");
        assert_eq!(update.name.as_deref(), Some("Harbour Clinic"));
        assert!(update.town.is_none());
    }
}
