//! Shared key generation for storage backends.
//!
//! Key format: `{clinic_id}/{timestamp_millis}_{sanitized filename}`. The
//! timestamp component makes repeated uploads of the same filename land on
//! distinct keys; the sanitizer keeps client-supplied names out of the key
//! space unfiltered.

use uuid::Uuid;

/// Sanitize a client-supplied filename for use inside a storage key.
///
/// Only ASCII alphanumerics, `.` and `-` survive; every other character is
/// replaced with `_`.
pub fn sanitize_file_name(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Generate the storage key for a document upload.
///
/// `timestamp_millis` is the upload instant (unix epoch milliseconds); the
/// caller stamps it once so the key and the persisted metadata agree.
pub fn document_key(clinic_id: Uuid, timestamp_millis: i64, file_name: &str) -> String {
    format!(
        "{}/{}_{}",
        clinic_id,
        timestamp_millis,
        sanitize_file_name(file_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_safe_characters() {
        assert_eq!(sanitize_file_name("id.png"), "id.png");
        assert_eq!(sanitize_file_name("scan-2024.pdf"), "scan-2024.pdf");
    }

    #[test]
    fn test_sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize_file_name("my file (1).pdf"), "my_file__1_.pdf");
        assert_eq!(sanitize_file_name("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_file_name("naïve résumé.doc"), "na_ve_r_sum_.doc");
    }

    #[test]
    fn test_document_key_format() {
        let clinic_id = Uuid::new_v4();
        let key = document_key(clinic_id, 1733500000000, "id.png");
        assert_eq!(key, format!("{}/1733500000000_id.png", clinic_id));

        // pattern: {clinic_id}/<digits>_<sanitized name>
        let suffix = key.strip_prefix(&format!("{}/", clinic_id)).unwrap();
        let (ts, name) = suffix.split_once('_').unwrap();
        assert!(ts.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(name, "id.png");
    }

    #[test]
    fn test_document_key_sanitizes_filename_component() {
        let clinic_id = Uuid::new_v4();
        let key = document_key(clinic_id, 42, "weird name?.png");
        assert!(key.ends_with("/42_weird_name_.png"));
        assert!(!key.contains(' '));
        assert!(!key.contains('?'));
    }
}
