//! Shared constants.

use std::time::Duration;

/// Validity window for presigned download URLs. Expiry is enforced by the
/// object store, not by this service.
pub const DOWNLOAD_URL_TTL: Duration = Duration::from_secs(3600);

/// Category assigned to documents uploaded without an explicit category.
pub const DEFAULT_DOCUMENT_CATEGORY: &str = "other";

/// Sentinel category value that disables category filtering on list calls.
pub const CATEGORY_FILTER_ALL: &str = "all";

/// Display name recorded when the uploader did not supply one.
pub const UNKNOWN_UPLOADER_NAME: &str = "Unknown";

/// Content type recorded when the uploader did not supply one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";
