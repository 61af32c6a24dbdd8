/// Versioned API path prefix for all clinic-scoped routes.
pub const API_PREFIX: &str = "/api/v0";
