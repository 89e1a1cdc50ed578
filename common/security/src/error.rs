use common_http_errors::ApiError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SecurityError {
    #[error("missing tenant identifier")]    MissingTenant,
    #[error("unauthorized - missing required role")]    Forbidden,
}

impl SecurityError {
    /// Map onto the shared HTTP envelope; `missing` names the capability that was checked.
    pub fn into_api_error(self, missing: &'static str, trace_id: Option<Uuid>) -> ApiError {
        match self {
            SecurityError::MissingTenant => ApiError::BadRequest { code: "missing_tenant_id", trace_id, message: Some(self.to_string()) },
            SecurityError::Forbidden => ApiError::ForbiddenMissingRole { role: missing, trace_id },
        }
    }
}
