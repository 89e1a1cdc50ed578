use crate::{AppState, SERVICE_NAME};
use common_http_errors::ApiError;
use common_plugins::ManagerError;
use common_security::{Capability, SecurityContext, SecurityError};
use uuid::Uuid;

pub fn manager_error(err: ManagerError, trace_id: Option<Uuid>) -> ApiError {
    match err {
        ManagerError::Gateway(e) => ApiError::gateway(e, trace_id),
        ManagerError::PluginNotFound { .. } => ApiError::NotFound { code: "plugin_not_found", trace_id },
        ManagerError::PluginInactive { .. } => ApiError::NotFound { code: "plugin_inactive", trace_id },
        e @ ManagerError::NotImplemented { .. } => ApiError::BadRequest { code: "operation_not_supported", trace_id, message: Some(e.to_string()) },
        ManagerError::Configuration(e) => ApiError::BadRequest { code: "invalid_configuration", trace_id, message: Some(e.to_string()) },
    }
}

/// Count the error before handing it back to axum.
pub fn record(state: &AppState, err: ApiError) -> ApiError {
    state.manager.metrics().record_http_error(SERVICE_NAME, err.code(), err.status().as_u16());
    err
}

pub fn require(state: &AppState, sec: &SecurityContext, cap: Capability) -> Result<(), ApiError> {
    common_security::ensure_capability(sec, cap)
        .map_err(|e: SecurityError| record(state, e.into_api_error(cap.as_str(), sec.trace_id)))
}
