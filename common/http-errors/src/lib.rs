use axum::{http::{StatusCode, HeaderValue}, response::{IntoResponse, Response}, Json};
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")] pub missing_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")] pub trace_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")] pub message: Option<String>,
}

#[derive(Debug)]
pub enum ApiError {
    ForbiddenMissingRole { role: &'static str, trace_id: Option<Uuid> },
    BadRequest { code: &'static str, trace_id: Option<Uuid>, message: Option<String> },
    NotFound { code: &'static str, trace_id: Option<Uuid> },
    /// Upstream payment gateway rejected or failed the call.
    BadGateway { code: &'static str, trace_id: Option<Uuid>, message: Option<String> },
    Internal { trace_id: Option<Uuid>, message: Option<String> },
}

impl ApiError {
    pub fn internal<E: std::fmt::Display>(e: E, trace_id: Option<Uuid>) -> Self { Self::Internal { trace_id, message: Some(e.to_string()) } }
    pub fn gateway<E: std::fmt::Display>(e: E, trace_id: Option<Uuid>) -> Self { Self::BadGateway { code: "gateway_error", trace_id, message: Some(e.to_string()) } }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ForbiddenMissingRole { .. } => StatusCode::FORBIDDEN,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code, also sent as `X-Error-Code`.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::ForbiddenMissingRole { .. } => "missing_role",
            ApiError::BadRequest { code, .. } | ApiError::NotFound { code, .. } | ApiError::BadGateway { code, .. } => *code,
            ApiError::Internal { .. } => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_code = self.code();
        let body = match self {
            ApiError::ForbiddenMissingRole { role, trace_id } =>
                ErrorBody { code: error_code.into(), missing_role: Some(role.into()), trace_id, message: None },
            ApiError::NotFound { trace_id, .. } =>
                ErrorBody { code: error_code.into(), missing_role: None, trace_id, message: None },
            ApiError::BadRequest { trace_id, message, .. }
            | ApiError::BadGateway { trace_id, message, .. }
            | ApiError::Internal { trace_id, message } =>
                ErrorBody { code: error_code.into(), missing_role: None, trace_id, message },
        };
        let mut resp = (status, Json(body)).into_response();
        if let Ok(val) = HeaderValue::from_str(error_code) {
            resp.headers_mut().insert("X-Error-Code", val);
        }
        resp
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
