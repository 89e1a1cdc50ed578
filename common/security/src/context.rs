use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{request::Parts, HeaderMap};
use tracing::Span;
use uuid::Uuid;
use serde::{Serialize, Deserialize};
use common_http_errors::ApiError;
use crate::roles::Role;
use crate::SecurityError;

/// Who is making the call, as far as the forwarded headers tell us.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Actor {
    pub id: Option<Uuid>,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityContext {
    pub tenant_id: Uuid,
    pub actor: Actor,
    pub roles: Vec<Role>,
    pub trace_id: Option<Uuid>,
}

pub struct SecurityCtxExtractor(pub SecurityContext);

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn uuid_header(headers: &HeaderMap, name: &str) -> Option<Uuid> {
    header_str(headers, name).and_then(|s| Uuid::parse_str(s.trim()).ok())
}

fn roles_from_headers(headers: &HeaderMap) -> Vec<Role> {
    header_str(headers, "X-Roles")
        .map(|csv| {
            csv
                .split(',')
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .filter_map(|s| s.parse::<Role>().ok())
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl<S> FromRequestParts<S> for SecurityCtxExtractor where S: Send + Sync {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let headers = &parts.headers;
        let tenant_id = uuid_header(headers, "X-Tenant-ID")
            .ok_or_else(|| SecurityError::MissingTenant.into_api_error("X-Tenant-ID", None))?;

        let actor = Actor {
            id: uuid_header(headers, "X-User-ID"),
            name: header_str(headers, "X-User-Name").map(str::to_owned),
            email: header_str(headers, "X-User-Email").map(str::to_owned),
        };
        let roles = roles_from_headers(headers);
        let trace_id = uuid_header(headers, "X-Trace-ID").or_else(|| Some(Uuid::new_v4()));

        Span::current().record("tenant_id", tracing::field::display(tenant_id));
        if let Some(tid) = trace_id.as_ref() {
            Span::current().record("trace_id", tracing::field::display(tid));
        }

        Ok(SecurityCtxExtractor(SecurityContext { tenant_id, actor, roles, trace_id }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn parses_roles_and_actor() {
        let req = Request::builder()
            .header("X-Tenant-ID", "11111111-1111-1111-1111-111111111111")
            .header("X-Roles", "cashier, admin,,")
            .header("X-User-ID", "22222222-2222-2222-2222-222222222222")
            .body(())
            .unwrap();
        let (mut parts, _) = req.into_parts();
        let SecurityCtxExtractor(ctx) = SecurityCtxExtractor::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(ctx.roles, vec![Role::Cashier, Role::Admin]);
        assert!(ctx.actor.id.is_some());
        assert!(ctx.trace_id.is_some());
    }

    #[tokio::test]
    async fn missing_tenant_is_rejected() {
        let (mut parts, _) = Request::builder().body(()).unwrap().into_parts();
        let err = SecurityCtxExtractor::from_request_parts(&mut parts, &()).await.err().unwrap();
        assert_eq!(err.code(), "missing_tenant_id");
        assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
    }
}
