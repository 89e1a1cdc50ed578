//! Shared test helper macro for stamping security headers onto a request.
//! Usage: test_request_headers!(req, roles="admin,cashier", tenant="<uuid>", user="<uuid>");
#[macro_export]
macro_rules! test_request_headers {
    ($req:expr, roles=$roles:expr, tenant=$tenant:expr, user=$user:expr) => {{
        let h = $req.headers_mut();
        h.insert("X-Tenant-ID", ::axum::http::HeaderValue::from_str($tenant).unwrap());
        h.insert("X-Roles", ::axum::http::HeaderValue::from_str($roles).unwrap());
        h.insert("X-User-ID", ::axum::http::HeaderValue::from_str($user).unwrap());
    }};
    ($req:expr, roles=$roles:expr, tenant=$tenant:expr) => {{
        let h = $req.headers_mut();
        h.insert("X-Tenant-ID", ::axum::http::HeaderValue::from_str($tenant).unwrap());
        h.insert("X-Roles", ::axum::http::HeaderValue::from_str($roles).unwrap());
    }};
}
