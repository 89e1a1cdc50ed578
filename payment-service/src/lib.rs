use axum::{
    http::header,
    response::IntoResponse,
    routing::{get, post, put},
    extract::State,
    Router,
};
use common_http_errors::{ApiError, ApiResult};
use common_plugins::PluginManager;
use std::sync::Arc;

pub mod config;
pub mod errors;
pub mod payment_handlers;
pub mod plugin_handlers;

pub const SERVICE_NAME: &str = "payment-service";

#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<PluginManager>,
}

async fn metrics(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let body = state.manager.metrics().render().map_err(|e| ApiError::internal(e, None))?;
    Ok(([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body))
}

/// All routes of the service, without transport layers (CORS is added in `main`).
pub fn app(state: AppState) -> Router {
    use payment_handlers::*;
    use plugin_handlers::*;
    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route("/metrics", get(metrics))
        .route("/payments/:gateway/authorize", post(authorize_payment))
        .route("/payments/:gateway/capture", post(capture_payment))
        .route("/payments/:gateway/refund", post(refund_payment))
        .route("/payments/:gateway/void", post(void_payment))
        .route("/payments/:gateway/process", post(process_payment))
        .route("/payments/:gateway/customers/:customer_id/sources", get(list_payment_sources))
        .route("/plugins", get(list_plugins))
        .route("/plugins/:name/configuration", put(save_plugin_configuration))
        .with_state(state)
}
