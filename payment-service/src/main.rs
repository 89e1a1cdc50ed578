use anyhow::Context;
use axum::http::{
    header::{ACCEPT, CONTENT_TYPE},
    HeaderName, HeaderValue, Method,
};
use braintree_gateway::{BraintreeGatewayPlugin, StubClient};
use common_observability::PluginMetrics;
use common_plugins::PluginManager;
use payment_service::{app, config::ServiceConfig, AppState};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServiceConfig::from_env()?;
    info!(?config, "Loaded payment-service configuration");
    if config.braintree_merchant_id.is_none() {
        warn!("BRAINTREE_MERCHANT_ID is not set; Braintree calls will be rejected until it is configured");
    }

    let braintree = BraintreeGatewayPlugin::new(config.braintree_configuration(), StubClient::new())
        .context("invalid Braintree plugin configuration")?;
    let mut manager = PluginManager::new(PluginMetrics::new());
    manager.register(Arc::new(braintree));

    let state = AppState { manager: Arc::new(manager) };

    let allowed_origins = [
        "http://localhost:3000",
        "http://localhost:3001",
        "http://localhost:5173",
    ];

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            allowed_origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok())
                .collect::<Vec<_>>(),
        ))
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([
            ACCEPT,
            CONTENT_TYPE,
            HeaderName::from_static("x-tenant-id"),
            HeaderName::from_static("x-roles"),
            HeaderName::from_static("x-user-id"),
            HeaderName::from_static("x-trace-id"),
        ]);

    let router = app(state).layer(cors);

    let addr = SocketAddr::new(config.host.parse().context("HOST must be an IP address")?, config.port);
    info!(%addr, "starting payment-service");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
