#![allow(dead_code)]

use axum::{body::{to_bytes, Body}, http::Request, Router};
use braintree_gateway::{BraintreeGatewayPlugin, StubClient, PLUGIN_NAME};
use common_plugins::{ConfigItem, ConfigValue, PluginConfiguration, PluginManager};
use payment_service::{app, AppState};
use serde_json::{json, Value};
use std::sync::Arc;

pub const TENANT: &str = "11111111-1111-1111-1111-111111111111";
pub const USER: &str = "22222222-2222-2222-2222-222222222222";
pub const BRAINTREE_PATH: &str = "Braintree%20Gateway";

pub fn braintree_settings(merchant_id: Option<&str>, active: bool) -> PluginConfiguration {
    PluginConfiguration {
        name: PLUGIN_NAME.into(),
        active,
        configuration: vec![
            ConfigItem::new("Merchant ID", merchant_id.map(|m| ConfigValue::String(m.into()))),
            ConfigItem::new("Store customers card", Some(ConfigValue::Boolean(true))),
            ConfigItem::new("Automatic payment capture", Some(ConfigValue::Boolean(false))),
        ],
    }
}

pub fn router_with(settings: PluginConfiguration) -> Router {
    let mut manager = PluginManager::default();
    manager.register(Arc::new(BraintreeGatewayPlugin::new(settings, StubClient::new()).unwrap()));
    app(AppState { manager: Arc::new(manager) })
}

pub fn router() -> Router {
    router_with(braintree_settings(Some("merchant-1"), true))
}

pub fn payment_body(token: &str) -> String {
    json!({
        "gateway": PLUGIN_NAME,
        "amount": "25",
        "currency": "USD",
        "token": token,
        "order_id": "ord_77"
    })
    .to_string()
}

pub fn json_request(method: &str, uri: &str, body: String, roles: &str) -> Request<Body> {
    let mut req = Request::builder()
        .uri(uri)
        .method(method)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    common_security::test_request_headers!(req, roles=roles, tenant=TENANT, user=USER);
    req
}

pub async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = to_bytes(resp.into_body(), 1024 * 64).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
