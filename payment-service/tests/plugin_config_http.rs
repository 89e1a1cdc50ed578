mod support;

use axum::http::StatusCode;
use serde_json::json;
use support::*;
use tower::ServiceExt;

#[tokio::test]
async fn lists_plugin_schema_without_values() {
    let resp = router().oneshot(json_request("GET", "/plugins", String::new(), "admin")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let v = body_json(resp).await;
    let plugin = &v[0];
    assert_eq!(plugin["name"], "Braintree Gateway");
    assert_eq!(plugin["active"], true);
    let fields = plugin["config_structure"].as_array().unwrap();
    assert_eq!(fields.len(), 6);
    assert_eq!(fields[0]["name"], "Public API key");
    assert_eq!(fields[0]["type"], "String");
    assert_eq!(fields[3]["type"], "Boolean");
    assert!(!v.to_string().contains("merchant-1"));
}

#[tokio::test]
async fn cashier_cannot_see_plugins() {
    let resp = router().oneshot(json_request("GET", "/plugins", String::new(), "cashier")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn saving_configuration_activates_plugin() {
    let app = router_with(braintree_settings(Some("merchant-1"), false));
    let update = json!({"active": true, "configuration": [{"name": "Use sandbox", "value": false}]}).to_string();
    let resp = app
        .clone()
        .oneshot(json_request("PUT", "/plugins/Braintree%20Gateway/configuration", update, "admin"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["active"], true);

    let req = json_request("POST", &format!("/payments/{BRAINTREE_PATH}/authorize"), payment_body("nonce"), "cashier");
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["raw_response"]["sandbox"], false);
}

#[tokio::test]
async fn invalid_configuration_400() {
    let update = json!({"configuration": [{"name": "Use sandbox", "value": "yes"}]}).to_string();
    let resp = router()
        .oneshot(json_request("PUT", "/plugins/Braintree%20Gateway/configuration", update, "super_admin"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.headers().get("X-Error-Code").unwrap(), "invalid_configuration");

    let update = json!({"configuration": [{"name": "Webhook secret", "value": "x"}]}).to_string();
    let resp = router()
        .oneshot(json_request("PUT", "/plugins/Braintree%20Gateway/configuration", update, "admin"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
