use crate::errors::{manager_error, record, require};
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use common_http_errors::{ApiError, ApiResult};
use common_plugins::{CustomerSource, GatewayResponse, PaymentData, PaymentOperation};
use common_security::{Capability, SecurityCtxExtractor};
use tracing::info;

fn capability_for(operation: PaymentOperation) -> Capability {
    match operation {
        PaymentOperation::Refund | PaymentOperation::Void => Capability::PaymentRefund,
        _ => Capability::PaymentProcess,
    }
}

async fn run(
    state: AppState,
    sec: common_security::SecurityContext,
    gateway: String,
    operation: PaymentOperation,
    payment: PaymentData,
) -> ApiResult<Json<GatewayResponse>> {
    require(&state, &sec, capability_for(operation))?;
    if payment.gateway != gateway {
        return Err(record(&state, ApiError::BadRequest {
            code: "gateway_mismatch",
            trace_id: sec.trace_id,
            message: Some(format!("payment targets {} but was posted to {}", payment.gateway, gateway)),
        }));
    }
    info!(
        tenant_id = %sec.tenant_id,
        gateway = %gateway,
        method = operation.method_name(),
        order_id = payment.order_id.as_deref().unwrap_or("-"),
        amount = %payment.amount,
        "Dispatching payment to plugin"
    );
    state
        .manager
        .run_payment_method(&gateway, operation, &payment)
        .await
        .map(Json)
        .map_err(|e| record(&state, manager_error(e, sec.trace_id)))
}

pub async fn authorize_payment(
    State(state): State<AppState>,
    SecurityCtxExtractor(sec): SecurityCtxExtractor,
    Path(gateway): Path<String>,
    Json(payment): Json<PaymentData>,
) -> ApiResult<Json<GatewayResponse>> {
    run(state, sec, gateway, PaymentOperation::Authorize, payment).await
}

pub async fn capture_payment(
    State(state): State<AppState>,
    SecurityCtxExtractor(sec): SecurityCtxExtractor,
    Path(gateway): Path<String>,
    Json(payment): Json<PaymentData>,
) -> ApiResult<Json<GatewayResponse>> {
    run(state, sec, gateway, PaymentOperation::Capture, payment).await
}

pub async fn refund_payment(
    State(state): State<AppState>,
    SecurityCtxExtractor(sec): SecurityCtxExtractor,
    Path(gateway): Path<String>,
    Json(payment): Json<PaymentData>,
) -> ApiResult<Json<GatewayResponse>> {
    run(state, sec, gateway, PaymentOperation::Refund, payment).await
}

pub async fn void_payment(
    State(state): State<AppState>,
    SecurityCtxExtractor(sec): SecurityCtxExtractor,
    Path(gateway): Path<String>,
    Json(payment): Json<PaymentData>,
) -> ApiResult<Json<GatewayResponse>> {
    run(state, sec, gateway, PaymentOperation::Void, payment).await
}

pub async fn process_payment(
    State(state): State<AppState>,
    SecurityCtxExtractor(sec): SecurityCtxExtractor,
    Path(gateway): Path<String>,
    Json(payment): Json<PaymentData>,
) -> ApiResult<Json<GatewayResponse>> {
    run(state, sec, gateway, PaymentOperation::Process, payment).await
}

pub async fn list_payment_sources(
    State(state): State<AppState>,
    SecurityCtxExtractor(sec): SecurityCtxExtractor,
    Path((gateway, customer_id)): Path<(String, String)>,
) -> ApiResult<Json<Vec<CustomerSource>>> {
    require(&state, &sec, Capability::PaymentProcess)?;
    state
        .manager
        .list_payment_sources(&gateway, &customer_id)
        .await
        .map(Json)
        .map_err(|e| record(&state, manager_error(e, sec.trace_id)))
}
