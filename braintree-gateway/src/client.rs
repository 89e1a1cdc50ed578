use async_trait::async_trait;
use common_plugins::{
    CreditCardInfo, CustomerSource, GatewayConfig, GatewayError, GatewayResponse, PaymentData,
    TransactionKind,
};
use serde_json::json;

/// Braintree client operations the plugin forwards to.
#[async_trait]
pub trait BraintreeClient: Send + Sync {
    async fn authorize(&self, payment_information: &PaymentData, config: &GatewayConfig) -> Result<GatewayResponse, GatewayError>;
    async fn capture(&self, payment_information: &PaymentData, config: &GatewayConfig) -> Result<GatewayResponse, GatewayError>;
    async fn refund(&self, payment_information: &PaymentData, config: &GatewayConfig) -> Result<GatewayResponse, GatewayError>;
    async fn void(&self, payment_information: &PaymentData, config: &GatewayConfig) -> Result<GatewayResponse, GatewayError>;
    async fn process_payment(&self, payment_information: &PaymentData, config: &GatewayConfig) -> Result<GatewayResponse, GatewayError>;
    async fn list_client_sources(&self, config: &GatewayConfig, customer_id: &str) -> Result<Vec<CustomerSource>, GatewayError>;
}

/// Deterministic client for local runs: approves everything it is asked to do.
pub struct StubClient;

impl StubClient { pub fn new() -> Self { Self } }

impl Default for StubClient {
    fn default() -> Self { Self::new() }
}

fn check_credentials(config: &GatewayConfig) -> Result<(), GatewayError> {
    if config.connection_params.merchant_id.is_empty() {
        return Err(GatewayError::Authentication("merchant id is not configured".into()));
    }
    Ok(())
}

fn approved(payment_information: &PaymentData, config: &GatewayConfig, kind: TransactionKind, prefix: &str) -> Result<GatewayResponse, GatewayError> {
    check_credentials(config)?;
    let token = payment_information
        .token
        .as_deref()
        .ok_or_else(|| GatewayError::Validation("payment token is required".into()))?;
    let amount_minor = payment_information
        .amount
        .to_minor_units()
        .map_err(|e| GatewayError::Validation(e.to_string()))?;
    Ok(GatewayResponse {
        is_success: true,
        action_required: false,
        kind,
        amount: payment_information.amount.clone(),
        currency: payment_information.currency.clone(),
        transaction_id: format!("{prefix}-{token}"),
        error: None,
        customer_id: payment_information.customer_id.clone(),
        card_info: None,
        raw_response: Some(json!({
            "sandbox": config.connection_params.sandbox_mode,
            "merchant_id": config.connection_params.merchant_id,
            "amount_minor": amount_minor,
        })),
        searchable_key: Some(token.to_string()),
    })
}

#[async_trait]
impl BraintreeClient for StubClient {
    async fn authorize(&self, payment_information: &PaymentData, config: &GatewayConfig) -> Result<GatewayResponse, GatewayError> {
        approved(payment_information, config, TransactionKind::Auth, "auth")
    }
    async fn capture(&self, payment_information: &PaymentData, config: &GatewayConfig) -> Result<GatewayResponse, GatewayError> {
        approved(payment_information, config, TransactionKind::Capture, "capture")
    }
    async fn refund(&self, payment_information: &PaymentData, config: &GatewayConfig) -> Result<GatewayResponse, GatewayError> {
        approved(payment_information, config, TransactionKind::Refund, "refund")
    }
    async fn void(&self, payment_information: &PaymentData, config: &GatewayConfig) -> Result<GatewayResponse, GatewayError> {
        approved(payment_information, config, TransactionKind::Void, "void")
    }
    async fn process_payment(&self, payment_information: &PaymentData, config: &GatewayConfig) -> Result<GatewayResponse, GatewayError> {
        if config.auto_capture {
            approved(payment_information, config, TransactionKind::Capture, "sale")
        } else {
            approved(payment_information, config, TransactionKind::Auth, "auth")
        }
    }
    async fn list_client_sources(&self, config: &GatewayConfig, customer_id: &str) -> Result<Vec<CustomerSource>, GatewayError> {
        check_credentials(config)?;
        if !config.store_customer {
            return Ok(Vec::new());
        }
        Ok(vec![CustomerSource {
            id: format!("{customer_id}-card"),
            gateway: config.gateway_name.clone(),
            credit_card_info: CreditCardInfo {
                last_4: "1111".into(),
                exp_year: 2030,
                exp_month: 12,
                brand: "visa".into(),
                name_on_card: None,
            },
        }])
    }
}
