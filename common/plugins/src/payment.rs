use common_money::NormalizedMoney;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Auth,
    Capture,
    Void,
    Refund,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressData {
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub street_address_1: String,
    pub street_address_2: String,
    pub city: String,
    pub city_area: String,
    pub postal_code: String,
    pub country: String,
    pub country_area: String,
    pub phone: String,
}

/// Payment information handed to a plugin for one lifecycle call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentData {
    pub gateway: String,
    pub amount: NormalizedMoney,
    pub currency: String,
    pub token: Option<String>,
    pub payment_id: Option<String>,
    pub order_id: Option<String>,
    pub customer_id: Option<String>,
    pub customer_email: Option<String>,
    pub customer_ip_address: Option<String>,
    #[serde(default)]
    pub reuse_source: bool,
    pub billing: Option<AddressData>,
    pub shipping: Option<AddressData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardInfo {
    pub last_4: String,
    pub exp_year: i32,
    pub exp_month: u8,
    pub brand: String,
    pub name_on_card: Option<String>,
}

/// A stored, reusable payment method of a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSource {
    pub id: String,
    pub gateway: String,
    pub credit_card_info: CreditCardInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub is_success: bool,
    #[serde(default)]
    pub action_required: bool,
    pub kind: TransactionKind,
    pub amount: NormalizedMoney,
    pub currency: String,
    pub transaction_id: String,
    pub error: Option<String>,
    pub customer_id: Option<String>,
    pub card_info: Option<CreditCardInfo>,
    pub raw_response: Option<serde_json::Value>,
    pub searchable_key: Option<String>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionParams {
    pub sandbox_mode: bool,
    pub merchant_id: String,
    pub public_key: String,
    pub private_key: String,
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("sandbox_mode", &self.sandbox_mode)
            .field("merchant_id", &self.merchant_id)
            .field("public_key", &self.public_key)
            .field("private_key", &"***")
            .finish()
    }
}

/// Credentials and behaviour flags for one gateway call. Built per call, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub gateway_name: String,
    pub auto_capture: bool,
    pub store_customer: bool,
    pub require_3d_secure: bool,
    pub supported_currencies: Vec<String>,
    pub connection_params: ConnectionParams,
}
