use crate::config::{ConfigStructure, PluginConfiguration, PluginSettings};
use crate::error::GatewayError;
use crate::payment::{CustomerSource, GatewayResponse, PaymentData};
use async_trait::async_trait;

/// Lifecycle hooks a payment plugin may answer.
///
/// Every hook receives the value produced by the plugins that ran before it
/// (`previous_value`). The defaults hand that value back untouched, so a
/// plugin only overrides the hooks its gateway supports.
#[async_trait]
pub trait PaymentPlugin: Send + Sync {
    fn name(&self) -> &'static str;

    fn config_structure(&self) -> &'static ConfigStructure;

    fn settings(&self) -> &PluginSettings;

    fn is_active(&self) -> bool {
        self.settings().is_active()
    }

    fn configuration(&self) -> PluginConfiguration {
        self.settings().snapshot()
    }

    async fn authorize_payment(
        &self,
        _payment_information: &PaymentData,
        previous_value: Option<GatewayResponse>,
    ) -> Result<Option<GatewayResponse>, GatewayError> {
        Ok(previous_value)
    }

    async fn capture_payment(
        &self,
        _payment_information: &PaymentData,
        previous_value: Option<GatewayResponse>,
    ) -> Result<Option<GatewayResponse>, GatewayError> {
        Ok(previous_value)
    }

    async fn refund_payment(
        &self,
        _payment_information: &PaymentData,
        previous_value: Option<GatewayResponse>,
    ) -> Result<Option<GatewayResponse>, GatewayError> {
        Ok(previous_value)
    }

    async fn void_payment(
        &self,
        _payment_information: &PaymentData,
        previous_value: Option<GatewayResponse>,
    ) -> Result<Option<GatewayResponse>, GatewayError> {
        Ok(previous_value)
    }

    async fn process_payment(
        &self,
        _payment_information: &PaymentData,
        previous_value: Option<GatewayResponse>,
    ) -> Result<Option<GatewayResponse>, GatewayError> {
        Ok(previous_value)
    }

    async fn list_payment_sources(
        &self,
        _customer_id: &str,
        previous_value: Vec<CustomerSource>,
    ) -> Result<Vec<CustomerSource>, GatewayError> {
        Ok(previous_value)
    }
}
