use crate::client::BraintreeClient;
use crate::config::{resolve_gateway_config, CONFIG_STRUCTURE, PLUGIN_NAME};
use async_trait::async_trait;
use common_plugins::{
    ConfigStructure, ConfigurationError, CustomerSource, GatewayConfig, GatewayError,
    GatewayResponse, PaymentData, PaymentPlugin, PluginConfiguration, PluginSettings,
};
use tracing::debug;

pub struct BraintreeGatewayPlugin<C> {
    settings: PluginSettings,
    client: C,
}

impl<C: BraintreeClient> BraintreeGatewayPlugin<C> {
    pub fn new(configuration: PluginConfiguration, client: C) -> Result<Self, ConfigurationError> {
        if configuration.name != PLUGIN_NAME {
            return Err(ConfigurationError::WrongPlugin {
                expected: PLUGIN_NAME.to_string(),
                found: configuration.name,
            });
        }
        let settings = PluginSettings::new(&CONFIG_STRUCTURE, configuration)?;
        Ok(Self { settings, client })
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fresh gateway configuration from the current settings; never cached.
    pub fn gateway_config(&self) -> GatewayConfig {
        let config = resolve_gateway_config(&self.settings.snapshot());
        debug!(
            sandbox = config.connection_params.sandbox_mode,
            auto_capture = config.auto_capture,
            store_customer = config.store_customer,
            "Resolved Braintree gateway config"
        );
        config
    }
}

#[async_trait]
impl<C: BraintreeClient> PaymentPlugin for BraintreeGatewayPlugin<C> {
    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn config_structure(&self) -> &'static ConfigStructure {
        &CONFIG_STRUCTURE
    }

    fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    async fn authorize_payment(
        &self,
        payment_information: &PaymentData,
        _previous_value: Option<GatewayResponse>,
    ) -> Result<Option<GatewayResponse>, GatewayError> {
        self.client.authorize(payment_information, &self.gateway_config()).await.map(Some)
    }

    async fn capture_payment(
        &self,
        payment_information: &PaymentData,
        _previous_value: Option<GatewayResponse>,
    ) -> Result<Option<GatewayResponse>, GatewayError> {
        self.client.capture(payment_information, &self.gateway_config()).await.map(Some)
    }

    async fn refund_payment(
        &self,
        payment_information: &PaymentData,
        _previous_value: Option<GatewayResponse>,
    ) -> Result<Option<GatewayResponse>, GatewayError> {
        self.client.refund(payment_information, &self.gateway_config()).await.map(Some)
    }

    async fn void_payment(
        &self,
        payment_information: &PaymentData,
        _previous_value: Option<GatewayResponse>,
    ) -> Result<Option<GatewayResponse>, GatewayError> {
        self.client.void(payment_information, &self.gateway_config()).await.map(Some)
    }

    async fn process_payment(
        &self,
        payment_information: &PaymentData,
        _previous_value: Option<GatewayResponse>,
    ) -> Result<Option<GatewayResponse>, GatewayError> {
        self.client.process_payment(payment_information, &self.gateway_config()).await.map(Some)
    }

    async fn list_payment_sources(
        &self,
        customer_id: &str,
        mut previous_value: Vec<CustomerSource>,
    ) -> Result<Vec<CustomerSource>, GatewayError> {
        let sources = self.client.list_client_sources(&self.gateway_config(), customer_id).await?;
        previous_value.extend(sources);
        Ok(previous_value)
    }
}
