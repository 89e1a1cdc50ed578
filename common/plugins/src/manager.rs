use crate::config::{ConfigurationUpdate, PluginConfiguration};
use crate::error::ManagerError;
use crate::payment::{CustomerSource, GatewayResponse, PaymentData};
use crate::plugin::PaymentPlugin;
use common_observability::{CallOutcome, PluginMetrics};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOperation {
    Authorize,
    Capture,
    Refund,
    Void,
    Process,
}

impl PaymentOperation {
    pub fn method_name(&self) -> &'static str {
        match self {
            PaymentOperation::Authorize => "authorize_payment",
            PaymentOperation::Capture => "capture_payment",
            PaymentOperation::Refund => "refund_payment",
            PaymentOperation::Void => "void_payment",
            PaymentOperation::Process => "process_payment",
        }
    }
}

const LIST_SOURCES: &str = "list_payment_sources";

/// Registry of payment plugins, invoked in registration order.
pub struct PluginManager {
    plugins: Vec<Arc<dyn PaymentPlugin>>,
    metrics: PluginMetrics,
}

impl PluginManager {
    pub fn new(metrics: PluginMetrics) -> Self {
        Self { plugins: Vec::new(), metrics }
    }

    pub fn register(&mut self, plugin: Arc<dyn PaymentPlugin>) {
        debug!(plugin = plugin.name(), active = plugin.is_active(), "Registered payment plugin");
        self.plugins.push(plugin);
    }

    pub fn plugins(&self) -> &[Arc<dyn PaymentPlugin>] {
        &self.plugins
    }

    pub fn get_plugin(&self, name: &str) -> Option<&Arc<dyn PaymentPlugin>> {
        self.plugins.iter().find(|p| p.name() == name)
    }

    pub fn metrics(&self) -> &PluginMetrics {
        &self.metrics
    }

    fn active_plugin(&self, gateway: &str, method: &'static str) -> Result<&Arc<dyn PaymentPlugin>, ManagerError> {
        let plugin = self.get_plugin(gateway).ok_or_else(|| ManagerError::PluginNotFound {
            gateway: gateway.to_string(),
        })?;
        if !plugin.is_active() {
            self.metrics.record_call(gateway, method, CallOutcome::Unavailable, 0.0);
            return Err(ManagerError::PluginInactive { gateway: gateway.to_string(), method });
        }
        Ok(plugin)
    }

    pub async fn authorize_payment(&self, gateway: &str, payment_information: &PaymentData) -> Result<GatewayResponse, ManagerError> {
        self.run_payment_method(gateway, PaymentOperation::Authorize, payment_information).await
    }

    pub async fn capture_payment(&self, gateway: &str, payment_information: &PaymentData) -> Result<GatewayResponse, ManagerError> {
        self.run_payment_method(gateway, PaymentOperation::Capture, payment_information).await
    }

    pub async fn refund_payment(&self, gateway: &str, payment_information: &PaymentData) -> Result<GatewayResponse, ManagerError> {
        self.run_payment_method(gateway, PaymentOperation::Refund, payment_information).await
    }

    pub async fn void_payment(&self, gateway: &str, payment_information: &PaymentData) -> Result<GatewayResponse, ManagerError> {
        self.run_payment_method(gateway, PaymentOperation::Void, payment_information).await
    }

    pub async fn process_payment(&self, gateway: &str, payment_information: &PaymentData) -> Result<GatewayResponse, ManagerError> {
        self.run_payment_method(gateway, PaymentOperation::Process, payment_information).await
    }

    /// Run one payment hook on the named plugin, starting from an empty previous value.
    pub async fn run_payment_method(
        &self,
        gateway: &str,
        operation: PaymentOperation,
        payment_information: &PaymentData,
    ) -> Result<GatewayResponse, ManagerError> {
        let method = operation.method_name();
        let plugin = self.active_plugin(gateway, method)?;
        let started = Instant::now();
        let result = match operation {
            PaymentOperation::Authorize => plugin.authorize_payment(payment_information, None).await,
            PaymentOperation::Capture => plugin.capture_payment(payment_information, None).await,
            PaymentOperation::Refund => plugin.refund_payment(payment_information, None).await,
            PaymentOperation::Void => plugin.void_payment(payment_information, None).await,
            PaymentOperation::Process => plugin.process_payment(payment_information, None).await,
        };
        let elapsed = started.elapsed().as_secs_f64();
        match result {
            Ok(Some(response)) => {
                self.metrics.record_call(gateway, method, CallOutcome::Success, elapsed);
                debug!(gateway, method, transaction_id = %response.transaction_id, is_success = response.is_success, "Payment plugin call completed");
                Ok(response)
            }
            Ok(None) => {
                self.metrics.record_call(gateway, method, CallOutcome::Unavailable, elapsed);
                Err(ManagerError::NotImplemented { gateway: gateway.to_string(), method })
            }
            Err(err) => {
                self.metrics.record_call(gateway, method, CallOutcome::GatewayError, elapsed);
                warn!(gateway, method, error = %err, "Payment plugin call failed");
                Err(err.into())
            }
        }
    }

    /// Stored sources from a single gateway.
    pub async fn list_payment_sources(&self, gateway: &str, customer_id: &str) -> Result<Vec<CustomerSource>, ManagerError> {
        let plugin = self.active_plugin(gateway, LIST_SOURCES)?;
        let started = Instant::now();
        let result = plugin.list_payment_sources(customer_id, Vec::new()).await;
        self.finish_listing(gateway, started, result)
    }

    /// Stored sources from every active plugin, threaded as one accumulator.
    pub async fn list_all_payment_sources(&self, customer_id: &str) -> Result<Vec<CustomerSource>, ManagerError> {
        let mut sources = Vec::new();
        for plugin in self.plugins.iter().filter(|p| p.is_active()) {
            let started = Instant::now();
            let result = plugin.list_payment_sources(customer_id, sources).await;
            sources = self.finish_listing(plugin.name(), started, result)?;
        }
        Ok(sources)
    }

    fn finish_listing(
        &self,
        gateway: &str,
        started: Instant,
        result: Result<Vec<CustomerSource>, crate::GatewayError>,
    ) -> Result<Vec<CustomerSource>, ManagerError> {
        let elapsed = started.elapsed().as_secs_f64();
        match result {
            Ok(sources) => {
                self.metrics.record_call(gateway, LIST_SOURCES, CallOutcome::Success, elapsed);
                debug!(gateway, count = sources.len(), "Listed customer payment sources");
                Ok(sources)
            }
            Err(err) => {
                self.metrics.record_call(gateway, LIST_SOURCES, CallOutcome::GatewayError, elapsed);
                warn!(gateway, error = %err, "Listing customer payment sources failed");
                Err(err.into())
            }
        }
    }

    /// Validate `update` against the plugin's schema and store it. Inactive plugins can be configured.
    pub fn save_plugin_configuration(&self, name: &str, update: ConfigurationUpdate) -> Result<PluginConfiguration, ManagerError> {
        let plugin = self.get_plugin(name).ok_or_else(|| ManagerError::PluginNotFound {
            gateway: name.to_string(),
        })?;
        let saved = plugin.settings().update(update)?;
        debug!(plugin = name, active = saved.active, "Saved plugin configuration");
        Ok(saved)
    }
}

impl Default for PluginManager {
    fn default() -> Self {
        Self::new(PluginMetrics::new())
    }
}
