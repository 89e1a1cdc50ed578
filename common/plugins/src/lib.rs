//! Host-side contract for payment gateway plugins.
//!
//! A plugin declares a [`ConfigStructure`], receives its resolved
//! [`PluginConfiguration`] at construction, and answers the payment lifecycle
//! hooks of [`PaymentPlugin`]. The [`PluginManager`] owns the registered
//! plugins and threads `previous_value` through them.

pub mod config;
pub mod error;
pub mod manager;
pub mod payment;
pub mod plugin;

pub use config::{
    ConfigField, ConfigItem, ConfigOption, ConfigStructure, ConfigValue, ConfigurationError,
    ConfigurationTypeField, ConfigurationUpdate, PluginConfiguration, PluginSettings,
};
pub use error::{GatewayError, ManagerError};
pub use manager::{PaymentOperation, PluginManager};
pub use payment::{
    AddressData, ConnectionParams, CreditCardInfo, CustomerSource, GatewayConfig, GatewayResponse,
    PaymentData, TransactionKind,
};
pub use plugin::PaymentPlugin;
