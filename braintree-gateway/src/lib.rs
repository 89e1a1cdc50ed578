//! Braintree payment gateway plugin.
//!
//! [`BraintreeGatewayPlugin`] answers the host's payment lifecycle hooks by
//! forwarding each call to a [`BraintreeClient`], together with a
//! [`GatewayConfig`](common_plugins::GatewayConfig) resolved from the plugin's
//! settings at call time.

pub mod client;
pub mod config;
pub mod plugin;

pub use client::{BraintreeClient, StubClient};
pub use config::{default_configuration, resolve_gateway_config, CONFIG_STRUCTURE, PLUGIN_NAME};
pub use plugin::BraintreeGatewayPlugin;
