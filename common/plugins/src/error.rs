use crate::config::ConfigurationError;
use thiserror::Error;

/// Failures reported by a gateway client. Plugins hand these back untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("gateway unreachable: {0}")]
    Network(String),
    #[error("gateway authentication failed: {0}")]
    Authentication(String),
    #[error("gateway rejected request: {0}")]
    Validation(String),
    #[error("payment declined: {0}")]
    Declined(String),
    #[error("unexpected gateway error: {0}")]
    Unexpected(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManagerError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("payment plugin {gateway} is not registered")]
    PluginNotFound { gateway: String },
    #[error("payment plugin {gateway} for {method} payment method is in disabled state")]
    PluginInactive { gateway: String, method: &'static str },
    #[error("payment plugin {gateway} does not support {method}")]
    NotImplemented { gateway: String, method: &'static str },
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
