use common_plugins::{
    ConfigField, ConfigItem, ConfigOption, ConfigStructure, ConfigValue, ConfigurationTypeField,
    ConnectionParams, GatewayConfig, PluginConfiguration,
};
use once_cell::sync::Lazy;

pub const PLUGIN_NAME: &str = "Braintree Gateway";

pub const PUBLIC_API_KEY: &str = "Public API key";
pub const SECRET_API_KEY: &str = "Secret API key";
pub const MERCHANT_ID: &str = "Merchant ID";
pub const USE_SANDBOX: &str = "Use sandbox";
pub const STORE_CUSTOMERS_CARD: &str = "Store customers card";
pub const AUTOMATIC_PAYMENT_CAPTURE: &str = "Automatic payment capture";

fn option(
    name: &'static str,
    field_type: ConfigurationTypeField,
    help_text: &'static str,
) -> ConfigOption {
    ConfigOption { name, field: ConfigField { field_type, label: name, help_text } }
}

pub static CONFIG_STRUCTURE: Lazy<ConfigStructure> = Lazy::new(|| {
    use ConfigurationTypeField::{Boolean, String as Text};
    ConfigStructure::new(vec![
        option(PUBLIC_API_KEY, Text, "Provide Braintree public API key"),
        option(SECRET_API_KEY, Text, "Provide Braintree secret API key"),
        option(MERCHANT_ID, Text, "Provide Braintree merchant ID"),
        option(USE_SANDBOX, Boolean, "Determines if Saleor should use Braintree sandbox API."),
        option(
            STORE_CUSTOMERS_CARD,
            Boolean,
            "Determines if Saleor should store cards on payments in Braintree customer.",
        ),
        option(
            AUTOMATIC_PAYMENT_CAPTURE,
            Boolean,
            "Determines if Saleor should automaticaly capture payments.",
        ),
    ])
});

/// Inactive configuration with every option present; keys left unset.
pub fn default_configuration() -> PluginConfiguration {
    PluginConfiguration {
        name: PLUGIN_NAME.to_string(),
        active: false,
        configuration: vec![
            ConfigItem::new(PUBLIC_API_KEY, None),
            ConfigItem::new(SECRET_API_KEY, None),
            ConfigItem::new(MERCHANT_ID, None),
            ConfigItem::new(USE_SANDBOX, Some(ConfigValue::Boolean(true))),
            ConfigItem::new(STORE_CUSTOMERS_CARD, Some(ConfigValue::Boolean(false))),
            ConfigItem::new(AUTOMATIC_PAYMENT_CAPTURE, Some(ConfigValue::Boolean(true))),
        ],
    }
}

/// Build the per-call gateway configuration from resolved settings.
///
/// Unset keys become empty strings; unset flags are off, except the sandbox
/// flag which stays on so an unconfigured plugin never reaches production.
pub fn resolve_gateway_config(configuration: &PluginConfiguration) -> GatewayConfig {
    let text = |name: &str| configuration.get_str(name).unwrap_or_default().to_string();
    GatewayConfig {
        gateway_name: PLUGIN_NAME.to_string(),
        auto_capture: configuration.get_bool(AUTOMATIC_PAYMENT_CAPTURE).unwrap_or(false),
        store_customer: configuration.get_bool(STORE_CUSTOMERS_CARD).unwrap_or(false),
        require_3d_secure: false,
        supported_currencies: Vec::new(),
        connection_params: ConnectionParams {
            sandbox_mode: configuration.get_bool(USE_SANDBOX).unwrap_or(true),
            merchant_id: text(MERCHANT_ID),
            public_key: text(PUBLIC_API_KEY),
            private_key: text(SECRET_API_KEY),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structure_declares_six_options_in_order() {
        let names: Vec<_> = CONFIG_STRUCTURE.names().collect();
        assert_eq!(
            names,
            vec![
                PUBLIC_API_KEY,
                SECRET_API_KEY,
                MERCHANT_ID,
                USE_SANDBOX,
                STORE_CUSTOMERS_CARD,
                AUTOMATIC_PAYMENT_CAPTURE
            ]
        );
    }

    #[test]
    fn default_configuration_is_valid_and_inactive() {
        let cfg = default_configuration();
        assert!(!cfg.active);
        cfg.validate(&CONFIG_STRUCTURE).unwrap();
        assert_eq!(cfg.configuration.len(), CONFIG_STRUCTURE.len());
    }

    #[test]
    fn unset_values_resolve_to_safe_defaults() {
        let cfg = PluginConfiguration { name: PLUGIN_NAME.into(), active: true, configuration: vec![] };
        let gw = resolve_gateway_config(&cfg);
        assert!(gw.connection_params.sandbox_mode);
        assert!(!gw.auto_capture);
        assert!(!gw.store_customer);
        assert_eq!(gw.connection_params.merchant_id, "");
    }
}
