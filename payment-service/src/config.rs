use anyhow::{Context, Result};
use braintree_gateway::config::{
    AUTOMATIC_PAYMENT_CAPTURE, MERCHANT_ID, PUBLIC_API_KEY, SECRET_API_KEY, STORE_CUSTOMERS_CARD,
    USE_SANDBOX,
};
use braintree_gateway::PLUGIN_NAME;
use common_plugins::{ConfigItem, ConfigValue, PluginConfiguration};
use std::env;
use std::fmt;

#[derive(Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub braintree_active: bool,
    pub braintree_public_key: Option<String>,
    pub braintree_secret_key: Option<String>,
    pub braintree_merchant_id: Option<String>,
    pub braintree_use_sandbox: bool,
    pub braintree_store_card: bool,
    pub braintree_auto_capture: bool,
}

fn flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<bool>().ok())
        .unwrap_or(default)
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8086".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        Ok(Self {
            host,
            port,
            braintree_active: flag("BRAINTREE_PLUGIN_ACTIVE", true),
            braintree_public_key: env::var("BRAINTREE_PUBLIC_KEY").ok(),
            braintree_secret_key: env::var("BRAINTREE_SECRET_KEY").ok(),
            braintree_merchant_id: env::var("BRAINTREE_MERCHANT_ID").ok(),
            braintree_use_sandbox: flag("BRAINTREE_USE_SANDBOX", true),
            braintree_store_card: flag("BRAINTREE_STORE_CARD", false),
            braintree_auto_capture: flag("BRAINTREE_AUTO_CAPTURE", true),
        })
    }

    /// Settings injected into the Braintree plugin at startup.
    pub fn braintree_configuration(&self) -> PluginConfiguration {
        let text = |value: &Option<String>| value.clone().map(ConfigValue::String);
        PluginConfiguration {
            name: PLUGIN_NAME.to_string(),
            active: self.braintree_active,
            configuration: vec![
                ConfigItem::new(PUBLIC_API_KEY, text(&self.braintree_public_key)),
                ConfigItem::new(SECRET_API_KEY, text(&self.braintree_secret_key)),
                ConfigItem::new(MERCHANT_ID, text(&self.braintree_merchant_id)),
                ConfigItem::new(USE_SANDBOX, Some(ConfigValue::Boolean(self.braintree_use_sandbox))),
                ConfigItem::new(STORE_CUSTOMERS_CARD, Some(ConfigValue::Boolean(self.braintree_store_card))),
                ConfigItem::new(AUTOMATIC_PAYMENT_CAPTURE, Some(ConfigValue::Boolean(self.braintree_auto_capture))),
            ],
        }
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("braintree_active", &self.braintree_active)
            .field("braintree_merchant_id", &self.braintree_merchant_id)
            .field("braintree_secret_key", &self.braintree_secret_key.as_ref().map(|_| "***"))
            .field("braintree_use_sandbox", &self.braintree_use_sandbox)
            .field("braintree_store_card", &self.braintree_store_card)
            .field("braintree_auto_capture", &self.braintree_auto_capture)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use braintree_gateway::CONFIG_STRUCTURE;

    #[test]
    fn braintree_configuration_fits_the_schema() {
        let cfg = ServiceConfig {
            host: "127.0.0.1".into(),
            port: 8086,
            braintree_active: true,
            braintree_public_key: Some("pub".into()),
            braintree_secret_key: Some("s3cr3t".into()),
            braintree_merchant_id: Some("m".into()),
            braintree_use_sandbox: true,
            braintree_store_card: false,
            braintree_auto_capture: true,
        };
        let plugin_cfg = cfg.braintree_configuration();
        plugin_cfg.validate(&CONFIG_STRUCTURE).unwrap();
        assert_eq!(plugin_cfg.get_str(MERCHANT_ID), Some("m"));
        assert_eq!(plugin_cfg.get_str(SECRET_API_KEY), Some("s3cr3t"));
        assert!(!format!("{:?}", cfg).contains("s3cr3t"));
    }
}
