use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigurationTypeField {
    String,
    Boolean,
}

/// Descriptor the admin UI renders for a single option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigField {
    #[serde(rename = "type")]
    pub field_type: ConfigurationTypeField,
    pub label: &'static str,
    pub help_text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigOption {
    pub name: &'static str,
    #[serde(flatten)]
    pub field: ConfigField,
}

/// Ordered option-name to descriptor mapping declared once per plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigStructure {
    options: Vec<ConfigOption>,
}

impl ConfigStructure {
    pub fn new(options: Vec<ConfigOption>) -> Self {
        Self { options }
    }

    pub fn get(&self, name: &str) -> Option<&ConfigField> {
        self.options.iter().find(|o| o.name == name).map(|o| &o.field)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.options.iter().map(|o| o.name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigOption> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Boolean(bool),
    String(String),
}

impl ConfigValue {
    pub fn field_type(&self) -> ConfigurationTypeField {
        match self {
            ConfigValue::Boolean(_) => ConfigurationTypeField::Boolean,
            ConfigValue::String(_) => ConfigurationTypeField::String,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigItem {
    pub name: String,
    #[serde(default)]
    pub value: Option<ConfigValue>,
}

impl ConfigItem {
    pub fn new(name: impl Into<String>, value: Option<ConfigValue>) -> Self {
        Self { name: name.into(), value }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("unknown configuration option: {0}")]
    UnknownOption(String),
    #[error("option {name} expects a {expected:?} value")]
    TypeMismatch {
        name: String,
        expected: ConfigurationTypeField,
    },
    #[error("configuration belongs to plugin {found}, expected {expected}")]
    WrongPlugin { expected: String, found: String },
}

/// Values the host resolved for one plugin, as persisted by the admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfiguration {
    pub name: String,
    pub active: bool,
    #[serde(default)]
    pub configuration: Vec<ConfigItem>,
}

impl PluginConfiguration {
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.configuration
            .iter()
            .find(|item| item.name == name)
            .and_then(|item| item.value.as_ref())
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(ConfigValue::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.get(name) {
            Some(ConfigValue::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn validate(&self, structure: &ConfigStructure) -> Result<(), ConfigurationError> {
        validate_items(&self.configuration, structure)
    }

    /// Merge `update` by option name. Nothing changes unless every item is valid.
    pub fn apply(
        &mut self,
        update: ConfigurationUpdate,
        structure: &ConfigStructure,
    ) -> Result<(), ConfigurationError> {
        validate_items(&update.configuration, structure)?;
        for item in update.configuration {
            match self.configuration.iter_mut().find(|c| c.name == item.name) {
                Some(existing) => existing.value = item.value,
                None => self.configuration.push(item),
            }
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        Ok(())
    }
}

fn validate_items(items: &[ConfigItem], structure: &ConfigStructure) -> Result<(), ConfigurationError> {
    for item in items {
        let field = structure
            .get(&item.name)
            .ok_or_else(|| ConfigurationError::UnknownOption(item.name.clone()))?;
        if let Some(value) = &item.value {
            if value.field_type() != field.field_type {
                return Err(ConfigurationError::TypeMismatch {
                    name: item.name.clone(),
                    expected: field.field_type,
                });
            }
        }
    }
    Ok(())
}

/// Partial change submitted from the admin side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationUpdate {
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub configuration: Vec<ConfigItem>,
}

/// Injected settings for a plugin instance. Readers always get a snapshot.
#[derive(Debug)]
pub struct PluginSettings {
    structure: &'static ConfigStructure,
    current: RwLock<PluginConfiguration>,
}

impl PluginSettings {
    pub fn new(
        structure: &'static ConfigStructure,
        configuration: PluginConfiguration,
    ) -> Result<Self, ConfigurationError> {
        configuration.validate(structure)?;
        Ok(Self {
            structure,
            current: RwLock::new(configuration),
        })
    }

    pub fn structure(&self) -> &'static ConfigStructure {
        self.structure
    }

    pub fn snapshot(&self) -> PluginConfiguration {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_active(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .active
    }

    pub fn update(&self, update: ConfigurationUpdate) -> Result<PluginConfiguration, ConfigurationError> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        guard.apply(update, self.structure)?;
        Ok(guard.clone())
    }
}
