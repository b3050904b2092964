//! Declarative validator configuration loading
//!
//! Validators can be declared in a YAML file and loaded into a
//! [`DescriptorRegistry`]:
//!
//! ```yaml
//! validators:
//!   store_user:
//!     strict: true
//!     no_empty: true
//!     rules:
//!       name: required
//!       address.street: required
//!     messages:
//!       strict_fields: "unexpected field in payload"
//! ```
//!
//! Computed message templates cannot be declared in files; register them on
//! the descriptor programmatically instead.

use anyhow::Result;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::core::descriptor::ValidatorDescriptor;
use crate::core::registry::DescriptorRegistry;

/// A validators file: validator name -> descriptor declaration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidatorsConfig {
    #[serde(default)]
    pub validators: IndexMap<String, ValidatorDescriptor>,
}

impl ValidatorsConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Convert the declared validators into a registry
    pub fn into_registry(self) -> DescriptorRegistry {
        let mut registry = DescriptorRegistry::new();
        for (name, descriptor) in self.validators {
            registry.insert(name, descriptor);
        }
        registry
    }
}
