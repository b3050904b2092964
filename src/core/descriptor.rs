//! Validator descriptors: rules, strictness flags and message templates

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Message for a validation kind: either a literal string or a function
/// computing one from the offending fields and the validation key.
///
/// Only literals can be declared in configuration files; computed templates
/// are registered programmatically.
#[derive(Clone)]
pub enum MessageTemplate {
    Literal(String),
    Computed(Arc<dyn Fn(&[String], &str) -> String + Send + Sync>),
}

impl MessageTemplate {
    /// Convenience constructor for computed templates
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&[String], &str) -> String + Send + Sync + 'static,
    {
        Self::Computed(Arc::new(f))
    }
}

impl fmt::Debug for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageTemplate::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            MessageTemplate::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

impl<'de> Deserialize<'de> for MessageTemplate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(MessageTemplate::Literal(String::deserialize(deserializer)?))
    }
}

impl From<&str> for MessageTemplate {
    fn from(s: &str) -> Self {
        MessageTemplate::Literal(s.to_string())
    }
}

/// A named validation bundle resolved per request from route configuration
///
/// `rules` maps field paths (dot notation allowed) to rule expressions
/// understood by the external shape validator; the guard only reads the
/// keys. Rule declaration order is preserved.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ValidatorDescriptor {
    /// Field path -> rule expression, opaque to the guard
    pub rules: IndexMap<String, String>,

    /// Reject submissions with zero top-level fields
    pub no_empty: bool,

    /// Reject submissions containing fields not declared in `rules`
    pub strict: bool,

    /// Report every strict-fields violation instead of only the first
    pub validate_all: bool,

    /// Message overrides keyed by validation kind
    pub messages: HashMap<String, MessageTemplate>,
}

impl ValidatorDescriptor {
    /// Resolve the message for a validation kind
    ///
    /// Computed templates are called with the offending fields and the
    /// validation key; literals are used verbatim; anything else falls back.
    pub fn compute_message(&self, validation: &str, fallback: &str, args: &[String]) -> String {
        match self.messages.get(validation) {
            Some(MessageTemplate::Computed(template)) => template(args, validation),
            Some(MessageTemplate::Literal(message)) => message.clone(),
            None => fallback.to_string(),
        }
    }
}
