//! Descriptor resolution: route-declared validator names to descriptors

use std::collections::HashMap;
use std::sync::Arc;

use super::descriptor::ValidatorDescriptor;

/// Resolves the validator name a route declares to its descriptor
///
/// The resolution strategy is pluggable; [`DescriptorRegistry`] is the
/// in-crate implementation.
pub trait DescriptorResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Option<Arc<ValidatorDescriptor>>;
}

/// In-memory registry of named validator descriptors
#[derive(Debug, Clone, Default)]
pub struct DescriptorRegistry {
    descriptors: HashMap<String, Arc<ValidatorDescriptor>>,
}

impl DescriptorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor under a name (builder style)
    pub fn register(mut self, name: impl Into<String>, descriptor: ValidatorDescriptor) -> Self {
        self.insert(name, descriptor);
        self
    }

    /// Register a descriptor under a name
    pub fn insert(&mut self, name: impl Into<String>, descriptor: ValidatorDescriptor) {
        self.descriptors.insert(name.into(), Arc::new(descriptor));
    }

    /// Names of all registered validators
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.descriptors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl DescriptorResolver for DescriptorRegistry {
    fn resolve(&self, name: &str) -> Option<Arc<ValidatorDescriptor>> {
        self.descriptors.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> ValidatorDescriptor {
        ValidatorDescriptor {
            strict: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_registered_name() {
        let registry = DescriptorRegistry::new().register("store_user", descriptor());
        let resolved = registry.resolve("store_user");
        assert!(resolved.is_some());
        assert!(resolved.expect("should resolve").strict);
    }

    #[test]
    fn test_resolve_unknown_name_returns_none() {
        let registry = DescriptorRegistry::new().register("store_user", descriptor());
        assert!(registry.resolve("update_user").is_none());
    }

    #[test]
    fn test_register_builder_chains() {
        let registry = DescriptorRegistry::new()
            .register("a", descriptor())
            .register("b", ValidatorDescriptor::default());
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_insert_overwrites_existing_name() {
        let mut registry = DescriptorRegistry::new().register("a", descriptor());
        registry.insert("a", ValidatorDescriptor::default());
        let resolved = registry.resolve("a").expect("should resolve");
        assert!(!resolved.strict);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_resolved_descriptors_are_shared() {
        let registry = DescriptorRegistry::new().register("a", descriptor());
        let first = registry.resolve("a").expect("should resolve");
        let second = registry.resolve("a").expect("should resolve");
        assert!(Arc::ptr_eq(&first, &second));
    }
}
