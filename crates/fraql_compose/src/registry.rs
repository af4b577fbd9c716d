//! Per-client fragment storage.

use crate::error::ComposeResult;
use crate::extract;
use indexmap::IndexMap;

/// A mapping from fragment name to fragment definition source.
///
/// Each registry is owned by exactly one client and created empty; there is
/// no process-wide fragment store. Entries are only ever added or
/// overwritten, never removed, and iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct FragmentRegistry {
    fragments: IndexMap<String, String>,
}

impl FragmentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fragment definition under its declared name.
    ///
    /// The name is extracted from the `fragment <Name>` header of `source`;
    /// the full source text is stored under it. Registering a name twice
    /// keeps the last definition and emits a warning event.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::InvalidFragment`](crate::ComposeError::InvalidFragment)
    /// when no fragment name can be extracted; the registry is left
    /// unchanged.
    pub fn register(&mut self, source: &str) -> ComposeResult<()> {
        let name = extract::fragment_name(source)?;
        if self.fragments.contains_key(name) {
            tracing::warn!(fragment = name, "fragment redefined, last write wins");
        }
        self.fragments.insert(name.to_string(), source.to_string());
        Ok(())
    }

    /// Returns the source registered under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fragments.get(name).map(String::as_str)
    }

    /// Returns true if a fragment named `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fragments.contains_key(name)
    }

    /// Number of registered fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns true if no fragments are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Iterates over `(name, source)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fragments
            .iter()
            .map(|(name, source)| (name.as_str(), source.as_str()))
    }

    /// Registered fragment names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fragments.keys().map(String::as_str)
    }

    /// Read-only view of the underlying map, for introspection.
    #[must_use]
    pub fn as_map(&self) -> &IndexMap<String, String> {
        &self.fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComposeError;

    #[test]
    fn test_register_and_get() {
        let mut registry = FragmentRegistry::new();
        registry
            .register("fragment person on Person { name, age }")
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("person"));
        assert_eq!(
            registry.get("person"),
            Some("fragment person on Person { name, age }")
        );
    }

    #[test]
    fn test_register_rejects_malformed_source() {
        let mut registry = FragmentRegistry::new();
        let err = registry.register("not a fragment").unwrap_err();

        assert_eq!(err, ComposeError::InvalidFragment);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_duplicate_registration_last_write_wins() {
        let mut registry = FragmentRegistry::new();
        registry.register("fragment person on Person { name }").unwrap();
        registry.register("fragment person on Person { age }").unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("person"),
            Some("fragment person on Person { age }")
        );
    }

    #[test]
    fn test_iteration_follows_registration_order() {
        let mut registry = FragmentRegistry::new();
        registry.register("fragment b on B { x }").unwrap();
        registry.register("fragment a on A { y }").unwrap();

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
