//! Lookup plugin trait and registry

use super::{FileLookup, LookupContext, LookupError, LookupResult, Terms};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Trait that all lookup plugins must implement
pub trait LookupPlugin: Send + Sync {
    /// Returns the name of the lookup plugin
    fn name(&self) -> &'static str;

    /// Returns a description of what this lookup does
    fn description(&self) -> &'static str;

    /// Execute the lookup with the given terms
    ///
    /// # Arguments
    ///
    /// * `terms` - Path expression(s) supplied by the template
    /// * `context` - Base directory and extra host context
    ///
    /// # Returns
    ///
    /// A vector of strings, one for each resolved value.
    fn lookup(&self, terms: &Terms, context: &LookupContext) -> LookupResult<Vec<String>>;
}

/// Registry for looking up plugins by name
#[derive(Default, Clone)]
pub struct LookupRegistry {
    plugins: HashMap<String, Arc<dyn LookupPlugin>>,
}

impl LookupRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
        }
    }

    /// Create a registry with all built-in lookup plugins
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(FileLookup::new()));
        registry
    }

    /// Register a lookup plugin, replacing any plugin with the same name
    pub fn register(&mut self, plugin: Arc<dyn LookupPlugin>) {
        self.plugins.insert(plugin.name().to_string(), plugin);
    }

    /// Get a lookup plugin by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn LookupPlugin>> {
        self.plugins.get(name).cloned()
    }

    /// Check if a lookup plugin exists
    pub fn contains(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// Get all registered plugin names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.plugins.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Execute a lookup by plugin name.
    ///
    /// Plugin errors are returned to the caller untouched.
    pub fn lookup(
        &self,
        name: &str,
        terms: &Terms,
        context: &LookupContext,
    ) -> LookupResult<Vec<String>> {
        let plugin = self
            .get(name)
            .ok_or_else(|| LookupError::PluginNotFound(name.to_string()))?;

        tracing::debug!(plugin = name, terms = %terms, "running lookup");
        plugin.lookup(terms, context)
    }

    /// Execute a lookup and return its first value
    pub fn lookup_first(
        &self,
        name: &str,
        terms: &Terms,
        context: &LookupContext,
    ) -> LookupResult<Option<String>> {
        Ok(self.lookup(name, terms, context)?.into_iter().next())
    }
}

impl fmt::Debug for LookupRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupRegistry")
            .field("plugins", &self.names())
            .finish()
    }
}
