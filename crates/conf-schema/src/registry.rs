//! In-memory schema registry
//!
//! Maps fully qualified configuration keys (`terminal.integrated.shell`) to
//! their [`PropertySchema`].

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::provider::{PropertySchema, SchemaProvider};

/// Registry of configuration property schemas.
///
/// # Example
///
/// ```
/// use conf_schema::{ConfigurationScope, PropertySchema, SchemaProvider, SchemaRegistry};
///
/// let mut registry = SchemaRegistry::new();
/// registry.register("files.exclude", PropertySchema::scoped(ConfigurationScope::Folder));
/// assert_eq!(registry.scope_of("files.exclude"), ConfigurationScope::Folder);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    properties: HashMap<String, PropertySchema>,
}

impl SchemaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            properties: HashMap::new(),
        }
    }

    /// Parse a registry from a JSON object of `key -> schema`.
    ///
    /// ```
    /// use conf_schema::{SchemaProvider, SchemaRegistry};
    ///
    /// let registry = SchemaRegistry::from_json(
    ///     r#"{ "terminal.shell": { "scope": "window", "isExecutable": true } }"#,
    /// ).unwrap();
    /// assert!(registry.is_executable("terminal.shell"));
    /// ```
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        let Value::Object(map) = value else {
            return Err(Error::InvalidSchema {
                message: "expected a JSON object of property schemas".to_string(),
            });
        };

        let mut registry = Self::new();
        for (key, schema) in map {
            let schema: PropertySchema = serde_json::from_value(schema)?;
            registry.register(key, schema);
        }
        Ok(registry)
    }

    /// Parse a registry from a TOML document with one table per key.
    ///
    /// Dotted keys must be quoted so they are not split into nested tables:
    ///
    /// ```toml
    /// ["terminal.shell"]
    /// scope = "window"
    /// isExecutable = true
    /// ```
    pub fn from_toml(content: &str) -> Result<Self> {
        let properties: HashMap<String, PropertySchema> = toml::from_str(content)?;
        Ok(properties.into_iter().collect())
    }

    /// Register the schema for a key.
    ///
    /// If the key was already registered, the previous schema is replaced.
    pub fn register(&mut self, key: impl Into<String>, schema: PropertySchema) {
        let key = key.into();
        tracing::debug!(%key, scope = %schema.scope, executable = schema.is_executable, "Registering property schema");
        self.properties.insert(key, schema);
    }

    /// Remove the schema for a key, returning it if it was registered.
    pub fn deregister(&mut self, key: &str) -> Option<PropertySchema> {
        self.properties.remove(key)
    }

    /// Get the schema registered for a key.
    pub fn get(&self, key: &str) -> Option<&PropertySchema> {
        self.properties.get(key)
    }

    /// List all registered keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.properties.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl SchemaProvider for SchemaRegistry {
    fn lookup(&self, key: &str) -> Option<PropertySchema> {
        self.properties.get(key).copied()
    }
}

impl<K: Into<String>> FromIterator<(K, PropertySchema)> for SchemaRegistry {
    fn from_iter<I: IntoIterator<Item = (K, PropertySchema)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (key, schema) in iter {
            registry.register(key, schema);
        }
        registry
    }
}
