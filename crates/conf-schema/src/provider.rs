//! The schema lookup seam consumed by the resolution engine.

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::scope::ConfigurationScope;

/// Schema attributes of a single configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PropertySchema {
    pub scope: ConfigurationScope,

    /// Whether the setting can cause external process or command execution.
    pub is_executable: bool,
}

impl PropertySchema {
    pub fn new(scope: ConfigurationScope, is_executable: bool) -> Self {
        Self {
            scope,
            is_executable,
        }
    }

    /// A non-executable schema in the given scope.
    pub fn scoped(scope: ConfigurationScope) -> Self {
        Self::new(scope, false)
    }

    /// An executable schema in the workspace scope.
    pub fn executable() -> Self {
        Self::new(ConfigurationScope::Workspace, true)
    }
}

/// Read-only lookup from configuration key to its schema.
///
/// Implementations must be cheap to query; the engine looks up every
/// top-level key of a settings file on each (re)process pass.
pub trait SchemaProvider {
    /// Return the schema registered for `key`, if any.
    fn lookup(&self, key: &str) -> Option<PropertySchema>;

    /// Scope of `key`, defaulting to [`ConfigurationScope::Workspace`].
    fn scope_of(&self, key: &str) -> ConfigurationScope {
        self.lookup(key).map(|schema| schema.scope).unwrap_or_default()
    }

    /// Whether `key` is registered as executable. Unknown keys never are.
    fn is_executable(&self, key: &str) -> bool {
        self.lookup(key).is_some_and(|schema| schema.is_executable)
    }
}

impl<P: SchemaProvider + ?Sized> SchemaProvider for Arc<P> {
    fn lookup(&self, key: &str) -> Option<PropertySchema> {
        (**self).lookup(key)
    }
}

impl<P: SchemaProvider + ?Sized> SchemaProvider for &P {
    fn lookup(&self, key: &str) -> Option<PropertySchema> {
        (**self).lookup(key)
    }
}

/// Shared, externally mutated providers.
///
/// Mutating the registry does not notify any model: callers reprocess the
/// affected models themselves.
impl<P: SchemaProvider> SchemaProvider for RwLock<P> {
    fn lookup(&self, key: &str) -> Option<PropertySchema> {
        self.read()
            .unwrap_or_else(PoisonError::into_inner)
            .lookup(key)
    }
}
