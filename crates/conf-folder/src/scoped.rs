//! Scoped models: standalone domains namespaced under their scope tag

use conf_model::{ConfigurationModel, OverrideEntry, RawModel, RawProcessor, ValueTree};
use serde_json::Value;

/// Strategy that nests the whole value tree under one fixed key.
///
/// No admission filtering happens here. Keys stay unprefixed; only the
/// contents move under the namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespaced {
    scope: String,
}

impl Namespaced {
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }
}

impl RawProcessor for Namespaced {
    fn finish(&self, model: ConfigurationModel) -> ConfigurationModel {
        let (contents, keys, overrides) = model.into_parts();
        let mut namespaced = ValueTree::new();
        namespaced.insert(self.scope.clone(), Value::Object(contents));
        ConfigurationModel::new(namespaced, keys, overrides)
    }
}

/// A standalone domain file (tasks, launch, ...) of one folder.
///
/// Its contents always hold exactly one top-level key, equal to
/// [`scope`](Self::scope), so it merges into a larger tree without colliding
/// with the settings layer or with another domain.
///
/// ```
/// use conf_folder::ScopedModel;
/// use serde_json::json;
///
/// let model = ScopedModel::new(r#"{"a": 1}"#, "tasks", "tasks");
/// assert_eq!(serde_json::Value::Object(model.contents().clone()), json!({"tasks": {"a": 1}}));
/// assert_eq!(model.keys(), ["a"]);
/// ```
#[derive(Debug, Clone)]
pub struct ScopedModel {
    raw: RawModel<Namespaced>,
}

impl ScopedModel {
    /// Parse `content` from the source `name` and namespace it under `scope`.
    pub fn new(content: &str, name: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            raw: RawModel::new(content, name, Namespaced::new(scope)),
        }
    }

    /// Re-parse from new text; the scope tag is unchanged.
    pub fn update(&mut self, content: &str) {
        self.raw.update(content);
    }

    pub fn scope(&self) -> &str {
        self.raw.processor().scope()
    }

    pub fn name(&self) -> &str {
        self.raw.name()
    }

    pub fn model(&self) -> &ConfigurationModel {
        self.raw.model()
    }

    pub fn contents(&self) -> &ValueTree {
        self.raw.contents()
    }

    /// Keys as declared in the domain file, without the scope prefix.
    pub fn keys(&self) -> &[String] {
        self.raw.keys()
    }

    pub fn overrides(&self) -> &[OverrideEntry] {
        self.raw.overrides()
    }

    pub fn parse_errors(&self) -> &[String] {
        self.raw.parse_errors()
    }
}
