//! Consolidation of one folder's configuration sources
//!
//! [`FolderConfigurationModel`] merges, in this order:
//!
//! 1. the folder settings layer: the full admitted settings for a workspace
//!    folder model, or only the folder-scoped projection otherwise
//! 2. every scoped model, in the order they were supplied
//!
//! Later layers win on collision. Scoped models are namespaced, so a
//! collision only happens when a settings key is literally a scope tag; the
//! scoped model still wins then.

use conf_model::{ConfigurationModel, OverrideEntry, ValueTree};
use conf_schema::ConfigurationScope;
use serde_json::Value;

use crate::scoped::ScopedModel;
use crate::settings::FolderSettingsModel;
use crate::standalone::is_standalone_scope;

/// The consolidated configuration layer of one workspace folder.
#[derive(Debug, Clone)]
pub struct FolderConfigurationModel {
    settings: FolderSettingsModel,
    scoped: Vec<ScopedModel>,
    scope: ConfigurationScope,
    consolidated: ConfigurationModel,
}

impl FolderConfigurationModel {
    /// Consolidate `settings` and `scoped` for a folder layer of `scope`.
    ///
    /// [`ConfigurationScope::Workspace`] uses the whole admitted settings
    /// model as the base layer; any other scope uses the folder-scoped
    /// projection.
    pub fn new(
        settings: FolderSettingsModel,
        scoped: Vec<ScopedModel>,
        scope: ConfigurationScope,
    ) -> Self {
        let mut model = Self {
            settings,
            scoped,
            scope,
            consolidated: ConfigurationModel::empty(),
        };
        model.consolidate();
        model
    }

    /// Rebuild the consolidated contents and overrides from the constituents.
    pub fn consolidate(&mut self) {
        let mut consolidated = ConfigurationModel::empty();

        if self.scope == ConfigurationScope::Workspace {
            consolidated.merge(self.settings.model());
        } else {
            consolidated.merge(&self.settings.create_folder_scoped_configuration_model());
        }
        for scoped in &self.scoped {
            consolidated.merge(scoped.model());
        }

        tracing::debug!(
            source = self.settings.name(),
            scope = %self.scope,
            scoped = self.scoped.len(),
            overrides = consolidated.overrides().len(),
            "Consolidated folder configuration"
        );
        self.consolidated = consolidated;
    }

    /// Re-admit the settings against the current schema, then consolidate.
    ///
    /// This is the entry point after a schema registry change.
    pub fn update(&mut self) {
        self.settings.reprocess();
        self.consolidate();
    }

    /// Re-parse the folder settings from new text, then consolidate.
    pub fn update_settings(&mut self, content: &str) {
        self.settings.update(content);
        self.consolidate();
    }

    /// Replace the scoped model with the same scope tag, or append it.
    pub fn update_scoped(&mut self, model: ScopedModel) {
        match self.scoped.iter().position(|s| s.scope() == model.scope()) {
            Some(index) => self.scoped[index] = model,
            None => self.scoped.push(model),
        }
        self.consolidate();
    }

    /// Remove the scoped model with `scope`, returning it if present.
    pub fn remove_scoped(&mut self, scope: &str) -> Option<ScopedModel> {
        let index = self.scoped.iter().position(|s| s.scope() == scope)?;
        let removed = self.scoped.remove(index);
        self.consolidate();
        Some(removed)
    }

    pub fn settings(&self) -> &FolderSettingsModel {
        &self.settings
    }

    pub fn scoped_models(&self) -> &[ScopedModel] {
        &self.scoped
    }

    pub fn scope(&self) -> ConfigurationScope {
        self.scope
    }

    pub fn contents(&self) -> &ValueTree {
        self.consolidated.contents()
    }

    pub fn overrides(&self) -> &[OverrideEntry] {
        self.consolidated.overrides()
    }

    pub fn get_value(&self, section: &str) -> Option<&Value> {
        self.consolidated.get_value(section)
    }

    /// Settings keys followed by `<scope>.<key>` for each allow-listed
    /// scoped model.
    ///
    /// Scoped models outside the standalone allow-list still contribute
    /// contents but no keys.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = self.settings.keys().to_vec();
        for scoped in &self.scoped {
            let scope = scoped.scope();
            if is_standalone_scope(scope) {
                keys.extend(scoped.keys().iter().map(|key| format!("{scope}.{key}")));
            }
        }
        keys
    }

    /// Settings keys the admission filter rejected.
    pub fn unsupported_keys(&self) -> &[String] {
        self.settings.unsupported_keys()
    }

    /// The consolidated layer as handed to a multi-layer resolver.
    pub fn to_model(&self) -> ConfigurationModel {
        self.consolidated.clone().with_keys(self.keys())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SharedSchemaProvider;
    use conf_schema::{PropertySchema, SchemaRegistry};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    fn empty_schema() -> SharedSchemaProvider {
        Arc::new(SchemaRegistry::new())
    }

    fn settings(content: &str) -> FolderSettingsModel {
        FolderSettingsModel::new(content, "settings", empty_schema())
    }

    #[test]
    fn test_scoped_layers_merge_after_settings() {
        let model = FolderConfigurationModel::new(
            settings(r#"{"x": 1, "y": 1}"#),
            vec![ScopedModel::new(r#"{"z": 2}"#, "tasks", "tasks")],
            ConfigurationScope::Workspace,
        );

        assert_eq!(
            Value::Object(model.contents().clone()),
            json!({"x": 1, "y": 1, "tasks": {"z": 2}})
        );
        assert_eq!(model.keys(), vec!["x", "y", "tasks.z"]);
    }

    #[test]
    fn test_scoped_model_wins_over_colliding_settings_key() {
        let model = FolderConfigurationModel::new(
            settings(r#"{"tasks": {"version": "1", "keep": true}}"#),
            vec![ScopedModel::new(r#"{"version": "2"}"#, "tasks", "tasks")],
            ConfigurationScope::Workspace,
        );

        assert_eq!(
            Value::Object(model.contents().clone()),
            json!({"tasks": {"version": "2", "keep": true}})
        );
    }

    #[test]
    fn test_unlisted_scope_contributes_contents_but_no_keys() {
        let model = FolderConfigurationModel::new(
            settings(r#"{"a": 1}"#),
            vec![ScopedModel::new(r#"{"b": 2}"#, "extensions", "extensions")],
            ConfigurationScope::Workspace,
        );

        assert_eq!(model.get_value("extensions.b"), Some(&json!(2)));
        assert_eq!(model.keys(), vec!["a"]);
    }

    #[test]
    fn test_folder_scope_uses_folder_projection() {
        let schema: SharedSchemaProvider = Arc::new(
            [
                ("files.exclude", PropertySchema::scoped(ConfigurationScope::Folder)),
                ("window.zoom", PropertySchema::scoped(ConfigurationScope::Window)),
            ]
            .into_iter()
            .collect::<SchemaRegistry>(),
        );
        let settings = FolderSettingsModel::new(
            r#"{"files.exclude": {"x": true}, "window.zoom": 2, "editor.fontSize": 12}"#,
            "settings",
            schema,
        );

        let folder = FolderConfigurationModel::new(
            settings.clone(),
            vec![],
            ConfigurationScope::Folder,
        );
        assert_eq!(
            Value::Object(folder.contents().clone()),
            json!({"files": {"exclude": {"x": true}}})
        );

        let workspace = FolderConfigurationModel::new(settings, vec![], ConfigurationScope::Workspace);
        assert_eq!(
            Value::Object(workspace.contents().clone()),
            json!({"files": {"exclude": {"x": true}}, "window": {"zoom": 2}, "editor": {"fontSize": 12}})
        );
    }

    #[test]
    fn test_update_scoped_replaces_by_scope() {
        let mut model = FolderConfigurationModel::new(
            settings("{}"),
            vec![
                ScopedModel::new(r#"{"a": 1}"#, "tasks", "tasks"),
                ScopedModel::new(r#"{"b": 1}"#, "launch", "launch"),
            ],
            ConfigurationScope::Workspace,
        );

        model.update_scoped(ScopedModel::new(r#"{"c": 3}"#, "tasks", "tasks"));

        assert_eq!(model.scoped_models().len(), 2);
        assert_eq!(model.keys(), vec!["tasks.c", "launch.b"]);
        assert_eq!(model.get_value("tasks.a"), None);

        let removed = model.remove_scoped("launch").unwrap();
        assert_eq!(removed.scope(), "launch");
        assert_eq!(model.get_value("launch"), None);
        assert!(model.remove_scoped("launch").is_none());
    }

    #[test]
    fn test_update_settings_reconsolidates() {
        let mut model = FolderConfigurationModel::new(
            settings(r#"{"a": 1}"#),
            vec![ScopedModel::new(r#"{"z": 1}"#, "tasks", "tasks")],
            ConfigurationScope::Workspace,
        );

        model.update_settings(r#"{"b": 2}"#);

        assert_eq!(
            Value::Object(model.contents().clone()),
            json!({"b": 2, "tasks": {"z": 1}})
        );
    }

    #[test]
    fn test_to_model_carries_aggregate_keys() {
        let model = FolderConfigurationModel::new(
            settings(r#"{"x": 1, "[rust]": {"y": 2}}"#),
            vec![ScopedModel::new(r#"{"z": 2}"#, "launch", "launch")],
            ConfigurationScope::Workspace,
        );

        let resolved = model.to_model();
        assert_eq!(resolved.keys(), ["x", "launch.z"]);
        assert_eq!(resolved.overrides().len(), 1);
        assert_eq!(resolved.contents(), model.contents());
    }
}
