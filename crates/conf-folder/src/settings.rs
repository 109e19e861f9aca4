//! Folder settings: schema-driven admission of a folder's main settings
//!
//! Folder settings may originate from untrusted, version-controlled
//! content. A key whose schema marks it executable is therefore never
//! admitted; it is recorded in [`FolderSettingsModel::unsupported_keys`] for
//! the caller to surface. Keys without a schema are always admitted so that
//! settings of not-yet-registered contributors survive until their schema
//! arrives.

use std::fmt;
use std::sync::Arc;

use conf_model::overrides::is_override_key;
use conf_model::tree::within_depth_limit;
use conf_model::{ConfigurationModel, OverrideEntry, RawModel, RawProcessor, ValueTree, to_values_tree};
use conf_schema::{ConfigurationScope, SchemaProvider};
use serde_json::Value;

/// Schema provider shared between the models of every folder.
pub type SharedSchemaProvider = Arc<dyn SchemaProvider + Send + Sync>;

/// Strategy that rejects executable keys and keeps the unfiltered snapshot.
///
/// Only top-level keys are checked. Keys inside `[selector]` override
/// sections are not filtered and reach the model's overrides unchanged.
#[derive(Clone)]
pub struct AdmissionFilter {
    schema: SharedSchemaProvider,
    snapshot: ValueTree,
    unsupported_keys: Vec<String>,
}

impl AdmissionFilter {
    pub fn new(schema: SharedSchemaProvider) -> Self {
        Self {
            schema,
            snapshot: ValueTree::new(),
            unsupported_keys: Vec::new(),
        }
    }

    /// The last parsed flat mapping, before admission.
    pub fn snapshot(&self) -> &ValueTree {
        &self.snapshot
    }

    /// Keys rejected by the last admission pass, in declaration order.
    pub fn unsupported_keys(&self) -> &[String] {
        &self.unsupported_keys
    }

    pub fn schema(&self) -> &SharedSchemaProvider {
        &self.schema
    }
}

impl RawProcessor for AdmissionFilter {
    fn process_raw(&mut self, raw: ValueTree) -> ValueTree {
        let mut admitted = ValueTree::new();
        self.unsupported_keys.clear();

        for (key, value) in &raw {
            if self.schema.is_executable(key) {
                tracing::debug!(%key, "Rejecting executable setting from folder settings");
                self.unsupported_keys.push(key.clone());
            } else {
                admitted.insert(key.clone(), value.clone());
            }
        }

        self.snapshot = raw;
        admitted
    }
}

impl fmt::Debug for AdmissionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdmissionFilter")
            .field("snapshot", &self.snapshot)
            .field("unsupported_keys", &self.unsupported_keys)
            .finish_non_exhaustive()
    }
}

/// The main settings file of one workspace folder.
#[derive(Debug, Clone)]
pub struct FolderSettingsModel {
    raw: RawModel<AdmissionFilter>,
}

impl FolderSettingsModel {
    /// Parse `content` and admit its keys against `schema`.
    pub fn new(content: &str, name: impl Into<String>, schema: SharedSchemaProvider) -> Self {
        Self {
            raw: RawModel::new(content, name, AdmissionFilter::new(schema)),
        }
    }

    /// Re-parse from new settings text.
    pub fn update(&mut self, content: &str) {
        self.raw.update(content);
    }

    /// Re-run admission against the stored snapshot without re-parsing.
    ///
    /// Call after the schema provider changed: a key admitted while unknown
    /// can become unsupported, and a previously rejected key can return.
    pub fn reprocess(&mut self) {
        let snapshot = self.raw.processor().snapshot().clone();
        tracing::debug!(source = self.raw.name(), keys = snapshot.len(), "Reprocessing folder settings");
        self.raw.process(snapshot);
    }

    /// Keys rejected by admission; empty if none were.
    pub fn unsupported_keys(&self) -> &[String] {
        self.raw.processor().unsupported_keys()
    }

    /// The parsed flat mapping, including rejected keys.
    pub fn raw_snapshot(&self) -> &ValueTree {
        self.raw.processor().snapshot()
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

    /// Admitted top-level keys, in declaration order.
    pub fn keys(&self) -> &[String] {
        self.raw.keys()
    }

    pub fn overrides(&self) -> &[OverrideEntry] {
        self.raw.overrides()
    }

    pub fn get_value(&self, section: &str) -> Option<&Value> {
        self.raw.get_value(section)
    }

    pub fn parse_errors(&self) -> &[String] {
        self.raw.parse_errors()
    }

    /// Admitted keys whose schema scope is workspace, or that have no schema.
    pub fn create_workspace_configuration_model(&self) -> ConfigurationModel {
        self.create_scoped_configuration_model(ConfigurationScope::Workspace)
    }

    /// Admitted keys whose schema scope is folder.
    pub fn create_folder_scoped_configuration_model(&self) -> ConfigurationModel {
        self.create_scoped_configuration_model(ConfigurationScope::Folder)
    }

    fn create_scoped_configuration_model(&self, scope: ConfigurationScope) -> ConfigurationModel {
        let filter = self.raw.processor();
        let unsupported = filter.unsupported_keys();

        let projected: ValueTree = filter
            .snapshot()
            .iter()
            .filter(|(key, _)| !is_override_key(key) && !unsupported.contains(key))
            .filter(|(key, _)| filter.schema().scope_of(key) == scope)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let contents = to_values_tree(&projected, |message| {
            tracing::warn!(source = self.raw.name(), %scope, "Conflict in {scope} settings: {message}");
        });
        let keys = projected
            .keys()
            .filter(|key| within_depth_limit(key))
            .cloned()
            .collect();

        ConfigurationModel::new(contents, keys, self.overrides().to_vec())
    }
}
