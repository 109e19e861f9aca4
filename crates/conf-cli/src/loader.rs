//! Reading a folder's configuration directory from disk

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use conf_folder::{
    FOLDER_SETTINGS_FILE, FOLDER_SETTINGS_NAME, FolderConfigurationModel, FolderSettingsModel,
    STANDALONE_CONFIGURATIONS, ScopedModel, SharedSchemaProvider,
};
use conf_schema::{ConfigurationScope, SchemaRegistry};

use crate::error::{CliError, Result};

/// Load the schema registry from `path`, or an empty one.
///
/// Files ending in `.toml` are parsed as TOML, anything else as JSON.
pub fn load_schema(path: Option<&Path>) -> Result<SharedSchemaProvider> {
    let Some(path) = path else {
        tracing::debug!("No schema file given, every key is unknown");
        return Ok(Arc::new(SchemaRegistry::new()));
    };

    let content = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let registry = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => SchemaRegistry::from_toml(&content)?,
        _ => SchemaRegistry::from_json(&content)?,
    };
    tracing::debug!(path = %path.display(), properties = registry.len(), "Loaded schema");
    Ok(Arc::new(registry))
}

/// Builds the [`FolderConfigurationModel`] of one folder from disk.
///
/// Missing files are treated as empty sources; a missing standalone file
/// contributes no scoped model at all.
pub struct FolderLoader {
    root: PathBuf,
    config_dir: String,
    scope: ConfigurationScope,
    schema: SharedSchemaProvider,
}

impl FolderLoader {
    pub fn new(
        root: PathBuf,
        config_dir: &str,
        scope: ConfigurationScope,
        schema: SharedSchemaProvider,
    ) -> Self {
        Self {
            root,
            config_dir: config_dir.to_string(),
            scope,
            schema,
        }
    }

    /// Path of the folder's configuration directory.
    pub fn config_path(&self) -> PathBuf {
        self.root.join(&self.config_dir)
    }

    /// Read every configuration source and consolidate them.
    pub fn load(&self) -> Result<FolderConfigurationModel> {
        let dir = self.config_path();

        let settings_content = read_optional(&dir.join(FOLDER_SETTINGS_FILE))?.unwrap_or_default();
        let settings =
            FolderSettingsModel::new(&settings_content, FOLDER_SETTINGS_NAME, self.schema.clone());

        let mut scoped = Vec::new();
        for (scope, file) in STANDALONE_CONFIGURATIONS {
            if let Some(content) = read_optional(&dir.join(file))? {
                scoped.push(ScopedModel::new(&content, *scope, *scope));
            }
        }

        tracing::debug!(
            root = %self.root.display(),
            scoped = scoped.len(),
            scope = %self.scope,
            "Loaded folder configuration sources"
        );
        Ok(FolderConfigurationModel::new(settings, scoped, self.scope))
    }
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(CliError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
