//! Fake schema registries with a fixed, known set of properties.

use std::sync::{Arc, RwLock};

use conf_schema::{ConfigurationScope, PropertySchema, SchemaRegistry};

/// Executable, workspace-scoped.
pub const EXECUTABLE_KEY: &str = "terminal.integrated.shell";

/// Executable, folder-scoped.
pub const EXECUTABLE_FOLDER_KEY: &str = "task.autoRun";

/// Plain workspace-scoped.
pub const WORKSPACE_KEY: &str = "editor.fontSize";

/// Plain folder-scoped.
pub const FOLDER_KEY: &str = "files.exclude";

/// Plain window-scoped.
pub const WINDOW_KEY: &str = "window.zoomLevel";

/// A registry covering one key of each interesting kind.
pub fn fake_registry() -> SchemaRegistry {
    [
        (EXECUTABLE_KEY, PropertySchema::executable()),
        (
            EXECUTABLE_FOLDER_KEY,
            PropertySchema::new(ConfigurationScope::Folder, true),
        ),
        (WORKSPACE_KEY, PropertySchema::scoped(ConfigurationScope::Workspace)),
        (FOLDER_KEY, PropertySchema::scoped(ConfigurationScope::Folder)),
        (WINDOW_KEY, PropertySchema::scoped(ConfigurationScope::Window)),
    ]
    .into_iter()
    .collect()
}

/// [`fake_registry`] behind a lock, for tests that change it mid-flight.
pub fn shared_registry() -> Arc<RwLock<SchemaRegistry>> {
    Arc::new(RwLock::new(fake_registry()))
}

/// [`fake_registry`] as a JSON schema document.
pub fn fake_registry_json() -> String {
    let registry = fake_registry();
    let document: serde_json::Map<String, serde_json::Value> = registry
        .keys()
        .into_iter()
        .map(|key| {
            let schema = registry.get(&key).copied().unwrap_or_default();
            (key, serde_json::to_value(schema).unwrap())
        })
        .collect();
    serde_json::Value::Object(document).to_string()
}
