//! Standalone configuration domains
//!
//! A standalone domain is stored in its own file inside the folder's
//! configuration directory and merged under its own top-level key.

/// Top-level key of task definitions.
pub const TASKS_CONFIGURATION_KEY: &str = "tasks";

/// Top-level key of launch definitions.
pub const LAUNCH_CONFIGURATION_KEY: &str = "launch";

/// Allow-listed standalone domains and the file names backing them.
pub const STANDALONE_CONFIGURATIONS: &[(&str, &str)] = &[
    (TASKS_CONFIGURATION_KEY, "tasks.json"),
    (LAUNCH_CONFIGURATION_KEY, "launch.json"),
];

/// Source name of the folder's main settings.
pub const FOLDER_SETTINGS_NAME: &str = "settings";

/// File name of the folder's main settings.
pub const FOLDER_SETTINGS_FILE: &str = "settings.json";

/// Default configuration directory inside a workspace folder.
pub const CONFIG_FOLDER_DEFAULT_NAME: &str = ".vscode";

/// Whether `scope` names an allow-listed standalone domain.
pub fn is_standalone_scope(scope: &str) -> bool {
    STANDALONE_CONFIGURATIONS.iter().any(|(key, _)| *key == scope)
}
