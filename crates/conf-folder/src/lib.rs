//! Folder configuration resolution
//!
//! Turns the configuration sources of one workspace folder into the single
//! consolidated layer a multi-layer resolver consumes:
//!
//! ```text
//!  settings.json ──▶ FolderSettingsModel ──(workspace | folder projection)──┐
//!                     └─ executable keys ─▶ unsupported_keys                ├─▶ FolderConfigurationModel
//!  tasks.json ─────▶ ScopedModel { "tasks": {...} } ────────────────────────┤
//!  launch.json ────▶ ScopedModel { "launch": {...} } ───────────────────────┘
//! ```
//!
//! # Trust boundary
//!
//! Folder settings may come from version-controlled, untrusted content.
//! Keys registered as executable in the injected
//! [`SchemaProvider`](conf_schema::SchemaProvider) are never admitted into
//! a folder's settings; they are reported through
//! [`FolderSettingsModel::unsupported_keys`] instead.
//!
//! # Schema changes
//!
//! Nothing here observes the schema provider. After the registry changes,
//! call [`FolderConfigurationModel::update`] (or
//! [`FolderSettingsModel::reprocess`]) to re-admit the stored settings
//! without re-parsing them.
//!
//! # Concurrency
//!
//! All operations are synchronous in-memory transformations. Models are
//! plain owned values with no interior locking; share them across threads
//! only behind the caller's own synchronization.

pub mod folder;
pub mod scoped;
pub mod settings;
pub mod standalone;

pub use folder::FolderConfigurationModel;
pub use scoped::{Namespaced, ScopedModel};
pub use settings::{AdmissionFilter, FolderSettingsModel, SharedSchemaProvider};
pub use standalone::{
    CONFIG_FOLDER_DEFAULT_NAME, FOLDER_SETTINGS_FILE, FOLDER_SETTINGS_NAME,
    LAUNCH_CONFIGURATION_KEY, STANDALONE_CONFIGURATIONS, TASKS_CONFIGURATION_KEY,
    is_standalone_scope,
};
