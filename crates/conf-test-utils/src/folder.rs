//! [`TestFolder`] builder for on-disk workspace folder scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary workspace folder with a configuration directory.
///
/// # Example
///
/// ```rust,no_run
/// use conf_test_utils::folder::TestFolder;
///
/// let folder = TestFolder::new();
/// folder.write_settings(r#"{"editor.fontSize": 12}"#);
/// folder.write_config_file("tasks.json", r#"{"version": "2.0.0"}"#);
/// ```
pub struct TestFolder {
    temp_dir: TempDir,
    config_dir: String,
}

impl Default for TestFolder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFolder {
    /// Create an empty folder using `.vscode` as configuration directory.
    pub fn new() -> Self {
        Self::with_config_dir(".vscode")
    }

    /// Create an empty folder with a custom configuration directory name.
    pub fn with_config_dir(config_dir: &str) -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
            config_dir: config_dir.to_string(),
        }
    }

    /// Root path of the folder.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the configuration directory (may not exist yet).
    pub fn config_path(&self) -> PathBuf {
        self.root().join(&self.config_dir)
    }

    /// Write `settings.json` into the configuration directory.
    pub fn write_settings(&self, content: &str) {
        self.write_config_file("settings.json", content);
    }

    /// Write any file into the configuration directory.
    pub fn write_config_file(&self, name: &str, content: &str) {
        let dir = self.config_path();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }

    /// Write a file relative to the folder root, returning its path.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}
