//! Configuration scopes
//!
//! A scope restricts which configuration layer may set a key.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Layer classification of a configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfigurationScope {
    /// Only settable at application level.
    Application,

    /// Settable per window, never per workspace folder.
    Window,

    /// Settable in workspace settings.
    ///
    /// Keys without a registered schema are treated as workspace keys.
    #[default]
    Workspace,

    /// Settable per workspace folder.
    Folder,

    /// Settable per language override section.
    LanguageOverridable,
}

impl fmt::Display for ConfigurationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Application => "application",
            Self::Window => "window",
            Self::Workspace => "workspace",
            Self::Folder => "folder",
            Self::LanguageOverridable => "language-overridable",
        };
        f.write_str(name)
    }
}
