//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use conf_folder::CONFIG_FOLDER_DEFAULT_NAME;
use conf_schema::ConfigurationScope;

/// Resolve the consolidated configuration layer of a workspace folder
#[derive(Parser, Debug)]
#[command(name = "confres")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Schema file (JSON, or TOML by .toml extension) describing known settings
    #[arg(long, global = true, env = "CONFRES_SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Name of the configuration directory inside the folder
    #[arg(long, global = true, default_value = CONFIG_FOLDER_DEFAULT_NAME)]
    pub config_dir: String,

    /// Which settings projection forms the base layer
    #[arg(long, global = true, value_enum, default_value_t = LayerScope::Workspace)]
    pub scope: LayerScope,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Base layer selection for the folder model
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerScope {
    /// All admitted folder settings
    Workspace,
    /// Only folder-scoped settings
    Folder,
}

impl From<LayerScope> for ConfigurationScope {
    fn from(scope: LayerScope) -> Self {
        match scope {
            LayerScope::Workspace => ConfigurationScope::Workspace,
            LayerScope::Folder => ConfigurationScope::Folder,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the consolidated configuration of a folder
    Resolve {
        /// Workspace folder root
        #[arg(default_value = ".")]
        folder: PathBuf,

        /// Output contents, keys, overrides and unsupported keys as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the consolidated keys of a folder
    Keys {
        /// Workspace folder root
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// List folder settings rejected as executable
    Unsupported {
        /// Workspace folder root
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Print the value at a dotted section path
    Get {
        /// Workspace folder root
        folder: PathBuf,

        /// Dotted section, e.g. editor.fontSize or tasks.version
        section: String,

        /// Read through the override sections of this selector
        #[arg(long = "override", value_name = "SELECTOR")]
        override_selector: Option<String>,
    },
}
