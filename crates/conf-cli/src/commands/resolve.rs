//! The resolve command

use colored::Colorize;
use conf_folder::FolderConfigurationModel;
use conf_model::{OverrideEntry, ValueTree};
use serde::Serialize;

use crate::error::Result;
use crate::loader::FolderLoader;

/// Machine-readable form of a consolidated folder layer.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOutput<'a> {
    pub contents: &'a ValueTree,
    pub keys: Vec<String>,
    pub overrides: &'a [OverrideEntry],
    pub unsupported_keys: &'a [String],
}

impl<'a> From<&'a FolderConfigurationModel> for ResolveOutput<'a> {
    fn from(model: &'a FolderConfigurationModel) -> Self {
        Self {
            contents: model.contents(),
            keys: model.keys(),
            overrides: model.overrides(),
            unsupported_keys: model.unsupported_keys(),
        }
    }
}

/// Run the resolve command
pub fn run_resolve(loader: &FolderLoader, json: bool) -> Result<()> {
    let model = loader.load()?;
    report_diagnostics(&model);

    let output = if json {
        serde_json::to_string_pretty(&ResolveOutput::from(&model))?
    } else {
        serde_json::to_string_pretty(model.contents())?
    };
    println!("{output}");

    Ok(())
}

/// Print parse failures and unsupported keys to stderr.
fn report_diagnostics(model: &FolderConfigurationModel) {
    let settings = model.settings();
    for message in settings.parse_errors() {
        eprintln!("{} {}: {}", "warning:".yellow().bold(), settings.name(), message);
    }
    for scoped in model.scoped_models() {
        for message in scoped.parse_errors() {
            eprintln!("{} {}: {}", "warning:".yellow().bold(), scoped.name(), message);
        }
    }

    let unsupported = model.unsupported_keys();
    if !unsupported.is_empty() {
        eprintln!(
            "{} ignoring executable folder settings: {}",
            "warning:".yellow().bold(),
            unsupported.join(", ")
        );
    }
}
