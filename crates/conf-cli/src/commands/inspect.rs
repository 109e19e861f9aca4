//! Key listing and value lookup commands

use colored::Colorize;
use conf_model::tree;

use crate::error::{CliError, Result};
use crate::loader::FolderLoader;

/// Run the keys command
pub fn run_keys(loader: &FolderLoader) -> Result<()> {
    let model = loader.load()?;
    for key in model.keys() {
        println!("{key}");
    }
    Ok(())
}

/// Run the unsupported command
pub fn run_unsupported(loader: &FolderLoader) -> Result<()> {
    let model = loader.load()?;
    let unsupported = model.unsupported_keys();
    if unsupported.is_empty() {
        eprintln!("{}", "No unsupported folder settings.".dimmed());
        return Ok(());
    }
    for key in unsupported {
        println!("{key}");
    }
    Ok(())
}

/// Run the get command
pub fn run_get(loader: &FolderLoader, section: &str, selector: Option<&str>) -> Result<()> {
    let model = loader.load()?;

    let value = match selector {
        Some(selector) => {
            let contents = model.to_model().override_contents(selector);
            tree::get_value(&contents, section).cloned()
        }
        None => model.get_value(section).cloned(),
    };

    let Some(value) = value else {
        return Err(CliError::user(format!("No value at '{section}'")));
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
