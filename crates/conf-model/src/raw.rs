//! Raw models: parsed sources with a pluggable processing step
//!
//! Every configuration source is a [`RawModel`]. What distinguishes a folder
//! settings file from a tasks file is not the model type but the
//! [`RawProcessor`] strategy it carries.

use serde_json::Value;

use crate::model::ConfigurationModel;
use crate::overrides::OverrideEntry;
use crate::parse::parse_raw;
use crate::tree::ValueTree;

/// Processing strategy applied between parsing and model construction.
///
/// Both hooks default to the identity, so an empty `impl` yields a plain
/// model.
pub trait RawProcessor {
    /// Narrow the parsed flat mapping before it is built into a model.
    ///
    /// Called on every update and every explicit [`RawModel::process`].
    fn process_raw(&mut self, raw: ValueTree) -> ValueTree {
        raw
    }

    /// Reshape the model built from the processed mapping.
    fn finish(&self, model: ConfigurationModel) -> ConfigurationModel {
        model
    }
}

/// The identity strategy: contents exactly as declared.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unprocessed;

impl RawProcessor for Unprocessed {}

/// A configuration source parsed from text.
///
/// Each [`update`](Self::update) fully replaces the model; there are no
/// partial updates. Malformed content is never an error for the caller:
/// the failure is recorded in [`parse_errors`](Self::parse_errors), logged,
/// and the model is built from an empty mapping.
#[derive(Debug, Clone)]
pub struct RawModel<P> {
    name: String,
    processor: P,
    model: ConfigurationModel,
    parse_errors: Vec<String>,
}

impl<P: RawProcessor> RawModel<P> {
    /// Parse `content` and build the model through `processor`.
    pub fn new(content: &str, name: impl Into<String>, mut processor: P) -> Self {
        let name = name.into();
        let (raw, parse_errors) = parse_or_empty(&name, content);
        let model = build(&name, &mut processor, raw);
        Self {
            name,
            processor,
            model,
            parse_errors,
        }
    }

    /// Re-parse from new text, replacing contents, keys and overrides.
    pub fn update(&mut self, content: &str) {
        let (raw, parse_errors) = parse_or_empty(&self.name, content);
        self.parse_errors = parse_errors;
        self.model = build(&self.name, &mut self.processor, raw);
    }

    /// Rebuild the model from an already parsed flat mapping.
    pub fn process(&mut self, raw: ValueTree) {
        self.model = build(&self.name, &mut self.processor, raw);
    }

    /// Source name used in diagnostics (e.g. `settings`, `tasks`).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }

    pub fn model(&self) -> &ConfigurationModel {
        &self.model
    }

    pub fn contents(&self) -> &ValueTree {
        self.model.contents()
    }

    /// Top-level dotted keys declared by the source, override sections excluded.
    pub fn keys(&self) -> &[String] {
        self.model.keys()
    }

    pub fn overrides(&self) -> &[OverrideEntry] {
        self.model.overrides()
    }

    pub fn get_value(&self, section: &str) -> Option<&Value> {
        self.model.get_value(section)
    }

    /// Messages from the last parse; empty if the content was well formed.
    pub fn parse_errors(&self) -> &[String] {
        &self.parse_errors
    }
}

fn parse_or_empty(name: &str, content: &str) -> (ValueTree, Vec<String>) {
    match parse_raw(content) {
        Ok(raw) => (raw, Vec::new()),
        Err(e) => {
            tracing::warn!(source = name, "Failed to parse configuration: {e}");
            (ValueTree::new(), vec![e.to_string()])
        }
    }
}

fn build<P: RawProcessor>(name: &str, processor: &mut P, raw: ValueTree) -> ConfigurationModel {
    let processed = processor.process_raw(raw);
    processor.finish(ConfigurationModel::from_raw(&processed, name))
}
