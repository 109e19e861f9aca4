//! The configuration model handed between layers
//!
//! A [`ConfigurationModel`] is the unit the resolution engine produces and
//! merges: a value tree, the dotted keys it was built from, and the
//! override sections declared alongside it.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::overrides::{OverrideEntry, override_selector};
use crate::tree::{self, ValueTree};

/// Contents, keys and overrides of one configuration layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConfigurationModel {
    contents: ValueTree,
    keys: Vec<String>,
    overrides: Vec<OverrideEntry>,
}

impl ConfigurationModel {
    pub fn new(contents: ValueTree, keys: Vec<String>, overrides: Vec<OverrideEntry>) -> Self {
        Self {
            contents,
            keys,
            overrides,
        }
    }

    /// An empty model, as produced by an empty source.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a model from a flat mapping of dotted keys.
    ///
    /// Keys of the form `[selector]` become [`OverrideEntry`] items in
    /// declaration order; all other keys are folded into the value tree and
    /// listed in [`keys`](Self::keys). Path conflicts are logged against
    /// `name` and resolved in favour of the last declaration.
    pub fn from_raw(raw: &ValueTree, name: &str) -> Self {
        let mut settings = Map::new();
        let mut overrides = Vec::new();

        for (key, value) in raw {
            let Some(selector) = override_selector(key) else {
                settings.insert(key.clone(), value.clone());
                continue;
            };

            match value {
                Value::Object(section) => {
                    let contents = tree::to_values_tree(section, |message| {
                        tracing::warn!(source = name, selector, "Conflict in override section: {message}");
                    });
                    overrides.push(OverrideEntry::new(selector, contents));
                }
                other => {
                    tracing::warn!(source = name, key = %key, "Ignoring override section holding {other}");
                }
            }
        }

        let contents = tree::to_values_tree(&settings, |message| {
            tracing::warn!(source = name, "Conflict in settings file: {message}");
        });
        let keys = settings
            .keys()
            .filter(|key| tree::within_depth_limit(key))
            .cloned()
            .collect();

        Self::new(contents, keys, overrides)
    }

    pub fn contents(&self) -> &ValueTree {
        &self.contents
    }

    /// Dotted keys this model declares, in declaration order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn overrides(&self) -> &[OverrideEntry] {
        &self.overrides
    }

    /// Value at a dotted section path, e.g. `editor.minimap.enabled`.
    pub fn get_value(&self, section: &str) -> Option<&Value> {
        tree::get_value(&self.contents, section)
    }

    /// Contents as seen under `selector`.
    ///
    /// Every override entry for `selector` is merged over the base contents
    /// in list order, so later entries win.
    pub fn override_contents(&self, selector: &str) -> ValueTree {
        let mut contents = self.contents.clone();
        for entry in self.overrides.iter().filter(|entry| entry.selector == selector) {
            tree::merge_contents(&mut contents, &entry.contents);
        }
        contents
    }

    /// Merge `other` on top of this model.
    ///
    /// - `contents`: deep merge, `other` wins outside nested mappings
    /// - `overrides`: `other`'s entries appended after the existing ones
    /// - `keys`: extended with the keys of `other` not yet present
    pub fn merge(&mut self, other: &ConfigurationModel) {
        tree::merge_contents(&mut self.contents, &other.contents);
        self.overrides.extend(other.overrides.iter().cloned());
        for key in &other.keys {
            if !self.keys.contains(key) {
                self.keys.push(key.clone());
            }
        }
    }

    /// Replace the key list, keeping contents and overrides.
    pub fn with_keys(mut self, keys: Vec<String>) -> Self {
        self.keys = keys;
        self
    }

    /// Consume the model into its parts.
    pub fn into_parts(self) -> (ValueTree, Vec<String>, Vec<OverrideEntry>) {
        (self.contents, self.keys, self.overrides)
    }
}
