//! Configuration models for folder configuration resolution.
//!
//! A configuration source goes through three stages:
//!
//! ```text
//!  text ──parse──▶ flat mapping ──RawProcessor──▶ flat mapping ──build──▶ ConfigurationModel
//!  {"a.b": 1}      {"a.b": 1}                      (filtered)             contents {"a": {"b": 1}}
//! ```
//!
//! - [`parse`] turns JSON-with-comments into a flat mapping of dotted keys
//! - [`RawModel`] owns the parsed source and a [`RawProcessor`] strategy
//!   that narrows or reshapes what ends up in the model
//! - [`ConfigurationModel`] holds the value tree, the declared keys and the
//!   selector-scoped [`OverrideEntry`] list, and knows how to merge
//!
//! # Example
//!
//! ```
//! use conf_model::{RawModel, Unprocessed};
//! use serde_json::json;
//!
//! let model = RawModel::new(r#"{ "editor.fontSize": 12, "[rust]": { "editor.tabSize": 4 } }"#,
//!     "settings", Unprocessed);
//! assert_eq!(model.keys(), ["editor.fontSize"]);
//! assert_eq!(model.get_value("editor.fontSize"), Some(&json!(12)));
//! assert_eq!(model.overrides()[0].selector, "rust");
//! ```

pub mod error;
pub mod model;
pub mod overrides;
pub mod parse;
pub mod raw;
pub mod tree;

pub use error::{Error, Result};
pub use model::ConfigurationModel;
pub use overrides::OverrideEntry;
pub use parse::parse_raw;
pub use raw::{RawModel, RawProcessor, Unprocessed};
pub use tree::{ValueTree, merge_contents, to_values_tree};
