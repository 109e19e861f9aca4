//! Selector-scoped override sections
//!
//! A top-level key written as `[selector]` does not name a setting: its
//! value is a block of settings that a downstream resolver applies on top of
//! the base contents when `selector` (usually a language identifier) is
//! active.
//!
//! ```json
//! {
//!     "editor.tabSize": 2,
//!     "[rust]": { "editor.tabSize": 4 }
//! }
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::tree::ValueTree;

/// Pattern matching an override section key, capturing the selector.
pub static OVERRIDE_PROPERTY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(.*)\]$").unwrap());

/// Settings that apply only when `selector` is active.
///
/// Entries are kept in declaration order. Entries sharing a selector are
/// never collapsed here; the later entry takes precedence when a consumer
/// merges them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverrideEntry {
    pub selector: String,
    pub contents: ValueTree,
}

impl OverrideEntry {
    pub fn new(selector: impl Into<String>, contents: ValueTree) -> Self {
        Self {
            selector: selector.into(),
            contents,
        }
    }
}

/// Whether a top-level key declares an override section.
pub fn is_override_key(key: &str) -> bool {
    OVERRIDE_PROPERTY_PATTERN.is_match(key)
}

/// The trimmed selector of an override section key.
///
/// ```
/// use conf_model::overrides::override_selector;
///
/// assert_eq!(override_selector("[typescript]"), Some("typescript"));
/// assert_eq!(override_selector("[ rust ]"), Some("rust"));
/// assert_eq!(override_selector("editor.tabSize"), None);
/// ```
pub fn override_selector(key: &str) -> Option<&str> {
    OVERRIDE_PROPERTY_PATTERN
        .captures(key)
        .and_then(|captures| captures.get(1))
        .map(|selector| selector.as_str().trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("[rust]", true)]
    #[case("[]", true)]
    #[case("[a.b]", true)]
    #[case("rust", false)]
    #[case("[rust", false)]
    #[case("x[rust]", false)]
    fn test_is_override_key(#[case] key: &str, #[case] expected: bool) {
        assert_eq!(is_override_key(key), expected);
    }

    #[test]
    fn test_override_selector_trims() {
        assert_eq!(override_selector("[  markdown ]"), Some("markdown"));
        assert_eq!(override_selector("[]"), Some(""));
    }
}
