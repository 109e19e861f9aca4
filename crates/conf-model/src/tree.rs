//! Value tree construction and merging
//!
//! A value tree is a nested JSON object built from a flat mapping whose keys
//! are dot-separated paths: `{"editor.fontSize": 12}` becomes
//! `{"editor": {"fontSize": 12}}`.
//!
//! # Conflicts
//!
//! Two declarations conflict when one key is a path prefix of another and
//! the shorter one holds a non-object value. The last declaration wins:
//!
//! - `{"a": 1, "a.b": 2}` builds `{"a": {"b": 2}}`
//! - `{"a.b": 2, "a": 1}` builds `{"a": 1}`
//!
//! Each conflict is reported through the caller's callback; none is fatal.

use serde_json::{Map, Value};

/// Nested mapping of configuration values.
pub type ValueTree = Map<String, Value>;

/// Build a value tree from a flat mapping of dotted keys.
///
/// `on_conflict` receives a human-readable message for every path conflict.
///
/// # Examples
///
/// ```
/// use conf_model::tree::to_values_tree;
/// use serde_json::json;
///
/// let raw = json!({"editor.fontSize": 12, "editor.tabSize": 4, "files.exclude": {"target": true}});
/// let tree = to_values_tree(raw.as_object().unwrap(), |_| {});
/// assert_eq!(serde_json::Value::Object(tree), json!({
///     "editor": {"fontSize": 12, "tabSize": 4},
///     "files": {"exclude": {"target": true}}
/// }));
/// ```
pub fn to_values_tree(raw: &ValueTree, mut on_conflict: impl FnMut(&str)) -> ValueTree {
    let mut root = ValueTree::new();
    for (key, value) in raw {
        add_to_value_tree(&mut root, key, value.clone(), &mut on_conflict);
    }
    root
}

/// Deepest dotted key accepted into a value tree, in segments.
///
/// Matches the nesting limit serde_json enforces while parsing, so a parsed
/// value never exceeds it either.
pub const MAX_KEY_DEPTH: usize = 128;

/// Whether `key` has no more than [`MAX_KEY_DEPTH`] segments.
pub fn within_depth_limit(key: &str) -> bool {
    key.split('.').nth(MAX_KEY_DEPTH).is_none()
}

/// Insert `value` at the dotted `key` path, creating intermediate mappings.
///
/// Keys deeper than [`MAX_KEY_DEPTH`] are skipped with a warning.
pub fn add_to_value_tree(
    root: &mut ValueTree,
    key: &str,
    value: Value,
    on_conflict: &mut impl FnMut(&str),
) {
    if !within_depth_limit(key) {
        tracing::warn!(
            segments = key.split('.').count(),
            limit = MAX_KEY_DEPTH,
            "Ignoring setting nested deeper than the limit"
        );
        return;
    }

    let segments: Vec<&str> = key.split('.').collect();
    let Some((last, parents)) = segments.split_last() else {
        return;
    };

    let mut current = root;
    for (depth, segment) in parents.iter().enumerate() {
        let entry = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(ValueTree::new()));
        if !entry.is_object() {
            on_conflict(&format!(
                "Ignoring {} = {} as {} is being set",
                parents[..=depth].join("."),
                entry,
                key
            ));
            *entry = Value::Object(ValueTree::new());
        }
        let Value::Object(map) = entry else {
            return;
        };
        current = map;
    }

    if matches!(current.get(*last), Some(Value::Object(_))) && !value.is_object() {
        on_conflict(&format!(
            "Ignoring nested settings under {} as it is being set to {}",
            key, value
        ));
    }
    current.insert(last.to_string(), value);
}

/// Deep merge `source` into `target`.
///
/// Where both sides hold a mapping at the same path the mappings are merged
/// recursively; everywhere else `source` replaces `target`. Arrays are
/// replaced wholesale, never concatenated.
pub fn merge_contents(target: &mut ValueTree, source: &ValueTree) {
    for (key, source_value) in source {
        if let (Some(Value::Object(target_map)), Value::Object(source_map)) =
            (target.get_mut(key), source_value)
        {
            merge_contents(target_map, source_map);
            continue;
        }
        target.insert(key.clone(), source_value.clone());
    }
}

/// Look up the value at a dotted `section` path.
///
/// Returns `None` if any segment is missing or crosses a non-object.
pub fn get_value<'a>(tree: &'a ValueTree, section: &str) -> Option<&'a Value> {
    let mut segments = section.split('.');
    let first = segments.next()?;
    let mut current = tree.get(first)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn tree(value: Value) -> ValueTree {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn build(raw: Value) -> (Value, Vec<String>) {
        let mut conflicts = Vec::new();
        let built = to_values_tree(&tree(raw), |message| conflicts.push(message.to_string()));
        (Value::Object(built), conflicts)
    }

    #[test]
    fn test_nested_keys_share_parents() {
        let (built, conflicts) = build(json!({
            "editor.fontSize": 12,
            "editor.minimap.enabled": false,
            "editor.minimap.side": "right"
        }));

        assert_eq!(
            built,
            json!({"editor": {"fontSize": 12, "minimap": {"enabled": false, "side": "right"}}})
        );
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_object_value_and_dotted_key_combine() {
        let (built, conflicts) = build(json!({
            "editor": {"fontSize": 12},
            "editor.tabSize": 4
        }));

        assert_eq!(built, json!({"editor": {"fontSize": 12, "tabSize": 4}}));
        assert!(conflicts.is_empty());
    }

    #[rstest]
    #[case(json!({"a": 1, "a.b": 2}), json!({"a": {"b": 2}}))]
    #[case(json!({"a.b": 2, "a": 1}), json!({"a": 1}))]
    #[case(json!({"a.b": 1, "a.b.c": 2}), json!({"a": {"b": {"c": 2}}}))]
    #[case(json!({"a.b.c": 2, "a.b": 1}), json!({"a": {"b": 1}}))]
    fn test_conflicts_resolve_to_last_declaration(#[case] raw: Value, #[case] expected: Value) {
        let (built, conflicts) = build(raw);
        assert_eq!(built, expected);
        assert_eq!(conflicts.len(), 1);
    }

    #[test]
    fn test_conflict_message_names_both_keys() {
        let (_, conflicts) = build(json!({"a": 1, "a.b": 2}));
        assert!(conflicts[0].contains("a = 1"), "got: {}", conflicts[0]);
        assert!(conflicts[0].contains("a.b"), "got: {}", conflicts[0]);
    }

    #[test]
    fn test_over_deep_key_is_skipped() {
        let deep = vec!["a"; 200_000].join(".");
        let mut raw = ValueTree::new();
        raw.insert(deep, json!(1));
        raw.insert("b".to_string(), json!(2));

        let mut conflicts = Vec::new();
        let built = to_values_tree(&raw, |message| conflicts.push(message.to_string()));

        assert_eq!(Value::Object(built), json!({"b": 2}));
        assert!(conflicts.is_empty());
    }

    #[test]
    fn test_key_at_depth_limit_is_kept() {
        let key = vec!["a"; MAX_KEY_DEPTH].join(".");
        let mut raw = ValueTree::new();
        raw.insert(key.clone(), json!(true));
        let built = to_values_tree(&raw, |_| {});

        assert!(within_depth_limit(&key));
        assert!(!within_depth_limit(&format!("{key}.a")));
        assert_eq!(get_value(&built, &key), Some(&json!(true)));
    }

    #[test]
    fn test_merge_contents_is_deep() {
        let mut target = tree(json!({"a": 1, "b": {"x": 10, "y": 20}}));
        let source = tree(json!({"b": {"y": 25, "z": 30}, "c": 3}));

        merge_contents(&mut target, &source);

        assert_eq!(
            Value::Object(target),
            json!({"a": 1, "b": {"x": 10, "y": 25, "z": 30}, "c": 3})
        );
    }

    #[rstest]
    #[case(json!({"a": [1, 2]}), json!({"a": [3]}), json!({"a": [3]}))]
    #[case(json!({"a": {"x": 1}}), json!({"a": 5}), json!({"a": 5}))]
    #[case(json!({"a": 5}), json!({"a": {"x": 1}}), json!({"a": {"x": 1}}))]
    fn test_merge_replaces_non_mappings(
        #[case] target: Value,
        #[case] source: Value,
        #[case] expected: Value,
    ) {
        let mut target = tree(target);
        merge_contents(&mut target, &tree(source));
        assert_eq!(Value::Object(target), expected);
    }

    #[test]
    fn test_get_value() {
        let tree = tree(json!({"editor": {"minimap": {"enabled": true}}, "x": 1}));

        assert_eq!(get_value(&tree, "editor.minimap.enabled"), Some(&json!(true)));
        assert_eq!(get_value(&tree, "editor.minimap"), Some(&json!({"enabled": true})));
        assert_eq!(get_value(&tree, "x"), Some(&json!(1)));
        assert_eq!(get_value(&tree, "x.y"), None);
        assert_eq!(get_value(&tree, "missing"), None);
    }
}
