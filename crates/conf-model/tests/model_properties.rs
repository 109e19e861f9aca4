//! Property tests for model construction from flat mappings

use conf_model::{ConfigurationModel, ValueTree, merge_contents};
use proptest::prelude::*;
use serde_json::{Value, json};

fn segment() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

fn dotted_key() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..4).prop_map(|segments| segments.join("."))
}

fn flat_mapping() -> impl Strategy<Value = ValueTree> {
    prop::collection::vec(
        prop_oneof![
            (dotted_key(), any::<i64>()).prop_map(|(k, v)| (k, json!(v))),
            (segment(), any::<i64>()).prop_map(|(s, v)| (format!("[{s}]"), json!({ "x": v }))),
        ],
        0..12,
    )
    .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn keys_are_exactly_the_non_override_keys(raw in flat_mapping()) {
        let model = ConfigurationModel::from_raw(&raw, "settings");

        let expected: Vec<&String> = raw.keys().filter(|k| !k.starts_with('[')).collect();
        let actual: Vec<&String> = model.keys().iter().collect();
        prop_assert_eq!(actual, expected);

        let override_count = raw.keys().filter(|k| k.starts_with('[')).count();
        prop_assert_eq!(model.overrides().len(), override_count);
        prop_assert!(model.contents().keys().all(|k| !k.starts_with('[')));
    }

    #[test]
    fn merging_a_model_into_itself_is_stable(raw in flat_mapping()) {
        let model = ConfigurationModel::from_raw(&raw, "settings");
        let mut contents = model.contents().clone();
        merge_contents(&mut contents, model.contents());
        prop_assert_eq!(Value::Object(contents), Value::Object(model.contents().clone()));
    }
}
