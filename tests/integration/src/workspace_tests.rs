//! Multi-folder workspace scenarios
//!
//! Every folder owns its own models; they share one schema registry. A
//! registry change is applied by calling `update()` on each folder.

use std::sync::Arc;

use conf_folder::{FolderConfigurationModel, FolderSettingsModel, ScopedModel};
use conf_model::ConfigurationModel;
use conf_schema::{ConfigurationScope, PropertySchema, SchemaRegistry};
use conf_test_utils::schemas::{EXECUTABLE_KEY, FOLDER_KEY, WORKSPACE_KEY, shared_registry};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn folder(
    registry: &Arc<std::sync::RwLock<SchemaRegistry>>,
    settings: &str,
    tasks: Option<&str>,
    scope: ConfigurationScope,
) -> FolderConfigurationModel {
    let settings = FolderSettingsModel::new(settings, "settings", registry.clone());
    let scoped = tasks
        .map(|content| vec![ScopedModel::new(content, "tasks", "tasks")])
        .unwrap_or_default();
    FolderConfigurationModel::new(settings, scoped, scope)
}

#[test]
fn test_folders_are_independent() {
    let registry = shared_registry();
    let mut frontend = folder(
        &registry,
        &json!({WORKSPACE_KEY: 12, "shared.flag": true}).to_string(),
        Some(r#"{"version": "2.0.0"}"#),
        ConfigurationScope::Folder,
    );
    let backend = folder(
        &registry,
        &json!({FOLDER_KEY: {"target": true}, EXECUTABLE_KEY: "zsh"}).to_string(),
        None,
        ConfigurationScope::Folder,
    );

    assert_eq!(
        Value::Object(frontend.contents().clone()),
        json!({"tasks": {"version": "2.0.0"}})
    );
    assert_eq!(
        Value::Object(backend.contents().clone()),
        json!({"files": {"exclude": {"target": true}}})
    );
    assert_eq!(backend.unsupported_keys(), [EXECUTABLE_KEY]);
    assert!(frontend.unsupported_keys().is_empty());

    frontend.update_settings(&json!({FOLDER_KEY: {"dist": true}}).to_string());
    assert_eq!(backend.get_value("files.exclude"), Some(&json!({"target": true})));
    assert_eq!(frontend.get_value("files.exclude"), Some(&json!({"dist": true})));
}

#[test]
fn test_registry_change_propagates_on_update() {
    let registry = shared_registry();
    let settings = r#"{"ext.command": "make", "ext.label": "build"}"#;
    let mut first = folder(&registry, settings, None, ConfigurationScope::Workspace);
    let mut second = folder(&registry, settings, None, ConfigurationScope::Workspace);

    registry
        .write()
        .unwrap()
        .register("ext.command", PropertySchema::executable());

    // Not observed until the caller updates
    assert!(first.unsupported_keys().is_empty());

    first.update();
    second.update();
    for model in [&first, &second] {
        assert_eq!(model.unsupported_keys(), ["ext.command"]);
        assert_eq!(model.keys(), vec!["ext.label"]);
        assert_eq!(Value::Object(model.contents().clone()), json!({"ext": {"label": "build"}}));
    }

    registry.write().unwrap().deregister("ext.command");
    first.update();
    assert!(first.unsupported_keys().is_empty());
    assert_eq!(first.get_value("ext.command"), Some(&json!("make")));
}

#[test]
fn test_downstream_resolver_layers_folder_model_last() {
    let registry = shared_registry();
    let folder_model = folder(
        &registry,
        r#"{"editor.tabSize": 4, "[rust]": {"editor.tabSize": 8}}"#,
        Some(r#"{"version": "2.0.0"}"#),
        ConfigurationScope::Workspace,
    )
    .to_model();

    let user = ConfigurationModel::from_raw(
        json!({"editor.tabSize": 2, "editor.fontSize": 12, "[rust]": {"editor.tabSize": 3}})
            .as_object()
            .unwrap(),
        "user",
    );

    let mut effective = ConfigurationModel::empty();
    effective.merge(&user);
    effective.merge(&folder_model);

    assert_eq!(effective.get_value("editor.tabSize"), Some(&json!(4)));
    assert_eq!(effective.get_value("editor.fontSize"), Some(&json!(12)));
    assert_eq!(effective.get_value("tasks.version"), Some(&json!("2.0.0")));
    assert_eq!(
        effective.override_contents("rust").get("editor"),
        Some(&json!({"tabSize": 8, "fontSize": 12}))
    );
    assert!(effective.keys().contains(&"tasks.version".to_string()));
}

#[test]
fn test_malformed_domain_file_does_not_break_folder() {
    let registry = Arc::new(std::sync::RwLock::new(SchemaRegistry::new()));
    let model = folder(
        &registry,
        r#"{"a": 1}"#,
        Some("{ this is not json"),
        ConfigurationScope::Workspace,
    );

    assert_eq!(
        Value::Object(model.contents().clone()),
        json!({"a": 1, "tasks": {}})
    );
    assert_eq!(model.scoped_models()[0].parse_errors().len(), 1);
    assert_eq!(model.keys(), vec!["a"]);
}
