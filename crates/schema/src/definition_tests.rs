use super::*;
use serde_json::json;

#[test]
fn default_value_fills_absent_field() {
    let definition = Definition::new().with_default(json!("default")).unwrap();
    let mut data = Map::new();
    definition.apply_default("name", &mut data);
    assert_eq!(data.get("name"), Some(&json!("default")));
}

#[test]
fn default_does_not_override_present_value() {
    let definition = Definition::new().with_default(json!("default")).unwrap();
    let mut data = Map::new();
    data.insert("name".into(), json!("provided"));
    definition.apply_default("name", &mut data);
    assert_eq!(data.get("name"), Some(&json!("provided")));
}

#[test]
fn default_factory_is_invoked_lazily() {
    let definition = Definition::new()
        .with_default_factory(|| json!("generated"))
        .unwrap();
    let mut data = Map::new();
    definition.apply_default("name", &mut data);
    assert_eq!(data.get("name"), Some(&json!("generated")));
}

#[test]
fn cannot_provide_both_default_and_factory() {
    let definition = Definition::new().with_default(json!("x")).unwrap();
    assert!(definition.with_default_factory(|| json!("y")).is_err());
}
