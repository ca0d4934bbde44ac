use super::*;
use serde_json::json;
use std::collections::HashMap;

#[test]
fn process_schema_rejects_undefined_field_names() {
    let modifier = RequiresModifier::new(["missing"]);
    let declared: HashSet<String> = ["present".to_string()].into_iter().collect();
    assert!(modifier.process_schema(&declared).is_err());
}

#[test]
fn process_schema_accepts_defined_field_names() {
    let modifier = RequiresModifier::new(["present"]);
    let declared: HashSet<String> = ["present".to_string()].into_iter().collect();
    assert!(modifier.process_schema(&declared).is_ok());
}

#[test]
fn apply_to_schema_sets_overrides() {
    let modifier = RequiresModifier::new(["sibling"]);
    let mut overrides: HashMap<String, bool> = HashMap::new();
    let data = json!({}).as_object().unwrap().clone();
    modifier.apply_to_schema(&mut overrides, &data);
    assert_eq!(overrides.get("sibling"), Some(&true));
}

#[test]
fn apply_respects_data_conditions() {
    let modifier = RequiresModifier::new(["sibling"]).with_condition(Box::new(|data| {
        data.get("enable").and_then(|v| v.as_bool()).unwrap_or(false)
    }));
    let mut overrides: HashMap<String, bool> = HashMap::new();
    let data = json!({"enable": false}).as_object().unwrap().clone();
    modifier.apply(&mut overrides, &data);
    assert!(overrides.is_empty());

    let data = json!({"enable": true}).as_object().unwrap().clone();
    modifier.apply(&mut overrides, &data);
    assert_eq!(overrides.get("sibling"), Some(&true));
}
