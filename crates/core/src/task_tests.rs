use super::*;

#[test]
fn round_trips_through_json() {
    let mut args = Map::new();
    args.insert("name".into(), Value::String("world".into()));
    let task = Task::new(TaskId::new("abc123"), "greet", "hello", args);

    let raw = task.to_json().unwrap();
    let parsed = Task::from_json(TaskId::new("abc123"), &raw).unwrap();

    assert_eq!(parsed, task);
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(Task::from_json(TaskId::new("abc123"), "not json").is_err());
}

#[test]
fn from_json_rejects_missing_fields() {
    assert!(Task::from_json(TaskId::new("abc123"), r#"{"id":"abc"}"#).is_err());
}
