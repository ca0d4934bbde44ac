use super::*;
use serde_json::json;

#[test]
fn create_pops_driver_key_and_defaults_to_ssh() {
    let registry = DriverRegistry::with_builtins();
    let mut config = json!({"target": "web-1", "user": "deploy"})
        .as_object()
        .unwrap()
        .clone();

    let driver = registry.create(&mut config).unwrap();
    assert_eq!(driver.name(), "ssh");
    assert_eq!(driver.user(), "deploy");
    assert_eq!(driver.target(), "web-1");
}

#[test]
fn create_rejects_unknown_driver_name() {
    let registry = DriverRegistry::with_builtins();
    let mut config = json!({"driver": "ghost"}).as_object().unwrap().clone();

    let err = registry.create(&mut config).unwrap_err();
    assert!(matches!(err, DriverError::Unknown(name) if name == "ghost"));
}

#[test]
fn create_rejects_invalid_ssh_configuration() {
    let registry = DriverRegistry::with_builtins();
    let mut config = json!({}).as_object().unwrap().clone();

    let err = registry.create(&mut config).unwrap_err();
    assert!(matches!(err, DriverError::Configuration(_)));
}
