use super::*;
use std::sync::Arc;

#[test]
fn with_builtins_registers_hello_hostname_and_wait() {
    let registry = ModuleRegistry::with_builtins();
    assert!(registry.contains("hello"));
    assert!(registry.contains("hostname"));
    assert!(registry.contains("wait"));
}

#[test]
fn get_unknown_module_is_not_found() {
    let registry = ModuleRegistry::with_builtins();
    assert_eq!(registry.get("ghost").unwrap_err(), RegistryError::NotFound);
}

#[test]
fn builder_rejects_duplicate_names() {
    let result = ModuleRegistry::builder()
        .register(Arc::new(crate::hello::HelloModule::new()))
        .register(Arc::new(crate::hello::HelloModule::new()))
        .finish();
    assert!(matches!(result, Err(RegistryError::AlreadyRegistered(name)) if name == "hello"));
}

#[test]
fn names_lists_every_registered_module() {
    let registry = ModuleRegistry::with_builtins();
    let mut names: Vec<&str> = registry.names().collect();
    names.sort_unstable();
    assert_eq!(names, vec!["hello", "hostname", "wait"]);
}
