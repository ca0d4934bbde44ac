use super::*;
use serde_json::Map;

#[test]
fn known_module_builds_a_step() {
    let registry = ModuleRegistry::with_builtins();
    let step = PipelineStep::new("greet", TaskId::new("t1"), "hello", Map::new(), &registry).unwrap();
    assert_eq!(step.name, "greet");
    assert_eq!(step.task.module, "hello");
}

#[test]
fn unknown_module_fails_construction() {
    let registry = ModuleRegistry::with_builtins();
    let err = PipelineStep::new("greet", TaskId::new("t1"), "no-such-module", Map::new(), &registry);
    assert!(matches!(err, Err(PipelineError::UnknownModule(_))));
}
