use super::*;
use hidori_core::{paths, TaskId};
use hidori_modules::ModuleRegistry;
use hidori_transport::fake::FakeDriver;
use serde_json::Map;
use std::io::Write;

fn cleanup_all(target: &str) {
    if let Ok(base) = paths::cache_home() {
        let _ = std::fs::remove_dir_all(base.join("pipelines").join(target));
    }
}

/// Stands in for a real `hidori-executor` build artifact — `Exchange::stage`
/// only needs a file to copy, never runs it in these tests.
fn fake_executor_binary() -> tempfile::TempPath {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"#!/bin/sh\nexit 0\n").unwrap();
    file.into_temp_path()
}

fn one_step_pipeline(target: &str, id_suffix: &str, handle: FakeDriver) -> (Pipeline, tempfile::TempPath) {
    cleanup_all(target);
    let registry = ModuleRegistry::with_builtins();
    let steps = vec![PipelineStep::new("greet", TaskId::new("t1"), "hello", Map::new(), &registry).unwrap()];
    let suffix = id_suffix.to_string();
    let id_factory: Arc<dyn Fn() -> String + Send + Sync> = Arc::new(move || suffix.clone());
    let executor = fake_executor_binary();
    let pipeline = Pipeline::new(
        target,
        Arc::new(handle) as Arc<dyn Driver>,
        steps,
        id_factory,
        executor.to_path_buf(),
    );
    (pipeline, executor)
}

#[tokio::test]
async fn methods_before_prepare_are_out_of_order() {
    if paths::user_cache_path().is_none() {
        return;
    }
    let (mut pipeline, _executor) = one_step_pipeline("web-prep", "prep-1", FakeDriver::new("deploy", "web-prep"));
    let printer = Printer::new();
    let result = pipeline.invoke_step(&printer).await;
    assert!(matches!(result, Err(PipelineError::OutOfOrder(_))));
    cleanup_all("web-prep");
}

#[tokio::test]
async fn full_lifecycle_reaches_completed_on_success() {
    if paths::user_cache_path().is_none() {
        return;
    }
    let driver = FakeDriver::new("deploy", "web-life");
    let (mut pipeline, _executor) = one_step_pipeline("web-life", "life-1", driver);

    let printer = Printer::new();
    pipeline.prepare().unwrap();
    assert_eq!(pipeline.state(), PipelineState::Prepared);

    pipeline.finalize(&printer).await.unwrap();
    assert_eq!(pipeline.state(), PipelineState::Finalized);
    assert!(!pipeline.has_failed());

    assert!(!pipeline.has_completed());
    pipeline.invoke_step(&printer).await.unwrap();
    assert!(pipeline.has_completed());
    assert_eq!(pipeline.state(), PipelineState::Completed);
    assert!(!printer.has_error());

    cleanup_all("web-life");
}

#[tokio::test]
async fn a_transport_failure_during_finalize_propagates() {
    if paths::user_cache_path().is_none() {
        return;
    }
    let driver = FakeDriver::new("deploy", "web-fail");
    driver.fail_next_call();
    let (mut pipeline, _executor) = one_step_pipeline("web-fail", "fail-1", driver);

    let printer = Printer::new();
    pipeline.prepare().unwrap();
    let result = pipeline.finalize(&printer).await;
    assert!(result.is_err());

    cleanup_all("web-fail");
}
