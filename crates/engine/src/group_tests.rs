use super::*;
use hidori_core::{paths, SequentialIdGen};
use serde_json::json;
use std::io::Write;

fn cleanup_all(target: &str) {
    if let Ok(base) = paths::cache_home() {
        let _ = std::fs::remove_dir_all(base.join("pipelines").join(target));
    }
}

/// Stands in for a real `hidori-executor` build artifact — staging only
/// needs a file to copy, never runs it in these tests.
fn fake_executor_binary() -> tempfile::TempPath {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"#!/bin/sh\nexit 0\n").unwrap();
    file.into_temp_path()
}

fn document() -> Map<String, Value> {
    json!({
        "destinations": {
            "web-1": {"driver": "ssh", "target": "web-1.example", "user": "deploy"},
            "web-2": {"driver": "ssh", "target": "web-2.example", "user": "deploy"},
        },
        "tasks": {
            "greet": {"module": "hello"},
        },
    })
    .as_object()
    .unwrap()
    .clone()
}

#[test]
fn on_fail_defaults_to_abort_failed() {
    assert_eq!(OnFail::default(), OnFail::AbortFailed);
}

#[test]
fn on_fail_rejects_unknown_values() {
    assert!(OnFail::parse("whatever").is_err());
    assert_eq!(OnFail::parse("continue").unwrap(), OnFail::Continue);
}

#[test]
fn failure_filter_abort_all_empties_on_any_failure() {
    // We only test the filter's pure decision logic here — `Pipeline`
    // itself requires a live exchange to construct, which these table
    // cases don't need.
    assert!(apply_failure_filter(OnFail::AbortAll, false, vec![]).is_empty());
}

#[test]
fn from_document_builds_one_pipeline_per_destination() {
    if paths::user_cache_path().is_none() {
        return;
    }
    cleanup_all("web-1");
    cleanup_all("web-2");

    let driver_registry = DriverRegistry::with_builtins();
    let module_registry = ModuleRegistry::with_builtins();
    let doc = document();
    let executor = fake_executor_binary();

    let group = PipelineGroup::from_document_with_id_gen(
        &doc,
        &driver_registry,
        &module_registry,
        &SequentialIdGen::new("test"),
        &executor,
    )
    .unwrap();

    assert_eq!(group.pipelines.len(), 2);
    for pipeline in &group.pipelines {
        assert!(!pipeline.has_completed() || pipeline.target.is_empty());
    }

    cleanup_all("web-1");
    cleanup_all("web-2");
}

#[test]
fn from_document_rejects_a_task_missing_module() {
    let doc = json!({
        "destinations": {"web-1": {"driver": "ssh", "target": "web-1.example", "user": "deploy"}},
        "tasks": {"broken": {}},
    })
    .as_object()
    .unwrap()
    .clone();

    let driver_registry = DriverRegistry::with_builtins();
    let module_registry = ModuleRegistry::with_builtins();

    let result = PipelineGroup::from_document_with_id_gen(
        &doc,
        &driver_registry,
        &module_registry,
        &SequentialIdGen::new("test"),
        std::path::Path::new("/nonexistent-executor"),
    );
    assert!(matches!(result, Err(PipelineError::InvalidDocument(_))));
}

fn fake_pipeline(
    target: &str,
    id_suffix: &str,
    driver: hidori_transport::fake::FakeDriver,
) -> (Pipeline, tempfile::TempPath) {
    cleanup_all(target);
    let registry = ModuleRegistry::with_builtins();
    let steps = vec![PipelineStep::new(
        "greet",
        TaskId::new(format!("t-{id_suffix}")),
        "hello",
        Map::new(),
        &registry,
    )
    .unwrap()];
    let suffix = id_suffix.to_string();
    let id_factory: Arc<dyn Fn() -> String + Send + Sync> = Arc::new(move || suffix.clone());
    let executor = fake_executor_binary();
    let pipeline = Pipeline::new(
        target,
        Arc::new(driver) as Arc<dyn hidori_transport::Driver>,
        steps,
        id_factory,
        executor.to_path_buf(),
    );
    (pipeline, executor)
}

#[tokio::test]
async fn run_drives_every_pipeline_to_completion() {
    if paths::user_cache_path().is_none() {
        return;
    }
    let (p1, _e1) = fake_pipeline("group-web-1", "g1", hidori_transport::fake::FakeDriver::new("deploy", "group-web-1"));
    let (p2, _e2) = fake_pipeline("group-web-2", "g2", hidori_transport::fake::FakeDriver::new("deploy", "group-web-2"));

    let group = PipelineGroup {
        on_fail: OnFail::AbortFailed,
        pipelines: vec![p1, p2],
    };

    let (printer, survivors) = group.run().await;

    assert_eq!(survivors.len(), 2);
    assert!(survivors.iter().all(Pipeline::has_completed));
    assert!(!printer.has_error());

    cleanup_all("group-web-1");
    cleanup_all("group-web-2");
}

#[tokio::test]
async fn run_with_abort_failed_drops_only_the_failed_pipeline() {
    if paths::user_cache_path().is_none() {
        return;
    }
    let ok_driver = hidori_transport::fake::FakeDriver::new("deploy", "group-ok");
    let bad_driver = hidori_transport::fake::FakeDriver::new("deploy", "group-bad");
    bad_driver.fail_next_call();

    let (p_ok, _e_ok) = fake_pipeline("group-ok", "ok", ok_driver);
    let (p_bad, _e_bad) = fake_pipeline("group-bad", "bad", bad_driver);

    let group = PipelineGroup {
        on_fail: OnFail::AbortFailed,
        pipelines: vec![p_ok, p_bad],
    };

    let (_printer, survivors) = group.run().await;

    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].target, "group-ok");

    cleanup_all("group-ok");
    cleanup_all("group-bad");
}
