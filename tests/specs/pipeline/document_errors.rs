//! Pipeline document validation specs: errors that must surface before any
//! destination is actually reached.

use crate::prelude::*;

#[test]
fn run_rejects_a_missing_file() {
    hidori_pipeline()
        .args(&["run", "/no-such-pipeline.toml"])
        .fails()
        .stderr_has("failed to read pipeline file");
}

#[test]
fn run_rejects_a_task_with_an_unknown_module() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pipeline.toml");
    std::fs::write(
        &path,
        r#"
        [destinations.web-1]
        driver = "ssh"
        target = "web-1.example"
        user = "deploy"

        [tasks.greet]
        module = "not-a-real-module"
        "#,
    )
    .unwrap();

    hidori_pipeline()
        .args(&["run", path.to_str().unwrap()])
        .fails()
        .stderr_has("invalid pipeline document");
}

#[test]
fn run_rejects_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pipeline.toml");
    std::fs::write(&path, "this is not [ valid").unwrap();

    hidori_pipeline()
        .args(&["run", path.to_str().unwrap()])
        .fails()
        .stderr_has("failed to parse pipeline file");
}
