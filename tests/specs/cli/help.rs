//! CLI help output specs.

use crate::prelude::*;

#[test]
fn hidori_help_shows_usage() {
    hidori().args(&["--help"]).passes().stdout_has("Usage:");
}

#[test]
fn hidori_missing_args_shows_usage_on_stderr() {
    hidori().fails().stderr_has("Usage:");
}

#[test]
fn hidori_pipeline_help_shows_usage() {
    hidori_pipeline().args(&["--help"]).passes().stdout_has("Usage:");
}

#[test]
fn hidori_pipeline_run_help_shows_usage() {
    hidori_pipeline().args(&["run", "--help"]).passes().stdout_has("Usage:");
}
