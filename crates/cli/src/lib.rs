// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Shared plumbing for the `hidori` and `hidori-pipeline` binaries: parsing
//! a one-shot call destination, converting a pipeline TOML file into the
//! orchestrator's document shape, locating the executor binary to stage,
//! and a uniform exit-code/error layer modeled on the `oj` binary.

pub mod destination;
pub mod document;
pub mod exit_error;

use std::path::PathBuf;

pub use destination::Destination;
pub use exit_error::ExitError;

/// Initializes the process's tracing subscriber, honoring `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

/// Locates the `hidori-executor` binary to stage onto a target.
///
/// Checked in order: an `HIDORI_EXECUTOR` environment override, then a
/// sibling of this binary's own executable path (the normal case — both
/// binaries land in the same `target/{debug,release}` directory as a build
/// produces them).
pub fn find_executor_binary() -> anyhow::Result<PathBuf> {
    if let Ok(path) = std::env::var("HIDORI_EXECUTOR") {
        return Ok(PathBuf::from(path));
    }

    let current_exe = std::env::current_exe().ok();
    if let Some(dir) = current_exe.as_deref().and_then(|p| p.parent()) {
        let sibling = dir.join("hidori-executor");
        if sibling.exists() {
            return Ok(sibling);
        }
    }

    anyhow::bail!(
        "could not locate the hidori-executor binary; set HIDORI_EXECUTOR or build it alongside this binary"
    )
}

/// Formats an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains every source error's text, the
/// "Caused by" chain is redundant noise (common with thiserror variants that
/// use `#[error("...{0}")]` together with `#[from]`) and is skipped.
pub fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err.chain().skip(1).all(|cause| top.contains(&cause.to_string()));
    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {i}: {cause}"));
    }
    buf
}

/// The exit code a `main` should use for a finished `anyhow::Result`: the
/// code carried by an [`ExitError`] if one is in the chain, else 0 for `Ok`
/// or 1 for any other error.
pub fn exit_code(result: &anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => e.downcast_ref::<ExitError>().map_or(1, |e| e.code),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
