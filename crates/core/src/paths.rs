// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cache-home resolution and the on-disk staging layout.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("cache home directory does not exist or path is invalid")]
    CacheHomeMissing,
}

/// Resolves `$XDG_CACHE_HOME` (falling back to `dirs::cache_dir()`, which
/// itself falls back to `$HOME/.cache` on Linux) the way the original
/// `get_user_cache_path` did, but via the `dirs` crate instead of hand-rolled
/// `$HOME` concatenation.
pub fn user_cache_path() -> Option<PathBuf> {
    dirs::cache_dir()
}

/// `<user-cache>/hidori`, the root every staged exchange lives under.
///
/// Mirrors the original's `get_cache_home`: requires the parent cache
/// directory to already exist.
pub fn cache_home() -> Result<PathBuf, PathError> {
    let base = user_cache_path().ok_or(PathError::CacheHomeMissing)?;
    if !base.exists() {
        return Err(PathError::CacheHomeMissing);
    }
    Ok(base.join("hidori"))
}

/// The local system temp directory, `/tmp` on Linux.
pub fn tmp_home() -> Result<PathBuf, PathError> {
    let tmp = PathBuf::from("/tmp");
    if tmp.exists() {
        Ok(tmp)
    } else {
        Err(PathError::CacheHomeMissing)
    }
}

/// Which top-level staging category an exchange belongs to: a pipeline step
/// run, or a one-shot `hidori` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagingKind {
    Pipelines,
    Calls,
}

impl StagingKind {
    fn as_str(self) -> &'static str {
        match self {
            StagingKind::Pipelines => "pipelines",
            StagingKind::Calls => "calls",
        }
    }
}

/// The local staging directory for one exchange with one target:
/// `<cache-home>/hidori/{pipelines,calls}/<target-id>/hidori-<exchange-id>/`.
pub fn staging_dir(kind: StagingKind, target_id: &str, exchange_id: &str) -> Result<PathBuf, PathError> {
    Ok(cache_home()?
        .join(kind.as_str())
        .join(target_id)
        .join(format!("hidori-{exchange_id}")))
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
