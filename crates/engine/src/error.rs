// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Orchestrator-level failures: staging a target, driving a pipeline state
//! machine, or the module registry rejecting a task at construction time.

use thiserror::Error;

use hidori_core::PathError;
use hidori_transport::{DriverError, TransportError};

#[derive(Debug, Error)]
pub enum PipelineError {
    /// `PipelineStep` construction found a `data.module` the registry
    /// doesn't know.
    #[error("unknown module `{0}`")]
    UnknownModule(String),

    /// The document handed to `PipelineGroup::from_document` is structurally
    /// invalid: not an `on_fail` value the schema names, a task with no
    /// `module` key, and the like.
    #[error("invalid pipeline document: {0}")]
    InvalidDocument(String),

    /// A step method was called on a pipeline that hasn't gone through
    /// `prepare()` yet, or `finalize()` was called twice. A programmer
    /// error, never caused by input data.
    #[error("pipeline used out of order: {0}")]
    OutOfOrder(&'static str),

    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to serialize task: {0}")]
    Serialize(#[from] serde_json::Error),
}
