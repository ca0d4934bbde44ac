// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while staging, pushing to, or invoking on a target.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{description} failed: {source}")]
    Spawn {
        description: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{description} timed out after {seconds}s")]
    Timeout { description: String, seconds: u64 },
    #[error("io error staging files: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("{0} driver is already registered")]
    AlreadyRegistered(String),
    #[error("unknown driver `{0}`")]
    Unknown(String),
    #[error("invalid driver configuration: {0}")]
    Configuration(#[from] hidori_schema::SchemaError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
