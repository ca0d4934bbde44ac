// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The reference module: takes no arguments, reports who it ran as.

use async_trait::async_trait;
use hidori_core::Messenger;
use hidori_schema::Schema;
use serde_json::{Map, Value};

use crate::module::{Module, Outcome};

pub struct HelloModule {
    schema: Schema,
}

impl HelloModule {
    pub fn new() -> Self {
        Self {
            schema: Schema::build().finish().expect("hello schema has no fields to misdeclare"),
        }
    }
}

impl Default for HelloModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for HelloModule {
    fn name(&self) -> &'static str {
        "hello"
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    async fn execute(&self, _args: &Map<String, Value>, messenger: &mut Messenger) -> Outcome {
        let info = uname();
        messenger.queue_success(format!(
            "Hello from {} {} {}",
            info.sysname, info.nodename, info.release
        ));
        Outcome::Unaffected
    }
}

struct Uname {
    sysname: String,
    nodename: String,
    release: String,
}

fn uname() -> Uname {
    Uname {
        sysname: std::env::consts::OS.to_string(),
        nodename: hostname_or_unknown(),
        release: kernel_release_or_unknown(),
    }
}

fn hostname_or_unknown() -> String {
    std::fs::read_to_string("/proc/sys/kernel/hostname")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}

fn kernel_release_or_unknown() -> String {
    std::fs::read_to_string("/proc/sys/kernel/osrelease")
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}

#[cfg(test)]
#[path = "hello_tests.rs"]
mod tests;
