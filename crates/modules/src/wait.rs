// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sleeps for a given duration. Useful for exercising a pipeline's
//! sequential-step ordering in tests.

use std::time::Duration;

use async_trait::async_trait;
use hidori_core::Messenger;
use hidori_schema::{FieldKind, Schema};
use serde_json::{Map, Value};

use crate::module::{Module, Outcome};

pub struct WaitModule {
    schema: Schema,
}

impl WaitModule {
    pub fn new() -> Self {
        Self {
            schema: Schema::build()
                .field("seconds", FieldKind::Text)
                .finish()
                .expect("wait schema is static and valid"),
        }
    }
}

impl Default for WaitModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for WaitModule {
    fn name(&self) -> &'static str {
        "wait"
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    async fn execute(&self, args: &Map<String, Value>, messenger: &mut Messenger) -> Outcome {
        let seconds: u64 = args
            .get("seconds")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);

        tokio::time::sleep(Duration::from_secs(seconds)).await;
        messenger.queue_success(format!("Successfuly waited for {seconds} seconds"));
        Outcome::Unaffected
    }
}

#[cfg(test)]
#[path = "wait_tests.rs"]
mod tests;
