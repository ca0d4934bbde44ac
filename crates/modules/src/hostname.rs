// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reports (but never performs) a hostname change.
//!
//! The original module talks to `org.freedesktop.hostname1` over dbus with
//! escalated privileges. This reference implementation only reads the
//! current hostname and reports what it would change, the same way `hello`
//! only ever reads system state — actually calling `sethostname` is out of
//! reach for a module meant to run safely in tests.

use async_trait::async_trait;
use hidori_core::Messenger;
use hidori_schema::{FieldKind, Schema};
use serde_json::{Map, Value};

use crate::module::{Module, Outcome};

pub struct HostnameModule {
    schema: Schema,
}

impl HostnameModule {
    pub fn new() -> Self {
        Self {
            schema: Schema::build()
                .field("name", FieldKind::Text)
                .finish()
                .expect("hostname schema is static and valid"),
        }
    }
}

impl Default for HostnameModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for HostnameModule {
    fn name(&self) -> &'static str {
        "hostname"
    }

    fn schema(&self) -> &Schema {
        &self.schema
    }

    async fn execute(&self, args: &Map<String, Value>, messenger: &mut Messenger) -> Outcome {
        let new_hostname = args
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let current = current_hostname();

        if current == new_hostname {
            messenger.queue_success(format!("hostname already set to {new_hostname}"));
            Outcome::Unaffected
        } else {
            messenger.queue_affected(format!("hostname would change to {new_hostname}"));
            Outcome::Affected
        }
    }
}

fn current_hostname() -> String {
    std::fs::read_to_string("/proc/sys/kernel/hostname")
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "hostname_tests.rs"]
mod tests;
