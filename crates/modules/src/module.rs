// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `Module` trait and the process-wide registry of everything
//! implementing it.

use async_trait::async_trait;
use hidori_core::Messenger;
use hidori_schema::Schema;
use serde_json::{Map, Value};

/// Whether a task's execution left the target in a different state.
///
/// Mirrors the original modules' `{"state": ...}` return convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Affected,
    Unaffected,
}

/// One kind of work a task can request, with its own argument schema.
///
/// Implementations are registered once, by name, in a [`ModuleRegistry`].
#[async_trait]
pub trait Module: Send + Sync {
    /// The name a task's `module` field must match to dispatch here.
    fn name(&self) -> &'static str;

    /// The field declarations this module's arguments must satisfy.
    fn schema(&self) -> &Schema;

    /// Checks `task_data` against [`Module::schema`], queuing one `error`
    /// message per failing field as `"<field>: <message>"`. Returns the
    /// validated (defaults-applied) map on success, so the caller can feed
    /// it straight to [`Module::execute`]; `None` means validation queued at
    /// least one error and execution should not proceed.
    async fn validate(
        &self,
        task_data: &Map<String, Value>,
        messenger: &mut Messenger,
    ) -> Option<Map<String, Value>> {
        match self.schema().validate(task_data) {
            Ok(validated) => Some(validated),
            Err(schema_error) => {
                for (field, error) in &schema_error.errors {
                    messenger.queue_error(format!("{field}: {error}"));
                }
                None
            }
        }
    }

    /// Runs with already-validated arguments, queuing outcome messages as it
    /// goes. A module should never panic on bad input — a validated task's
    /// arguments are guaranteed to match `schema()`.
    async fn execute(&self, args: &Map<String, Value>, messenger: &mut Messenger) -> Outcome;
}

#[cfg(test)]
#[path = "module_tests.rs"]
mod tests;
