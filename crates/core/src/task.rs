// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The unit of work shipped to a target: a module name plus its arguments.

use serde::de::Error as _;
use serde_json::{Map, Value};

use crate::id::TaskId;

/// One module invocation: which module to run, and the raw argument map it
/// will be asked to validate against its own schema.
///
/// `id` is the opaque identifier used only for the `task-<id>.json` filename
/// and as the executor's CLI argument; `name` is the declared task name
/// (the pipeline document's `[tasks.<name>]` key, or `"Call"` for a one-shot
/// call) and is what ends up on every message this task produces.
///
/// Serializes to the wire shape the executor expects on the remote side:
/// `{"name": "<task name>", "data": {"module": "<module>", ...args}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub module: String,
    pub args: Map<String, Value>,
}

impl Task {
    pub fn new(
        id: impl Into<TaskId>,
        name: impl Into<String>,
        module: impl Into<String>,
        args: Map<String, Value>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            module: module.into(),
            args,
        }
    }

    /// Serializes this task to the JSON document the executor reads from its
    /// task file argument.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut data = self.args.clone();
        data.insert("module".to_string(), Value::String(self.module.clone()));

        let mut wire = Map::new();
        wire.insert("name".to_string(), Value::String(self.name.clone()));
        wire.insert("data".to_string(), Value::Object(data));

        serde_json::to_string(&Value::Object(wire))
    }

    /// Parses a task back out of the JSON document the executor is handed.
    ///
    /// The wire document carries no id of its own — only the declared
    /// `name` — so the caller supplies `id` from whatever already knows it
    /// (the `task-<id>.json` filename, in the executor's case).
    pub fn from_json(id: impl Into<TaskId>, raw: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(id, value)
    }

    pub fn from_value(id: impl Into<TaskId>, value: Value) -> serde_json::Result<Self> {
        let mut wire = match value {
            Value::Object(map) => map,
            _ => {
                return Err(serde_json::Error::custom("expected a JSON object"));
            }
        };

        let name = match wire.remove("name") {
            Some(Value::String(s)) => s,
            _ => return Err(serde_json::Error::custom("missing `name` field")),
        };

        let mut data = match wire.remove("data") {
            Some(Value::Object(map)) => map,
            _ => return Err(serde_json::Error::custom("missing `data` field")),
        };

        let module = match data.remove("module") {
            Some(Value::String(s)) => s,
            _ => return Err(serde_json::Error::custom("missing `data.module` field")),
        };

        Ok(Self {
            id: id.into(),
            name,
            module,
            args: data,
        })
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
