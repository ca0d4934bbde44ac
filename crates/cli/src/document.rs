// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Converts a pipeline TOML file into the orchestrator's JSON document
//! shape. A thin, uninteresting boundary — the orchestrator is the one that
//! actually validates structure; this module only carries values across.

use std::path::Path;

use serde_json::{Map, Value};

/// Reads and parses a pipeline file, producing the document
/// `hidori_engine::PipelineGroup::from_document` expects.
pub fn load_document(path: &Path) -> anyhow::Result<Map<String, Value>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read pipeline file '{}': {e}", path.display()))?;
    parse_document(&raw).map_err(|e| anyhow::anyhow!("failed to parse pipeline file '{}': {e}", path.display()))
}

fn parse_document(raw: &str) -> anyhow::Result<Map<String, Value>> {
    let parsed: toml::Value = toml::from_str(raw)?;
    match toml_to_json(parsed) {
        Value::Object(map) => Ok(map),
        _ => anyhow::bail!("a pipeline file must be a TOML table at its root"),
    }
}

/// Structural, value-by-value conversion. TOML and JSON agree on every shape
/// here except TOML's native datetime, which has no JSON equivalent and is
/// carried across as its RFC 3339 string form.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => {
            Value::Object(table.into_iter().map(|(k, v)| (k, toml_to_json(v))).collect())
        }
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
