// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parses the `hidori` one-shot call binary's `<destination>` argument into
//! the config map `hidori_transport::DriverRegistry::create` expects.

use serde_json::{Map, Value};

/// A `user@target[:port]` destination, resolved to the ssh driver's config
/// shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub user: String,
    pub target: String,
    pub port: Option<String>,
}

impl Destination {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let (user, rest) = raw
            .split_once('@')
            .ok_or_else(|| anyhow::anyhow!("destination `{raw}` must be `user@target[:port]`"))?;
        let (target, port) = match rest.split_once(':') {
            Some((target, port)) => (target, Some(port.to_string())),
            None => (rest, None),
        };

        if user.is_empty() || target.is_empty() {
            anyhow::bail!("destination `{raw}` must be `user@target[:port]`");
        }

        Ok(Self {
            user: user.to_string(),
            target: target.to_string(),
            port,
        })
    }

    /// A filesystem-safe id for this destination, used as the staging
    /// directory's target segment.
    pub fn target_id(&self) -> &str {
        &self.target
    }

    pub fn into_config(self) -> Map<String, Value> {
        let mut config = Map::new();
        config.insert("user".to_string(), Value::String(self.user));
        config.insert("target".to_string(), Value::String(self.target));
        if let Some(port) = self.port {
            config.insert("port".to_string(), Value::String(port));
        }
        config
    }
}

#[cfg(test)]
#[path = "destination_tests.rs"]
mod tests;
