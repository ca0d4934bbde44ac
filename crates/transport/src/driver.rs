// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `Driver` trait: target identity plus the transport that reaches it.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use hidori_core::Message;
use serde_json::{Map, Value};

use crate::error::{DriverError, TransportError};
use crate::ssh::SSHDriver;
use crate::transport::Transport;

pub const DEFAULT_DRIVER: &str = "ssh";

/// One configured target: who to connect as, and how.
#[async_trait]
pub trait Driver: Send + Sync {
    fn name(&self) -> &'static str;
    fn user(&self) -> &str;
    fn target(&self) -> &str;

    /// Stages a local directory (executor, modules, task files) onto the
    /// target via this driver's transport.
    async fn push(&self, source: &Path, dest: &str) -> Result<Vec<Message>, TransportError>;

    /// Runs `path` with `args` on the target via this driver's transport.
    async fn invoke(&self, path: &str, args: &[String]) -> Result<Vec<Message>, TransportError>;
}

type DriverFactory = Box<dyn Fn(&mut Map<String, Value>) -> Result<Arc<dyn Driver>, DriverError> + Send + Sync>;

/// Name-indexed table of driver constructors, keyed by the `driver` field in
/// a target's configuration.
pub struct DriverRegistry {
    factories: HashMap<String, DriverFactory>,
}

impl DriverRegistry {
    pub fn builder() -> DriverRegistryBuilder {
        DriverRegistryBuilder::default()
    }

    /// The registry with `ssh` (the only driver this crate ships) built in.
    pub fn with_builtins() -> Self {
        DriverRegistry::builder()
            .register("ssh", |config| {
                SSHDriver::from_config(config).map(|d| Arc::new(d) as Arc<dyn Driver>)
            })
            .finish()
    }

    /// Pops the `driver` key out of `config` (defaulting to `ssh`, matching
    /// the original's `host_data.pop("driver", DEFAULT_DRIVER)`) and
    /// constructs the matching driver from what remains.
    pub fn create(&self, config: &mut Map<String, Value>) -> Result<Arc<dyn Driver>, DriverError> {
        let driver_name = config
            .remove("driver")
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_DRIVER.to_string());

        let factory = self
            .factories
            .get(&driver_name)
            .ok_or_else(|| DriverError::Unknown(driver_name.clone()))?;

        factory(config)
    }
}

#[derive(Default)]
pub struct DriverRegistryBuilder {
    factories: HashMap<String, DriverFactory>,
}

impl DriverRegistryBuilder {
    pub fn register(
        mut self,
        name: impl Into<String>,
        factory: impl Fn(&mut Map<String, Value>) -> Result<Arc<dyn Driver>, DriverError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.factories.insert(name.into(), Box::new(factory));
        self
    }

    pub fn finish(self) -> DriverRegistry {
        DriverRegistry {
            factories: self.factories,
        }
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
