// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The process-wide table of known modules, keyed by name.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::module::Module;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{0} module is already registered")]
    AlreadyRegistered(String),
    #[error("specified module does not exist")]
    NotFound,
}

/// Name-indexed table of registered [`Module`]s.
///
/// Built once via [`ModuleRegistry::builder`] at process start, then shared
/// read-only across every task dispatched for the process's lifetime.
#[derive(Clone, Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, Arc<dyn Module>>,
}

impl ModuleRegistry {
    pub fn builder() -> ModuleRegistryBuilder {
        ModuleRegistryBuilder::default()
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn Module>, RegistryError> {
        self.modules.get(name).cloned().ok_or(RegistryError::NotFound)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }

    /// The registry with every module this crate ships built in.
    pub fn with_builtins() -> Self {
        ModuleRegistryBuilder::default()
            .register(Arc::new(crate::hello::HelloModule::new()))
            .register(Arc::new(crate::hostname::HostnameModule::new()))
            .register(Arc::new(crate::wait::WaitModule::new()))
            .finish()
            .expect("built-in module names never collide")
    }
}

#[derive(Default)]
pub struct ModuleRegistryBuilder {
    modules: HashMap<String, Arc<dyn Module>>,
    duplicate: Option<String>,
}

impl ModuleRegistryBuilder {
    pub fn register(mut self, module: Arc<dyn Module>) -> Self {
        let name = module.name().to_string();
        if self.modules.insert(name.clone(), module).is_some() {
            self.duplicate = Some(name);
        }
        self
    }

    pub fn finish(self) -> Result<ModuleRegistry, RegistryError> {
        if let Some(name) = self.duplicate {
            return Err(RegistryError::AlreadyRegistered(name));
        }
        Ok(ModuleRegistry {
            modules: self.modules,
        })
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
