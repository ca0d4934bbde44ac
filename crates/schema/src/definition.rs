// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-field declaration: default value/factory plus attached modifiers.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::ConfigurationError;
use crate::modifier::SchemaModifier;

/// How a field's default is produced, if at all.
enum Default {
    None,
    Value(Value),
    Factory(Arc<dyn Fn() -> Value + Send + Sync>),
}

/// Everything about a field beyond its value shape: default, and the
/// modifiers that may adjust sibling fields once this one is seen.
pub struct Definition {
    default: Default,
    pub modifiers: Vec<Box<dyn SchemaModifier>>,
}

impl Definition {
    pub fn new() -> Self {
        Self {
            default: Default::None,
            modifiers: Vec::new(),
        }
    }

    pub fn with_default(mut self, value: Value) -> Result<Self, ConfigurationError> {
        if !matches!(self.default, Default::None) {
            return Err(ConfigurationError::MultipleDefaultMethods);
        }
        self.default = Default::Value(value);
        Ok(self)
    }

    pub fn with_default_factory(
        mut self,
        factory: impl Fn() -> Value + Send + Sync + 'static,
    ) -> Result<Self, ConfigurationError> {
        if !matches!(self.default, Default::None) {
            return Err(ConfigurationError::MultipleDefaultMethods);
        }
        self.default = Default::Factory(Arc::new(factory));
        Ok(self)
    }

    pub fn with_modifier(mut self, modifier: impl SchemaModifier + 'static) -> Self {
        self.modifiers.push(Box::new(modifier));
        self
    }

    /// Inserts this field's default into `data` if the field is absent and a
    /// default was declared. A no-op otherwise.
    pub fn apply_default(&self, field_name: &str, data: &mut Map<String, Value>) {
        if data.contains_key(field_name) {
            return;
        }
        match &self.default {
            Default::None => {}
            Default::Value(value) => {
                data.insert(field_name.to_string(), value.clone());
            }
            Default::Factory(factory) => {
                data.insert(field_name.to_string(), factory());
            }
        }
    }
}

impl std::default::Default for Definition {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "definition_tests.rs"]
mod tests;
