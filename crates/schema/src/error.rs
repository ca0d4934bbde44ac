// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy for schema declaration and data validation.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Raised while validating a single field's value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// One field's worth of validation failure: either a message, or — for
/// sub-schema fields — a nested map of the same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Leaf(String),
    Nested(BTreeMap<String, FieldError>),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Leaf(message) => write!(f, "{message}"),
            FieldError::Nested(map) => write!(f, "{map:?}"),
        }
    }
}

/// Validation failed for one or more fields; keyed by field name, ordered for
/// deterministic display and testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    pub errors: BTreeMap<String, FieldError>,
}

impl std::error::Error for SchemaError {}

impl SchemaError {
    pub fn new(errors: BTreeMap<String, FieldError>) -> Self {
        Self { errors }
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.into(), FieldError::Leaf(message.into()));
        Self { errors }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.errors)
    }
}

/// Raised when a [`SchemaModifier`](crate::modifier::SchemaModifier) rejects
/// the field declarations it was attached to, at schema build time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct ModifierError(pub String);

impl ModifierError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Raised by `SchemaBuilder::finish` when the declaration itself is invalid,
/// independent of any particular input data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("provide either default value or default factory, not both")]
    MultipleDefaultMethods,
    #[error("field `{0}` declared more than once")]
    DuplicateField(String),
    #[error("modifier validation failed: {0}")]
    Modifier(#[from] ModifierErrors),
    #[error("`_internals` prefix is reserved for internal use: `{0}`")]
    FieldNameNotAllowed(String),
}

/// Aggregated per-field modifier failures collected at declaration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierErrors(pub BTreeMap<String, Vec<String>>);

impl std::error::Error for ModifierErrors {}

impl fmt::Display for ModifierErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
