// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The built-in field kinds: text, one-of, dictionary, and nested sub-schema.

use serde_json::Value;

use crate::error::ValidationError;
use crate::schema::Schema;

/// The shape a field's value must take.
///
/// Unlike the original's annotation-reflection registry, kinds are named
/// explicitly at declaration time via [`crate::builder::SchemaBuilder::field`].
pub enum FieldKind {
    Text,
    OneOf(Vec<Value>),
    Dictionary(Box<FieldKind>, Box<FieldKind>),
    SubSchema(Box<Schema>),
}

/// A field kind plus whether a value must be present.
///
/// `required` starts as declared and can be flipped on by a
/// [`crate::modifier::SchemaModifier`] such as
/// [`crate::modifier::RequiresModifier`] once the rest of the input is known.
pub struct Field {
    pub kind: FieldKind,
    pub required: bool,
}

impl Field {
    pub fn new(kind: FieldKind, required: bool) -> Self {
        Self { kind, required }
    }

    /// Validates one value against this field, applying the required/absent
    /// rule common to every kind before dispatching to kind-specific checks.
    ///
    /// Returns `Ok(None)` for an absent, non-required field — the caller
    /// should drop the field from the validated output rather than insert a
    /// null placeholder.
    pub fn validate(&self, value: Option<&Value>) -> Result<Option<Value>, ValidationError> {
        self.validate_with(self.required, value)
    }

    /// Same as [`Field::validate`], but with the required-ness supplied by
    /// the caller — used when a modifier has overridden it for this
    /// validation run.
    pub fn validate_with(
        &self,
        required: bool,
        value: Option<&Value>,
    ) -> Result<Option<Value>, ValidationError> {
        let value = match value {
            Some(value) => value,
            None if required => {
                return Err(ValidationError::new("value for required field not provided"))
            }
            None => return Ok(None),
        };

        validate_against_kind(&self.kind, value).map(Some)
    }
}

/// Checks one present value against a field kind, recursing into
/// dictionaries and sub-schemas. Free function rather than a `Field` method
/// so recursive calls don't need a throwaway required-ness.
fn validate_against_kind(kind: &FieldKind, value: &Value) -> Result<Value, ValidationError> {
    match kind {
        FieldKind::Text => match value {
            Value::String(_) => Ok(value.clone()),
            other => Err(ValidationError::new(format!(
                "value `{other}` not allowed; is not str"
            ))),
        },
        FieldKind::OneOf(allowed) => {
            if allowed.contains(value) {
                Ok(value.clone())
            } else {
                Err(ValidationError::new(format!(
                    "value `{value}` not allowed; allowed values are {allowed:?}"
                )))
            }
        }
        FieldKind::Dictionary(key_kind, val_kind) => {
            let map = value.as_object().ok_or_else(|| {
                ValidationError::new(format!("value `{value}` not allowed; is not dict"))
            })?;
            for (key, val) in map {
                validate_against_kind(key_kind, &Value::String(key.clone()))?;
                validate_against_kind(val_kind, val)?;
            }
            Ok(value.clone())
        }
        FieldKind::SubSchema(schema) => {
            let map = value.as_object().ok_or_else(|| {
                ValidationError::new(format!("value `{value}` not allowed; is not dict"))
            })?;
            let validated = schema
                .validate(map)
                .map_err(|e| ValidationError::new(e.to_string()))?;
            Ok(Value::Object(validated))
        }
    }
}

/// Convenience constructor used by dictionary-field declarations.
pub fn dict_of(key: FieldKind, value: FieldKind) -> FieldKind {
    FieldKind::Dictionary(Box::new(key), Box::new(value))
}

/// Flattens a `Map` into owned pairs for a one-of field's allowed set.
pub fn one_of(values: impl IntoIterator<Item = Value>) -> FieldKind {
    FieldKind::OneOf(values.into_iter().collect())
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
