// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Modifiers adjust a schema's fields based on the rest of the declaration
//! (at build time) or the rest of the input data (at validation time).

use std::collections::{BTreeSet, HashSet};

use serde_json::Map;
use serde_json::Value;

use crate::error::ModifierError;

/// A predicate over the raw input data, used to gate a modifier's effect.
pub type DataCondition = Box<dyn Fn(&Map<String, Value>) -> bool + Send + Sync>;

/// A rule attached to one field's [`crate::definition::Definition`] that can
/// reach into the rest of the schema.
pub trait SchemaModifier: Send + Sync {
    /// Checked once, when the schema is built: the modifier gets every
    /// declared field name and must reject anything it can't act on.
    fn process_schema(&self, field_names: &HashSet<String>) -> Result<(), ModifierError>;

    /// Checked once per validation run, only when the data conditions (if
    /// any) all pass and the modifier's own field is present in the data.
    fn apply(&self, overrides: &mut crate::schema::FieldMap, data: &Map<String, Value>) {
        if self.data_conditions().iter().all(|cond| cond(data)) {
            self.apply_to_schema(overrides, data);
        }
    }

    fn data_conditions(&self) -> &[DataCondition] {
        &[]
    }

    fn apply_to_schema(&self, overrides: &mut crate::schema::FieldMap, data: &Map<String, Value>);
}

/// Marks a set of sibling fields as required, but only once this modifier's
/// own field is present in the input.
///
/// Declaration-time: every named field must actually exist in the schema.
/// Validation-time: flips `required = true` on each named field before it is
/// validated.
pub struct RequiresModifier {
    required_field_names: BTreeSet<String>,
    data_conditions: Vec<DataCondition>,
}

impl RequiresModifier {
    pub fn new(field_names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            required_field_names: field_names.into_iter().map(Into::into).collect(),
            data_conditions: Vec::new(),
        }
    }

    pub fn with_condition(mut self, condition: DataCondition) -> Self {
        self.data_conditions.push(condition);
        self
    }
}

impl SchemaModifier for RequiresModifier {
    fn process_schema(&self, field_names: &HashSet<String>) -> Result<(), ModifierError> {
        let undefined: Vec<&String> = self
            .required_field_names
            .iter()
            .filter(|name| !field_names.contains(*name))
            .collect();

        if undefined.is_empty() {
            Ok(())
        } else {
            let names = undefined
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            Err(ModifierError::new(format!(
                "fields named ({names}) might be required but are undefined"
            )))
        }
    }

    fn data_conditions(&self) -> &[DataCondition] {
        &self.data_conditions
    }

    fn apply_to_schema(&self, overrides: &mut crate::schema::FieldMap, _data: &Map<String, Value>) {
        for name in &self.required_field_names {
            overrides.insert(name.clone(), true);
        }
    }
}

#[cfg(test)]
#[path = "modifier_tests.rs"]
mod tests;
