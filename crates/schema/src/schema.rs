// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The schema itself: a builder that declares fields, and a validator that
//! checks a raw JSON object against them.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde_json::{Map, Value};

use crate::definition::Definition;
use crate::error::{ConfigurationError, FieldError, ModifierErrors, SchemaError};
use crate::field::{Field, FieldKind};

/// Per-field `required` overrides collected while validating one document.
///
/// Modifiers mutate this instead of the schema's own field table, so
/// validating the same [`Schema`] concurrently from multiple tasks never
/// requires interior mutability or cloning the field declarations.
pub type FieldMap = HashMap<String, bool>;

/// A declared, validated-at-build-time set of fields.
///
/// Constructed via [`Schema::build`]; cannot be mutated after
/// [`SchemaBuilder::finish`] succeeds.
pub struct Schema {
    order: Vec<String>,
    fields: HashMap<String, Field>,
    definitions: HashMap<String, Definition>,
}

impl Schema {
    pub fn build() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Validates `data` against every declared field: applies each field's
    /// modifiers (gated on the field itself being present), then its
    /// default, then checks the (possibly now-required) value.
    ///
    /// Returns the validated data with defaults applied and absent optional
    /// fields dropped, or every field's error collected together.
    pub fn validate(&self, data: &Map<String, Value>) -> Result<Map<String, Value>, SchemaError> {
        let mut data = data.clone();
        let mut overrides: FieldMap = HashMap::new();
        let mut errors: BTreeMap<String, FieldError> = BTreeMap::new();
        let mut validated = Map::new();

        for name in &self.order {
            if let Some(definition) = self.definitions.get(name) {
                if data.contains_key(name) {
                    for modifier in &definition.modifiers {
                        modifier.apply(&mut overrides, &data);
                    }
                }
                definition.apply_default(name, &mut data);
            }

            let field = self.fields.get(name).expect("declared field must exist");
            let required = overrides.get(name).copied().unwrap_or(field.required);

            match field.validate_with(required, data.get(name)) {
                Ok(Some(value)) => {
                    validated.insert(name.clone(), value);
                }
                Ok(None) => {}
                Err(e) => {
                    errors.insert(name.clone(), FieldError::Leaf(e.0));
                }
            }
        }

        if errors.is_empty() {
            Ok(validated)
        } else {
            Err(SchemaError::new(errors))
        }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

/// Declares fields for a [`Schema`] and validates the declarations
/// themselves (reserved names, duplicate fields, modifier preconditions).
pub struct SchemaBuilder {
    order: Vec<String>,
    fields: HashMap<String, Field>,
    definitions: HashMap<String, Definition>,
    duplicates: Vec<String>,
}

impl SchemaBuilder {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            fields: HashMap::new(),
            definitions: HashMap::new(),
            duplicates: Vec::new(),
        }
    }

    /// Declares a required-by-default field of the given kind.
    pub fn field(self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.field_with(name, kind, true, Definition::new())
    }

    /// Declares an optional field of the given kind.
    pub fn optional_field(self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.field_with(name, kind, false, Definition::new())
    }

    /// Declares a field with a full [`Definition`] (defaults, modifiers).
    pub fn field_with(
        mut self,
        name: impl Into<String>,
        kind: FieldKind,
        required: bool,
        definition: Definition,
    ) -> Self {
        let name = name.into();
        if self.fields.contains_key(&name) {
            self.duplicates.push(name.clone());
        } else {
            self.order.push(name.clone());
        }
        self.fields.insert(name.clone(), Field::new(kind, required));
        self.definitions.insert(name, definition);
        self
    }

    /// Validates every modifier's preconditions against the full set of
    /// declared names and produces the finished [`Schema`].
    pub fn finish(self) -> Result<Schema, ConfigurationError> {
        if let Some(name) = self.duplicates.into_iter().next() {
            return Err(ConfigurationError::DuplicateField(name));
        }

        for name in &self.order {
            if name.starts_with("_internals") {
                return Err(ConfigurationError::FieldNameNotAllowed(name.clone()));
            }
        }

        let declared: HashSet<String> = self.order.iter().cloned().collect();
        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for name in &self.order {
            if let Some(definition) = self.definitions.get(name) {
                for modifier in &definition.modifiers {
                    if let Err(e) = modifier.process_schema(&declared) {
                        errors.entry(name.clone()).or_default().push(e.0);
                    }
                }
            }
        }

        if !errors.is_empty() {
            return Err(ConfigurationError::Modifier(ModifierErrors(errors)));
        }

        Ok(Schema {
            order: self.order,
            fields: self.fields,
            definitions: self.definitions,
        })
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
