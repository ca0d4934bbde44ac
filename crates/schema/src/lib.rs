// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hidori-schema: a declarative field registry for validating module
//! arguments.
//!
//! A [`Schema`] is built once from a fixed set of named fields, each with a
//! [`FieldKind`] (text, one-of, dictionary, or nested sub-schema), an
//! optional default, and optional [`SchemaModifier`]s that can promote
//! sibling fields to required once the field they're attached to is present.
//! [`Schema::validate`] then checks one JSON object at a time against that
//! declaration.

pub mod definition;
pub mod error;
pub mod field;
pub mod modifier;
pub mod schema;

pub use definition::Definition;
pub use error::{ConfigurationError, FieldError, ModifierError, SchemaError, ValidationError};
pub use field::{dict_of, one_of, Field, FieldKind};
pub use modifier::{RequiresModifier, SchemaModifier};
pub use schema::{Schema, SchemaBuilder};
