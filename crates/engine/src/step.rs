// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One task owned by a pipeline, resolved against the module registry at
//! construction time so an unknown module name fails fast, before any
//! network activity.

use hidori_core::{Task, TaskId};
use hidori_modules::ModuleRegistry;
use serde_json::{Map, Value};

use crate::error::PipelineError;

pub struct PipelineStep {
    pub name: String,
    pub task: Task,
}

impl PipelineStep {
    /// Builds one step, rejecting an unknown `module` up front so pipeline
    /// construction fails before any staging or network activity begins.
    pub fn new(
        name: impl Into<String>,
        task_id: TaskId,
        module: impl Into<String>,
        args: Map<String, Value>,
        registry: &ModuleRegistry,
    ) -> Result<Self, PipelineError> {
        let name = name.into();
        let module = module.into();
        if !registry.contains(&module) {
            return Err(PipelineError::UnknownModule(module));
        }

        Ok(Self {
            task: Task::new(task_id, name.clone(), module, args),
            name,
        })
    }
}

#[cfg(test)]
#[path = "step_tests.rs"]
mod tests;
