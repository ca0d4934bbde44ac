// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runs one [`Pipeline`] per destination named in a document, fanning each
//! round out across targets and joining at a barrier before the next.

use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::task::JoinSet;

use hidori_core::{IdGen, Message, MessageType, TaskId, UuidIdGen};
use hidori_modules::ModuleRegistry;
use hidori_transport::DriverRegistry;

use crate::error::PipelineError;
use crate::pipeline::Pipeline;
use crate::printer::Printer;
use crate::step::PipelineStep;

/// How a round's failures affect the surviving pipeline set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnFail {
    AbortAll,
    AbortFailed,
    Continue,
}

impl OnFail {
    fn parse(s: &str) -> Result<Self, PipelineError> {
        match s {
            "abort-all" => Ok(OnFail::AbortAll),
            "abort-failed" => Ok(OnFail::AbortFailed),
            "continue" => Ok(OnFail::Continue),
            other => Err(PipelineError::InvalidDocument(format!(
                "invalid on_fail value `{other}` (expected abort-all, abort-failed, or continue)"
            ))),
        }
    }
}

impl Default for OnFail {
    fn default() -> Self {
        OnFail::AbortFailed
    }
}

pub struct PipelineGroup {
    on_fail: OnFail,
    pipelines: Vec<Pipeline>,
}

impl PipelineGroup {
    /// Builds one `Pipeline` per `[destinations.*]` entry, each running the
    /// same ordered `[tasks.*]` list, from a document already converted from
    /// TOML into a JSON mapping.
    pub fn from_document(
        document: &Map<String, Value>,
        driver_registry: &DriverRegistry,
        module_registry: &ModuleRegistry,
        executor_path: &Path,
    ) -> Result<Self, PipelineError> {
        Self::from_document_with_id_gen(
            document,
            driver_registry,
            module_registry,
            &UuidIdGen,
            executor_path,
        )
    }

    pub fn from_document_with_id_gen(
        document: &Map<String, Value>,
        driver_registry: &DriverRegistry,
        module_registry: &ModuleRegistry,
        id_gen: &(impl IdGen + 'static),
        executor_path: &Path,
    ) -> Result<Self, PipelineError> {
        let on_fail = document
            .get("config")
            .and_then(Value::as_object)
            .and_then(|config| config.get("on_fail"))
            .and_then(Value::as_str)
            .map(OnFail::parse)
            .transpose()?
            .unwrap_or_default();

        let destinations = document
            .get("destinations")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        let tasks = document
            .get("tasks")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();

        let mut pipelines = Vec::with_capacity(destinations.len());
        for (target, config) in destinations {
            let mut config = config.as_object().cloned().unwrap_or_default();
            let driver = driver_registry.create(&mut config)?;

            let mut steps = Vec::with_capacity(tasks.len());
            for (name, task_value) in &tasks {
                let mut args = task_value.as_object().cloned().unwrap_or_default();
                let module = args
                    .remove("module")
                    .and_then(|v| v.as_str().map(str::to_string))
                    .ok_or_else(|| PipelineError::InvalidDocument(format!("task `{name}` has no `module`")))?;
                steps.push(PipelineStep::new(
                    name.clone(),
                    TaskId::new(id_gen.next()),
                    module,
                    args,
                    module_registry,
                )?);
            }

            let id_factory = id_gen.clone().boxed();
            pipelines.push(Pipeline::new(
                target,
                driver,
                steps,
                id_factory,
                executor_path.to_path_buf(),
            ));
        }

        Ok(Self { on_fail, pipelines })
    }

    /// Runs every pipeline to completion: sequential staging, a concurrent
    /// finalize round, then concurrent invoke rounds until every surviving
    /// pipeline has no steps left. Returns the printer that observed the
    /// whole run, for exit-code decisions, plus the final pipeline set
    /// (useful for tests asserting on survivorship).
    pub async fn run(mut self) -> (Printer, Vec<Pipeline>) {
        let printer = Printer::new();

        // 1. Sequential staging: every pipeline gets a distinct directory,
        // and staking out N directories concurrently buys nothing since
        // they're local filesystem operations.
        let mut survivors = Vec::new();
        for mut pipeline in self.pipelines.drain(..) {
            match pipeline.prepare() {
                Ok(()) => survivors.push(pipeline),
                Err(e) => {
                    printer.flush(
                        pipeline.user(),
                        &pipeline.target,
                        vec![Message::new(
                            MessageType::Error,
                            pipeline.target.clone(),
                            format!("failed to prepare pipeline: {e}"),
                        )],
                    );
                }
            }
        }

        // 2. Concurrent finalize round, then the critical-round filter.
        survivors = run_round(survivors, &printer, RoundKind::Finalize).await;
        survivors = apply_failure_filter(self.on_fail, true, survivors);

        // 3. Concurrent invoke rounds until every survivor has no steps left.
        while survivors.iter().any(|p| !p.has_completed()) {
            if survivors.is_empty() {
                break;
            }
            survivors = run_round(survivors, &printer, RoundKind::Invoke).await;
            survivors = apply_failure_filter(self.on_fail, false, survivors);
        }

        (printer, survivors)
    }
}

#[derive(Clone, Copy)]
enum RoundKind {
    Finalize,
    Invoke,
}

/// Runs one round (finalize or invoke-step) across every pipeline
/// concurrently, joining at the end — a slow target delays this round's
/// completion but never blocks other targets from starting their next step.
async fn run_round(pipelines: Vec<Pipeline>, printer: &Printer, kind: RoundKind) -> Vec<Pipeline> {
    let mut set = JoinSet::new();
    for mut pipeline in pipelines {
        let printer = printer.clone();
        set.spawn(async move {
            let result = match kind {
                RoundKind::Finalize => pipeline.finalize(&printer).await,
                RoundKind::Invoke => pipeline.invoke_step(&printer).await,
            };
            if let Err(e) = result {
                pipeline.force_fail();
                printer.flush(
                    pipeline.user(),
                    &pipeline.target,
                    vec![Message::new(MessageType::Error, pipeline.target.clone(), e.to_string())],
                );
            }
            pipeline
        });
    }

    let mut survivors = Vec::with_capacity(set.len());
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok(pipeline) => survivors.push(pipeline),
            Err(e) => tracing::error!(error = %e, "pipeline round task panicked"),
        }
    }
    survivors
}

/// Drops, keeps, or empties the surviving pipeline set per §4.7's ordered
/// rules: `abort-all` stops the whole group outright; `abort-failed` always
/// drops failed pipelines; a `continue` policy still drops failures on the
/// finalize round (`critical = true`), since nothing ran on those targets
/// yet, but keeps them on later invoke rounds.
fn apply_failure_filter(on_fail: OnFail, critical: bool, pipelines: Vec<Pipeline>) -> Vec<Pipeline> {
    let any_failed = pipelines.iter().any(Pipeline::has_failed);
    if !any_failed {
        return pipelines;
    }

    match on_fail {
        OnFail::AbortAll => Vec::new(),
        OnFail::AbortFailed => pipelines.into_iter().filter(|p| !p.has_failed()).collect(),
        OnFail::Continue if critical => pipelines.into_iter().filter(|p| !p.has_failed()).collect(),
        OnFail::Continue => pipelines,
    }
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod tests;
