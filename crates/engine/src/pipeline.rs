// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The per-target state machine: `new -> prepared -> finalized ->
//! (invoke_step)* -> completed | failed`.
//!
//! Steps are strictly sequential within one pipeline — `invoke_step` pops
//! exactly one step per call, mirroring the single-threaded executor on the
//! other end of the wire.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;

use hidori_core::{ExchangeId, StagingKind};
use hidori_transport::Driver;

use crate::error::PipelineError;
use crate::exchange::Exchange;
use crate::printer::Printer;
use crate::step::PipelineStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    New,
    Prepared,
    Finalized,
    Running,
    Completed,
    Failed,
}

pub struct Pipeline {
    pub target: String,
    driver: Arc<dyn Driver>,
    steps: VecDeque<PipelineStep>,
    exchange: Option<Exchange>,
    state: PipelineState,
    has_failed: bool,
    id_factory: Arc<dyn Fn() -> String + Send + Sync>,
    executor_path: PathBuf,
}

impl Pipeline {
    pub fn new(
        target: impl Into<String>,
        driver: Arc<dyn Driver>,
        steps: Vec<PipelineStep>,
        id_factory: Arc<dyn Fn() -> String + Send + Sync>,
        executor_path: PathBuf,
    ) -> Self {
        Self {
            target: target.into(),
            driver,
            steps: steps.into(),
            exchange: None,
            state: PipelineState::New,
            has_failed: false,
            id_factory,
            executor_path,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn has_failed(&self) -> bool {
        self.has_failed
    }

    /// The identity printed in each flushed message group's header.
    pub fn user(&self) -> &str {
        self.driver.user()
    }

    /// Marks this pipeline failed regardless of its message buffer — used
    /// by the group runner when a round returns a hard [`PipelineError`]
    /// (e.g. the transport itself errored) rather than an `error`-typed
    /// message, which would otherwise leave `has_failed` unset.
    pub fn force_fail(&mut self) {
        self.has_failed = true;
    }

    /// `true` iff no steps remain to be invoked.
    pub fn has_completed(&self) -> bool {
        self.steps.is_empty()
    }

    /// Stakes out a staging directory and transport for this target.
    /// Calling any other step method before this one is a programmer error.
    pub fn prepare(&mut self) -> Result<(), PipelineError> {
        if self.state != PipelineState::New {
            return Err(PipelineError::OutOfOrder("prepare() called more than once"));
        }
        let id = ExchangeId::new((self.id_factory)());
        let exchange = Exchange::new(StagingKind::Pipelines, &self.target, id, self.driver.clone())?;

        let tasks: Vec<_> = self.steps.iter().map(|step| step.task.clone()).collect();
        exchange.stage(&self.executor_path, &tasks)?;

        self.exchange = Some(exchange);
        self.state = PipelineState::Prepared;
        Ok(())
    }

    fn exchange_mut(&mut self) -> Result<&mut Exchange, PipelineError> {
        self.exchange
            .as_mut()
            .ok_or(PipelineError::OutOfOrder("step method called before prepare()"))
    }

    /// Pushes the staging directory onto the target, then flushes whatever
    /// messages that produced through `printer`. Sets `has_failed` if any of
    /// them was an `error`.
    pub async fn finalize(&mut self, printer: &Printer) -> Result<(), PipelineError> {
        if self.state != PipelineState::Prepared {
            return Err(PipelineError::OutOfOrder("finalize() called out of order"));
        }

        let pushed = self.exchange_mut()?.push().await?;
        self.exchange_mut()?.record(pushed);

        let messages = self.exchange_mut()?.drain();
        self.has_failed |= messages.iter().any(hidori_core::Message::is_error);
        printer.flush(self.driver.user(), &self.target, messages);

        self.state = PipelineState::Finalized;
        Ok(())
    }

    /// Invokes the next pending step's task on the target, idempotent in
    /// the sense that repeated calls advance one step at a time and are a
    /// no-op once `has_completed()` is true.
    pub async fn invoke_step(&mut self, printer: &Printer) -> Result<(), PipelineError> {
        if !matches!(self.state, PipelineState::Finalized | PipelineState::Running) {
            return Err(PipelineError::OutOfOrder("invoke_step() called before finalize()"));
        }

        let Some(step) = self.steps.pop_front() else {
            self.state = if self.has_failed {
                PipelineState::Failed
            } else {
                PipelineState::Completed
            };
            return Ok(());
        };

        let invoked = self.exchange_mut()?.invoke(step.task.id.as_str()).await?;
        self.exchange_mut()?.record(invoked);

        let messages = self.exchange_mut()?.drain();
        self.has_failed |= messages.iter().any(hidori_core::Message::is_error);
        printer.flush(self.driver.user(), &self.target, messages);

        self.state = if self.steps.is_empty() {
            if self.has_failed {
                PipelineState::Failed
            } else {
                PipelineState::Completed
            }
        } else {
            PipelineState::Running
        };

        Ok(())
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
