// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One staged interaction with a single target: a local directory the
//! executor and task files are copied out of, the remote path they land at,
//! and the driver used to get them there.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use hidori_core::{paths, ExchangeId, Message, StagingKind, Task};
use hidori_transport::{Driver, TransportError};

use crate::error::PipelineError;

fn remote_staging_root(id: &ExchangeId) -> String {
    format!("/tmp/hidori-exchange-{id}")
}

pub struct Exchange {
    pub id: ExchangeId,
    pub local_path: PathBuf,
    pub remote_path: String,
    driver: Arc<dyn Driver>,
    messages: Vec<Message>,
}

impl Exchange {
    /// Stakes out a fresh local staging directory for `target_id` under
    /// `kind`. Fails if the directory already exists — staging ids are
    /// never reused, and same-id reuse is a hard error rather than a silent
    /// overwrite.
    pub fn new(
        kind: StagingKind,
        target_id: &str,
        id: ExchangeId,
        driver: Arc<dyn Driver>,
    ) -> Result<Self, PipelineError> {
        let local_path = paths::staging_dir(kind, target_id, id.as_str())?;
        if let Some(parent) = local_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::create_dir(&local_path)?;

        let remote_path = remote_staging_root(&id);

        Ok(Self {
            id,
            local_path,
            remote_path,
            driver,
            messages: Vec::new(),
        })
    }

    /// Populates the staging directory: a copy of the executor binary plus
    /// one `task-<id>.json` per task. There is no separate module-code tree
    /// to copy — modules are compiled into the executor binary rather than
    /// shipped as interpreted source, so staging the binary once is enough.
    pub fn stage(&self, executor_path: &Path, tasks: &[Task]) -> Result<(), PipelineError> {
        let staged_executor = self.local_path.join("hidori-executor");
        std::fs::copy(executor_path, &staged_executor)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&staged_executor)?.permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&staged_executor, perms)?;
        }

        for task in tasks {
            let path = self.local_path.join(format!("task-{}.json", task.id.as_str()));
            std::fs::write(path, task.to_json()?)?;
        }

        Ok(())
    }

    pub fn record(&mut self, messages: Vec<Message>) {
        self.messages.extend(messages);
    }

    /// Takes every buffered message, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }

    /// Pushes the local staging directory onto the target.
    pub async fn push(&self) -> Result<Vec<Message>, TransportError> {
        self.driver.push(&self.local_path, &self.remote_path).await
    }

    /// Runs the executor on the target against the task with the given id.
    pub async fn invoke(&self, task_id: &str) -> Result<Vec<Message>, TransportError> {
        let executor_path = format!("{}/hidori-executor", self.remote_path);
        self.driver.invoke(&executor_path, &[task_id.to_string()]).await
    }
}

#[cfg(test)]
#[path = "exchange_tests.rs"]
mod tests;
