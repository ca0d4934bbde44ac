// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The reference driver/transport pair: plain OpenSSH, control-master
//! multiplexed so repeated invocations against the same target reuse one
//! connection.

use std::path::Path;
use std::process::Output;
use std::time::Duration;

use async_trait::async_trait;
use hidori_core::Message;
use hidori_schema::{Definition, FieldKind, Schema};
use serde_json::{Map, Value};
use tokio::process::Command;

use crate::driver::Driver;
use crate::error::{DriverError, TransportError};
use crate::transport::{parse_messages, Transport};

/// Bound on every `ssh`/`scp` invocation, so a dead target can't wedge a
/// `PipelineGroup` round forever. Overridable via `SSH_TRANSPORT_TIMEOUT`
/// (seconds).
pub const DEFAULT_SSH_TIMEOUT: Duration = Duration::from_secs(120);

fn ssh_timeout() -> Duration {
    std::env::var("SSH_TRANSPORT_TIMEOUT")
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_SSH_TIMEOUT)
}

const SSH_OPTIONS: &[&str] = &[
    "-o",
    "ControlMaster=auto",
    "-o",
    "ControlPath=~/.ssh/control-%r@%h:%p",
    "-o",
    "ControlPersist=yes",
];

fn ssh_schema() -> Schema {
    Schema::build()
        .field("target", FieldKind::Text)
        .field("user", FieldKind::Text)
        .field_with(
            "port",
            FieldKind::Text,
            false,
            Definition::new()
                .with_default(Value::String("22".into()))
                .expect("literal default never conflicts with a factory"),
        )
        .finish()
        .expect("ssh schema is static and valid")
}

/// `ssh`/`scp` to a single `user@target:port`.
pub struct SSHDriver {
    user: String,
    target: String,
    port: String,
}

impl SSHDriver {
    pub fn from_config(config: &mut Map<String, Value>) -> Result<Self, DriverError> {
        let schema = ssh_schema();
        let validated = schema.validate(config)?;

        let user = validated["user"].as_str().unwrap_or_default().to_string();
        let target = validated["target"].as_str().unwrap_or_default().to_string();
        let port = validated["port"].as_str().unwrap_or("22").to_string();

        Ok(Self { user, target, port })
    }

    fn transport(&self) -> SSHTransport {
        SSHTransport {
            user: self.user.clone(),
            target: self.target.clone(),
            port: self.port.clone(),
        }
    }
}

#[async_trait]
impl Driver for SSHDriver {
    fn name(&self) -> &'static str {
        "ssh"
    }

    fn user(&self) -> &str {
        &self.user
    }

    fn target(&self) -> &str {
        &self.target
    }

    async fn push(&self, source: &Path, dest: &str) -> Result<Vec<Message>, TransportError> {
        self.transport().push(source, dest).await
    }

    async fn invoke(&self, path: &str, args: &[String]) -> Result<Vec<Message>, TransportError> {
        self.transport().invoke(path, args).await
    }
}

/// The transport half of [`SSHDriver`]: builds and runs the actual
/// `scp`/`ssh` command lines.
pub struct SSHTransport {
    user: String,
    target: String,
    port: String,
}

#[async_trait]
impl Transport for SSHTransport {
    fn name(&self) -> &'static str {
        "ssh"
    }

    async fn push(&self, source: &Path, dest: &str) -> Result<Vec<Message>, TransportError> {
        let mut cmd = Command::new("scp");
        cmd.args(SSH_OPTIONS)
            .arg("-qr")
            .arg("-P")
            .arg(&self.port)
            .arg(source)
            .arg(format!("{}@{}:{}", self.user, self.target, dest));

        let output = run_with_timeout(cmd, ssh_timeout(), "scp push").await?;
        Ok(parse_messages(&command_output(&output), "ssh", output.status.success()))
    }

    async fn invoke(&self, path: &str, args: &[String]) -> Result<Vec<Message>, TransportError> {
        // `path` is a staged `hidori-executor` binary, not an interpreted
        // script, so it runs directly rather than through a language runtime.
        let mut cmd = Command::new("ssh");
        cmd.args(SSH_OPTIONS)
            .arg("-qt")
            .arg("-p")
            .arg(&self.port)
            .arg(format!("{}@{}", self.user, self.target))
            .arg(path)
            .args(args);

        let output = run_with_timeout(cmd, ssh_timeout(), "ssh invoke").await?;
        Ok(parse_messages(&command_output(&output), "ssh", output.status.success()))
    }
}

/// Runs a subprocess with a timeout, killing the child if it elapses.
///
/// Grounded on the teacher's `oj_adapters::subprocess::run_with_timeout`.
async fn run_with_timeout(
    mut cmd: Command,
    timeout: Duration,
    description: &str,
) -> Result<Output, TransportError> {
    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(source)) => Err(TransportError::Spawn {
            description: description.to_string(),
            source,
        }),
        Err(_elapsed) => Err(TransportError::Timeout {
            description: description.to_string(),
            seconds: timeout.as_secs(),
        }),
    }
}

/// stdout on success, stderr (falling back to stdout) otherwise — matching
/// the original's `run_command`.
fn command_output(output: &Output) -> String {
    let text = if output.status.success() {
        &output.stdout
    } else if !output.stderr.is_empty() {
        &output.stderr
    } else {
        &output.stdout
    };
    String::from_utf8_lossy(text).trim().to_string()
}

#[cfg(test)]
#[path = "ssh_tests.rs"]
mod tests;
