// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The remote-side binary: staged next to a task file and invoked once per
//! task, it validates and executes that one task, then exits.
//!
//! Every failure here — bad arguments, a missing or malformed task file, an
//! unknown module — is reported as a single `error`-typed message on stdout
//! before exiting non-zero. Never write anything but message-stream JSON
//! lines to stdout: that stream is the entire contract with the caller.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use hidori_core::{Messenger, Task, TaskId};
use hidori_modules::ModuleRegistry;
use hidori_schema::{FieldKind, Schema};

/// `{name: text, data: {module: text, …}}` — checked purely as a gate before
/// parsing; its validated (defaults-applied, extra-key-stripped) output is
/// discarded, since the task's actual fields are read straight off the raw
/// JSON by [`Task::from_value`] so a module's own arguments survive
/// untouched.
fn envelope_schema() -> Schema {
    let data_schema = Schema::build()
        .field("module", FieldKind::Text)
        .finish()
        .expect("envelope data schema is static and valid");

    Schema::build()
        .field("name", FieldKind::Text)
        .field("data", FieldKind::SubSchema(Box::new(data_schema)))
        .finish()
        .expect("envelope schema is static and valid")
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

/// Queues one error message under the `system` task, flushes, and reports
/// the process exit code to use (always 1).
///
/// Returns a plain `u8` rather than [`ExitCode`] so this and [`run`] stay
/// testable with `assert_eq!` — `ExitCode` itself implements neither
/// `PartialEq` nor `Debug`.
fn exit_with_error(mut messenger: Messenger, message: impl Into<String>) -> u8 {
    messenger.queue_error(message);
    messenger.flush();
    1
}

/// Runs one task found in `executor_dir`, given the raw argv the process was
/// invoked with (argv\[0\] is the executor path, argv\[1\] the task id — the
/// only shape the original `remote.py` accepts). Returns the process exit
/// code: 0 if no `error`-typed message was queued, 1 otherwise.
async fn run(args: &[String], executor_dir: &Path) -> u8 {
    let system_messenger = Messenger::new("system");

    if args.len() != 2 {
        return exit_with_error(system_messenger, "internal error - invalid executor args");
    }
    let task_id = &args[1];
    let task_path = executor_dir.join(format!("task-{task_id}.json"));

    if !task_path.exists() {
        return exit_with_error(system_messenger, "internal error - requested task does not exist");
    }

    let raw = match tokio::fs::read_to_string(&task_path).await {
        Ok(raw) => raw,
        Err(_) => {
            return exit_with_error(system_messenger, "internal error - requested task does not exist")
        }
    };

    let value: serde_json::Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(_) => return exit_with_error(system_messenger, "internal error - could not parse task file"),
    };

    let envelope = value.as_object().cloned().unwrap_or_default();
    if let Err(schema_error) = envelope_schema().validate(&envelope) {
        return exit_with_error(
            system_messenger,
            format!("internal error - invalid task structure: {schema_error}"),
        );
    }

    let task = Task::from_value(TaskId::new(task_id), value)
        .expect("envelope already checked against envelope_schema");

    let registry = ModuleRegistry::with_builtins();
    let module = match registry.get(&task.module) {
        Ok(module) => module,
        Err(_) => {
            return exit_with_error(system_messenger, "internal error - specified module does not exist")
        }
    };

    let mut task_messenger = Messenger::new(task.name.as_str());

    if let Some(validated) = module.validate(&task.args, &mut task_messenger).await {
        module.execute(&validated, &mut task_messenger).await;
    }

    let had_error = task_messenger.has_error();
    task_messenger.flush();

    if had_error {
        1
    } else {
        0
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let executor_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));

    ExitCode::from(run(&args, &executor_dir).await)
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
