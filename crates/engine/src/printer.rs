// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Prints a pipeline's flushed messages, grouped by task, and remembers
//! whether any `error`-typed message has gone by — the one piece of state
//! the CLI binaries need to compute their process exit code.
//!
//! Cheaply `Clone`-able and internally synchronized so one `Printer` can be
//! shared across a `PipelineGroup` round's concurrently running pipelines.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use hidori_core::Message;

#[derive(Default)]
struct Inner {
    saw_error: bool,
}

#[derive(Clone, Default)]
pub struct Printer {
    inner: Arc<Mutex<Inner>>,
}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups `messages` by task (first-occurrence order), prints a
    /// `[{user}@{target}: {task}]` header ahead of each group, then each
    /// message as one JSON line — the same wire shape the executor writes
    /// to stdout, so a caller piping either source sees an identical
    /// stream past the header.
    pub fn flush(&self, user: &str, target: &str, messages: Vec<Message>) {
        if messages.is_empty() {
            return;
        }

        let mut order = Vec::new();
        let mut groups: HashMap<String, Vec<Message>> = HashMap::new();
        let mut saw_error = false;
        for message in messages {
            saw_error |= message.is_error();
            groups.entry(message.task.clone()).or_insert_with(|| {
                order.push(message.task.clone());
                Vec::new()
            });
            groups.get_mut(&message.task).expect("just inserted").push(message);
        }

        if saw_error {
            self.inner.lock().saw_error = true;
        }

        for task in order {
            println!("[{user}@{target}: {task}]");
            for message in groups.remove(&task).unwrap_or_default() {
                println!("{}", message.to_json_line());
            }
        }
    }

    pub fn has_error(&self) -> bool {
        self.inner.lock().saw_error
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
