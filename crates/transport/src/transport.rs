// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The wire boundary: ship files to a target, then run a command on it and
//! collect its message stream.

use std::path::Path;

use async_trait::async_trait;
use hidori_core::{Message, MessageType};

use crate::error::TransportError;

/// Moves bytes to and runs commands on exactly one target.
///
/// A `Transport` is paired with one [`crate::driver::Driver`]; the driver
/// owns target identity (user, host, port), the transport owns how bytes
/// actually move.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Name used to tag messages this transport couldn't parse as JSON.
    fn name(&self) -> &'static str;

    /// Recursively copies `source` to `dest` on the target.
    async fn push(&self, source: &Path, dest: &str) -> Result<Vec<Message>, TransportError>;

    /// Runs `path` with `args` on the target and returns its message stream.
    async fn invoke(&self, path: &str, args: &[String]) -> Result<Vec<Message>, TransportError>;
}

/// Splits `output` into lines and parses each as a [`Message`].
///
/// When `succeeded` is true, a line that isn't valid JSON is dropped
/// silently — the command exited cleanly, so stray stdout text is assumed
/// to be noise, not a failure signal. When `succeeded` is false, any such
/// line becomes a synthetic `error` message tagged with the transport's
/// name instead, so an operational failure is never silently dropped.
pub fn parse_messages(output: &str, transport_name: &str, succeeded: bool) -> Vec<Message> {
    output
        .lines()
        .filter_map(|line| match serde_json::from_str::<Message>(line) {
            Ok(message) => Some(message),
            Err(_) if succeeded => None,
            Err(_) => Some(Message::new(
                MessageType::Error,
                format!("INTERNAL-{}-TRANSPORT", transport_name.to_uppercase()),
                line.to_string(),
            )),
        })
        .collect()
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
