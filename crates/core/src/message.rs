// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The message record and the queue/flush sink that prints it.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The kind of outcome a message reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Success,
    Error,
    Affected,
    Info,
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MessageType::Success => "success",
            MessageType::Error => "error",
            MessageType::Affected => "affected",
            MessageType::Info => "info",
        };
        write!(f, "{s}")
    }
}

/// A single line of the message stream: one typed outcome for one task.
///
/// `extra` holds any additional fields a caller attached; they are flattened
/// into the JSON object alongside `type`/`task`/`message` on serialization,
/// and collected back into `extra` on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub ty: MessageType,
    pub task: String,
    pub message: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Message {
    pub fn new(ty: MessageType, task: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            ty,
            task: task.into(),
            message: message.into(),
            extra: Map::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.ty == MessageType::Error
    }

    /// Render this message as a single JSON line, matching the original
    /// stream's one-object-per-line contract.
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(
                r#"{{"type":"error","task":"system","message":"could not serialize message"}}"#
            )
        })
    }
}

/// Buffers messages for a single task and flushes them to stdout, one JSON
/// object per line, FIFO.
pub struct Messenger {
    task: String,
    messages: VecDeque<Message>,
}

impl Messenger {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            messages: VecDeque::new(),
        }
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn queue(&mut self, ty: MessageType, message: impl Into<String>) {
        self.messages
            .push_back(Message::new(ty, self.task.clone(), message));
    }

    pub fn queue_success(&mut self, message: impl Into<String>) {
        self.queue(MessageType::Success, message);
    }

    pub fn queue_error(&mut self, message: impl Into<String>) {
        self.queue(MessageType::Error, message);
    }

    pub fn queue_affected(&mut self, message: impl Into<String>) {
        self.queue(MessageType::Affected, message);
    }

    pub fn queue_info(&mut self, message: impl Into<String>) {
        self.queue(MessageType::Info, message);
    }

    /// True if any currently-queued message is an error.
    pub fn has_error(&self) -> bool {
        self.messages.iter().any(Message::is_error)
    }

    /// Prints every queued message to stdout, oldest first, and empties the
    /// queue.
    pub fn flush(&mut self) {
        while let Some(message) = self.messages.pop_front() {
            println!("{}", message.to_json_line());
        }
    }

    /// Drains the queue without printing, for callers that ship messages
    /// elsewhere (e.g. back across a transport).
    pub fn drain(&mut self) -> Vec<Message> {
        self.messages.drain(..).collect()
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
