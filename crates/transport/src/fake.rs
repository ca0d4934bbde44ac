// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! An in-memory driver/transport pair for testing pipelines without a real
//! network target.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use hidori_core::Message;
use parking_lot::Mutex;

use crate::driver::Driver;
use crate::error::TransportError;

/// One recorded interaction with a [`FakeDriver`].
#[derive(Debug, Clone, PartialEq)]
pub enum DriverCall {
    Push { source: PathBuf, dest: String },
    Invoke { path: String, args: Vec<String> },
}

struct FakeDriverState {
    calls: Vec<DriverCall>,
    push_reply: Vec<Message>,
    invoke_reply: Vec<Message>,
    fail_next: bool,
}

/// A [`Driver`] that records every call and returns canned messages instead
/// of touching the network.
#[derive(Clone)]
pub struct FakeDriver {
    user: String,
    target: String,
    state: Arc<Mutex<FakeDriverState>>,
}

impl FakeDriver {
    pub fn new(user: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            target: target.into(),
            state: Arc::new(Mutex::new(FakeDriverState {
                calls: Vec::new(),
                push_reply: Vec::new(),
                invoke_reply: Vec::new(),
                fail_next: false,
            })),
        }
    }

    pub fn with_invoke_reply(self, messages: Vec<Message>) -> Self {
        self.state.lock().invoke_reply = messages;
        self
    }

    pub fn with_push_reply(self, messages: Vec<Message>) -> Self {
        self.state.lock().push_reply = messages;
        self
    }

    pub fn fail_next_call(&self) {
        self.state.lock().fail_next = true;
    }

    pub fn calls(&self) -> Vec<DriverCall> {
        self.state.lock().calls.clone()
    }
}

#[async_trait]
impl Driver for FakeDriver {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn user(&self) -> &str {
        &self.user
    }

    fn target(&self) -> &str {
        &self.target
    }

    async fn push(&self, source: &Path, dest: &str) -> Result<Vec<Message>, TransportError> {
        let mut state = self.state.lock();
        state.calls.push(DriverCall::Push {
            source: source.to_path_buf(),
            dest: dest.to_string(),
        });
        if std::mem::take(&mut state.fail_next) {
            return Err(TransportError::Timeout {
                description: "fake push".into(),
                seconds: 0,
            });
        }
        Ok(state.push_reply.clone())
    }

    async fn invoke(&self, path: &str, args: &[String]) -> Result<Vec<Message>, TransportError> {
        let mut state = self.state.lock();
        state.calls.push(DriverCall::Invoke {
            path: path.to_string(),
            args: args.to_vec(),
        });
        if std::mem::take(&mut state.fail_next) {
            return Err(TransportError::Timeout {
                description: "fake invoke".into(),
                seconds: 0,
            });
        }
        Ok(state.invoke_reply.clone())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
