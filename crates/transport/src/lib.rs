// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hidori-transport: the `Driver`/`Transport` boundary and the reference SSH
//! implementation.

pub mod driver;
pub mod error;
pub mod ssh;
pub mod transport;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use driver::{Driver, DriverRegistry, DriverRegistryBuilder, DEFAULT_DRIVER};
pub use error::{DriverError, TransportError};
pub use ssh::{SSHDriver, SSHTransport};
pub use transport::{parse_messages, Transport};

#[cfg(any(test, feature = "test-support"))]
pub use fake::{DriverCall, FakeDriver};
