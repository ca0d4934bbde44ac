// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! hidori-modules: the `Module` trait, its process-wide registry, and the
//! reference modules shipped with this crate.

pub mod hello;
pub mod hostname;
pub mod module;
pub mod registry;
pub mod wait;

pub use hello::HelloModule;
pub use hostname::HostnameModule;
pub use module::{Module, Outcome};
pub use registry::{ModuleRegistry, ModuleRegistryBuilder, RegistryError};
pub use wait::WaitModule;
