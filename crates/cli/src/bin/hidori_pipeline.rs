// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hidori-pipeline` - runs a declared pipeline document across every
//! destination it names.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use hidori_engine::PipelineGroup;
use hidori_modules::ModuleRegistry;
use hidori_transport::DriverRegistry;

use hidori_cli::{exit_code, find_executor_binary, format_error, ExitError};

#[derive(Parser)]
#[command(name = "hidori-pipeline", about = "Run a pipeline document")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every destination's pipeline to completion
    Run {
        /// Path to the pipeline TOML file
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    hidori_cli::init_tracing();
    let result = run().await;
    if let Err(ref e) = result {
        let msg = format_error(e);
        if !msg.is_empty() {
            eprintln!("Error: {msg}");
        }
    }
    std::process::exit(exit_code(&result));
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let Commands::Run { path } = cli.command;

    let document = hidori_cli::document::load_document(&path)?;
    let executor_path = find_executor_binary()?;
    let driver_registry = DriverRegistry::with_builtins();
    let module_registry = ModuleRegistry::with_builtins();

    let group = PipelineGroup::from_document(&document, &driver_registry, &module_registry, &executor_path)
        .with_context(|| format!("invalid pipeline document '{}'", path.display()))?;

    let (printer, _pipelines) = group.run().await;

    if printer.has_error() {
        return Err(ExitError::new(1, String::new()).into());
    }
    Ok(())
}
