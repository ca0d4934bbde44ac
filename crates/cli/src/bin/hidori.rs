// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `hidori` - one-shot module call against a single target, no pipeline
//! document required.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{Map, Value};

use hidori_core::{ExchangeId, IdGen, Message, StagingKind, TaskId, UuidIdGen};
use hidori_engine::{Exchange, Printer};
use hidori_modules::ModuleRegistry;
use hidori_transport::DriverRegistry;

use hidori_cli::{exit_code, find_executor_binary, format_error, ExitError};

#[derive(Parser)]
#[command(name = "hidori", about = "Run a single module against one target")]
struct Cli {
    /// Target as `user@host[:port]`
    destination: String,
    /// Module name, e.g. `hello`
    module: String,
    /// Module arguments as `key=value`
    #[arg(trailing_var_arg = true)]
    args: Vec<String>,
}

fn parse_args(raw: &[String]) -> Result<Map<String, Value>> {
    let mut args = Map::new();
    for entry in raw {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("argument `{entry}` must be `key=value`"))?;
        args.insert(key.to_string(), Value::String(value.to_string()));
    }
    Ok(args)
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
    let destination = hidori_cli::Destination::parse(&cli.destination)?;
    let target_id = destination.target_id().to_string();
    let args = parse_args(&cli.args)?;

    let module_registry = ModuleRegistry::with_builtins();
    if !module_registry.contains(&cli.module) {
        anyhow::bail!("unknown module `{}`", cli.module);
    }

    let executor_path = find_executor_binary()?;
    tracing::debug!(executor = %executor_path.display(), target = %target_id, "staging call");
    let driver_registry = DriverRegistry::with_builtins();
    let user = destination.user.clone();
    let mut config = destination.into_config();
    let driver = driver_registry.create(&mut config)?;

    let task_id = TaskId::new(UuidIdGen.next());
    let task = hidori_core::Task::new(task_id.clone(), "Call", cli.module, args);

    let exchange_id = ExchangeId::new(UuidIdGen.next());
    let mut exchange = Exchange::new(StagingKind::Calls, &target_id, exchange_id, driver)
        .context("failed to stake out a staging directory")?;
    exchange.stage(&executor_path, std::slice::from_ref(&task))?;

    let pushed = exchange.push().await.context("failed to push the staging directory")?;
    exchange.record(pushed);

    let invoked = exchange
        .invoke(task_id.as_str())
        .await
        .context("failed to invoke the executor")?;
    exchange.record(invoked);

    let messages: Vec<Message> = exchange.drain();
    let had_error = messages.iter().any(Message::is_error);
    let printer = Printer::new();
    printer.flush(&user, &target_id, messages);

    if had_error {
        return Err(ExitError::new(1, String::new()).into());
    }
    Ok(())
}
