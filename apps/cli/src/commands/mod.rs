mod info;
mod order;
mod search;
mod validate;

use std::sync::Arc;

use serde_json::Value;
use symbolguard_resolver::{OrderSide, SymbolEngine};

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub use order::DryRunSubmitter;

/// What a command produced, in both output shapes.
#[derive(Debug)]
pub struct CommandReport {
    /// False when the input did not resolve (or the order was refused).
    pub success: bool,
    pub text: String,
    pub json: Value,
}

pub async fn run(cli: &Cli, engine: Arc<SymbolEngine>) -> Result<CommandReport, CliError> {
    match &cli.command {
        Command::Validate(args) => validate::run(&engine, args),
        Command::Search(args) => search::run(&engine, args),
        Command::Info(args) => info::run(&engine, args),
        Command::Buy(args) => order::run(engine, OrderSide::Buy, args).await,
        Command::Sell(args) => order::run(engine, OrderSide::Sell, args).await,
    }
}

#[cfg(test)]
pub(crate) fn builtin_engine() -> Arc<SymbolEngine> {
    Arc::new(SymbolEngine::with_builtin().unwrap())
}
