mod cli;
mod commands;
mod config;
mod error;
mod main_lib;

use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::CliError;
use crate::main_lib::{build_engine, init_tracing};

/// Exit code when input did not resolve to a single instrument.
const EXIT_UNRESOLVED: i32 = 1;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_UNRESOLVED),
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(error.exit_code());
        }
    }
}

async fn run() -> Result<bool, CliError> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing();

    let config = Config::from_env()?.apply_overrides(
        cli.catalog.clone(),
        cli.max_suggestions,
        cli.ambiguity_policy.map(Into::into),
    )?;
    let engine = build_engine(&config)?;

    let report = commands::run(&cli, engine).await?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report.json)?);
    } else {
        println!("{}", report.text);
    }

    Ok(report.success)
}
