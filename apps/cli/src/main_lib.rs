use std::sync::Arc;

use symbolguard_resolver::{ReferenceData, SymbolEngine};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use crate::error::CliError;

/// Logs go to stderr so stdout stays parseable under `--json`.
pub fn init_tracing() {
    let log_format = std::env::var("SG_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_engine(config: &Config) -> Result<Arc<SymbolEngine>, CliError> {
    let data = match &config.catalog_path {
        Some(path) => {
            tracing::info!("Loading reference data from {}", path.display());
            ReferenceData::from_path(path)?
        }
        None => ReferenceData::builtin(),
    };

    let engine = SymbolEngine::new(&data, config.engine_config())?;
    tracing::debug!(
        "Engine ready: catalog '{}' with {} instruments",
        engine.catalog_version(),
        engine.len()
    );
    Ok(Arc::new(engine))
}
