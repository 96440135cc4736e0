use thiserror::Error;

use symbolguard_resolver::ResolverError;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Resolver(#[from] ResolverError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 2,
            Self::Resolver(e) if e.is_config_error() => 2,
            Self::Resolver(_) | Self::Serialization(_) => 10,
        }
    }
}
