//! CLI argument definitions.
//!
//! # Global Options
//!
//! | Option | Env | Description |
//! |--------|-----|-------------|
//! | `--catalog` | `SG_CATALOG_PATH` | Reference data JSON (builtin when unset) |
//! | `--max-suggestions` | `SG_MAX_SUGGESTIONS` | Suggestion cap for validate |
//! | `--ambiguity-policy` | `SG_AMBIGUITY_POLICY` | `suggest` or `first-candidate` |
//! | `--json` | | Print results as JSON |

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use symbolguard_resolver::AmbiguityPolicy;

/// Validate free-form instrument input before it reaches an order.
#[derive(Debug, Parser)]
#[command(name = "symbolguard", version, about)]
pub struct Cli {
    /// Reference data file to load instead of the builtin catalog.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Maximum number of suggestions returned by validation.
    #[arg(long, global = true)]
    pub max_suggestions: Option<usize>,

    /// How to treat aliases that name several instruments.
    #[arg(long, global = true, value_enum)]
    pub ambiguity_policy: Option<PolicyArg>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Offer every named instrument; never auto-pick.
    Suggest,
    /// Accept the first alias target found in the catalog.
    FirstCandidate,
}

impl From<PolicyArg> for AmbiguityPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Suggest => Self::Suggest,
            PolicyArg::FirstCandidate => Self::FirstCandidate,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check whether input names exactly one instrument.
    ///
    ///   symbolguard validate "hdfc bank"
    Validate(InputArgs),

    /// Fuzzy search the catalog by symbol or company name.
    ///
    ///   symbolguard search bank --limit 5
    Search(SearchArgs),

    /// Look up a symbol and show what matched.
    Info(InputArgs),

    /// Validate, then submit a dry-run buy order.
    Buy(OrderArgs),

    /// Validate, then submit a dry-run sell order.
    Sell(OrderArgs),
}

#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Symbol, company name or nickname.
    pub input: String,
}

#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    pub query: String,

    /// Maximum number of results.
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

#[derive(Debug, Clone, Args)]
pub struct OrderArgs {
    /// Symbol, company name or nickname.
    pub input: String,

    /// Number of shares.
    pub quantity: u32,
}
