//! Error types for the resolver crate.
//!
//! Only structural problems are errors here. A lookup that finds nothing, or
//! finds several plausible instruments, is a normal [`ValidationResult`]
//! and never surfaces through [`ResolverError`].
//!
//! [`ValidationResult`]: crate::models::ValidationResult

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a catalog snapshot or gating an order.
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Two catalog records share the same canonical symbol.
    #[error("Duplicate symbol in catalog: {0}")]
    DuplicateSymbol(String),

    /// A catalog record has an empty symbol.
    #[error("Empty symbol at catalog position {position}")]
    EmptySymbol {
        /// Zero-based position of the offending record
        position: usize,
    },

    /// A catalog symbol contains whitespace.
    #[error("Malformed symbol: {0:?}")]
    MalformedSymbol(String),

    /// A catalog record has no display name.
    #[error("Empty display name for symbol: {0}")]
    EmptyDisplayName(String),

    /// An alias key is not in normalized (uppercase alphanumeric) form.
    #[error("Malformed alias key: {0:?}")]
    MalformedAlias(String),

    /// An alias key maps to no symbols.
    #[error("Alias has no target symbols: {0}")]
    EmptyAliasTargets(String),

    /// A suffix is empty or not uppercase alphanumeric.
    #[error("Malformed suffix: {0:?}")]
    MalformedSuffix(String),

    /// The engine was configured to return no suggestions at all.
    #[error("max_suggestions must be greater than zero")]
    ZeroSuggestionLimit,

    /// The catalog document could not be parsed.
    #[error("Invalid catalog document: {0}")]
    InvalidCatalog(#[from] serde_json::Error),

    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// An order was requested with a zero quantity.
    #[error("Invalid order quantity: {0}")]
    InvalidQuantity(u32),

    /// The order submitter rejected or failed the order.
    #[error("Order submission failed on {venue}: {message}")]
    Submission {
        /// Venue the order was routed to
        venue: String,
        /// Message reported by the submitter
        message: String,
    },
}

impl ResolverError {
    /// Returns true for errors caused by malformed reference data.
    ///
    /// These are fatal at startup. On reload they leave the previous
    /// snapshot in place.
    pub fn is_config_error(&self) -> bool {
        match self {
            Self::DuplicateSymbol(_)
            | Self::EmptySymbol { .. }
            | Self::MalformedSymbol(_)
            | Self::EmptyDisplayName(_)
            | Self::MalformedAlias(_)
            | Self::EmptyAliasTargets(_)
            | Self::MalformedSuffix(_)
            | Self::ZeroSuggestionLimit
            | Self::InvalidCatalog(_)
            | Self::Io { .. } => true,

            Self::InvalidQuantity(_) | Self::Submission { .. } => false,
        }
    }
}
