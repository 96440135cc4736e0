//! SymbolGuard Resolver Crate
//!
//! Decides whether free-form user input (possibly misspelled, partial or
//! colloquial) names exactly one known tradable instrument, and if not,
//! produces a ranked list of plausible candidates. Order placement must only
//! proceed on a validated symbol.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  ReferenceData   |  instruments + alias table + suffix list (JSON)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |     Snapshot     | --> | SymbolIndex      |  symbol -> record
//! |   (immutable)    |     | TokenIndex       |  name token -> symbols
//! |                  |     | Normalizer       |  candidate pipeline
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+
//! |     Resolver     |  verbatim -> normalized -> alias -> suffix -> fuzzy
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | ValidationResult |  is_valid / validated_symbol / suggestions / message
//! +------------------+
//! ```
//!
//! [`SymbolEngine`] owns the current snapshot and swaps it atomically on
//! reload. [`OrderGate`] shows the intended caller contract: validate first,
//! submit only `validated_symbol`.
//!
//! # Example
//!
//! ```
//! use symbolguard_resolver::SymbolEngine;
//!
//! let engine = SymbolEngine::with_builtin().unwrap();
//!
//! let result = engine.validate("hdfc bank");
//! assert!(result.is_valid);
//! assert_eq!(result.validated_symbol.as_deref(), Some("HDFCBANK"));
//!
//! // Brand names that cover several listed entities are never auto-picked.
//! let result = engine.validate("HDFC");
//! assert!(!result.is_valid);
//! assert!(result.suggestions.len() >= 2);
//! ```

pub mod catalog;
pub mod engine;
pub mod errors;
pub mod index;
pub mod matcher;
pub mod models;
pub mod normalizer;
pub mod ranker;
pub mod resolver;
pub mod workflow;

pub use catalog::ReferenceData;
pub use engine::{EngineConfig, SymbolEngine};
pub use errors::ResolverError;
pub use index::{SymbolIndex, TokenIndex};
pub use matcher::FuzzyMatcher;
pub use models::{InstrumentRecord, ResolutionKind, ValidationResult};
pub use normalizer::{normalize_base, Candidate, CandidateGenerator, CandidateSource, Normalizer};
pub use ranker::{format_suggestions, ORDER_SUGGESTION_LIMIT, SEARCH_SUGGESTION_LIMIT};
pub use resolver::{AmbiguityPolicy, Resolver, Snapshot};
pub use workflow::{lookup, LookupOutcome, OrderGate, OrderOutcome, OrderRequest, OrderSide, OrderSubmitter};
