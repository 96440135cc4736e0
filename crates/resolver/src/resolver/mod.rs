//! Exact-match-first, fuzzy-fallback resolution.
//!
//! # Resolution Precedence
//!
//! Given raw user input, against one [`Snapshot`]:
//!
//! 1. **Verbatim** - the trimmed, uppercased input as typed (reaches symbols
//!    with punctuation such as `M&M`).
//! 2. **Normalized input** - uppercase alphanumerics only.
//! 3. **Ambiguity check** - if the normalized input is an alias naming two or
//!    more catalog instruments, stop and return them all as suggestions
//!    (unless [`AmbiguityPolicy::FirstCandidate`] is configured).
//! 4. **Alias expansions**, then **suffix variants**, in pipeline order.
//! 5. **Fuzzy search** on the original input.
//!
//! The first exact hit wins. A user typing an exact canonical symbol is
//! therefore never shadowed by an alias guess.

mod snapshot;

use log::debug;
use serde::{Deserialize, Serialize};

pub use snapshot::Snapshot;

use crate::engine::EngineConfig;
use crate::models::{InstrumentRecord, ValidationResult};
use crate::normalizer::{normalize_base, CandidateSource};
use crate::ranker;

/// What to do when an alias names several catalog instruments.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AmbiguityPolicy {
    /// Return every named instrument as a suggestion; resolve nothing.
    #[default]
    Suggest,
    /// Probe alias targets in table order and accept the first hit.
    FirstCandidate,
}

impl std::str::FromStr for AmbiguityPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "suggest" => Ok(Self::Suggest),
            "first-candidate" | "first_candidate" => Ok(Self::FirstCandidate),
            other => Err(format!("unknown ambiguity policy: {}", other)),
        }
    }
}

/// Resolves input against a single snapshot.
pub struct Resolver<'a> {
    snapshot: &'a Snapshot,
    config: &'a EngineConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(snapshot: &'a Snapshot, config: &'a EngineConfig) -> Self {
        Self { snapshot, config }
    }

    /// Decide whether `input` identifies exactly one instrument.
    pub fn validate(&self, input: &str) -> ValidationResult {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return ValidationResult::no_match(input);
        }

        let symbols = self.snapshot.symbols();

        if let Some(record) = symbols.get(&trimmed.to_uppercase()) {
            debug!("Resolved '{}' to {} verbatim", input, record.symbol());
            return ValidationResult::resolved(record.clone());
        }

        let candidates = self.snapshot.normalizer().candidates(input);
        if candidates.is_empty() {
            return ValidationResult::no_match(input);
        }

        let mut ambiguity_checked = false;
        for candidate in &candidates {
            if candidate.source != CandidateSource::Input && !ambiguity_checked {
                ambiguity_checked = true;
                if let Some(result) = self.ambiguous_alias(input) {
                    return result;
                }
            }

            if let Some(record) = symbols.get(&candidate.symbol) {
                debug!(
                    "Resolved '{}' to {} via {} candidate",
                    input,
                    record.symbol(),
                    candidate.source
                );
                return ValidationResult::resolved(record.clone());
            }
        }

        let suggestions = ranker::top(
            self.snapshot.matcher().search(input),
            self.config.max_suggestions,
        );
        debug!(
            "No exact match for '{}', {} fuzzy suggestions",
            input,
            suggestions.len()
        );
        ValidationResult::suggested(input, suggestions)
    }

    /// Fuzzy search trimmed to `limit`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<InstrumentRecord> {
        ranker::top(self.snapshot.matcher().search(query), limit)
    }

    fn ambiguous_alias(&self, input: &str) -> Option<ValidationResult> {
        if self.config.ambiguity_policy != AmbiguityPolicy::Suggest {
            return None;
        }

        let targets = self
            .snapshot
            .normalizer()
            .aliases()
            .get(&normalize_base(input))?;

        let mut named: Vec<InstrumentRecord> = targets
            .iter()
            .filter_map(|symbol| self.snapshot.symbols().get(symbol))
            .cloned()
            .collect();
        if named.len() < 2 {
            return None;
        }

        debug!(
            "'{}' is an alias for {} instruments, not resolving",
            input,
            named.len()
        );
        named.extend(self.snapshot.matcher().search(input));
        Some(ValidationResult::ambiguous(
            input,
            ranker::top(named, self.config.max_suggestions),
        ))
    }
}
