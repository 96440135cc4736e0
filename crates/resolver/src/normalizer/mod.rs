//! Text-to-candidate-symbol normalization.
//!
//! The normalizer turns free-form input into an ordered list of symbols to
//! probe. Order matters: the first candidate found in the catalog wins, so
//! the pipeline is fixed as
//!
//! ```text
//! input ──► base (uppercase, [A-Z0-9] only)
//!             │
//!             ├─ 1. InputGenerator   base itself
//!             ├─ 2. AliasGenerator   alias table expansion, table order
//!             └─ 3. SuffixGenerator  per suffix: strip if present, else append
//!             │
//!             ▼
//!        de-duplicated, first occurrence kept
//! ```
//!
//! The normalizer only knows the alias and suffix tables, never the catalog.

mod generators;
mod tables;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

pub use generators::{
    AliasGenerator, Candidate, CandidateGenerator, CandidateSource, InputGenerator,
    SuffixGenerator,
};
pub use tables::AliasTable;

use crate::catalog::ReferenceData;
use crate::errors::ResolverError;

/// Uppercase the input and keep only ASCII letters and digits.
pub fn normalize_base(input: &str) -> String {
    input
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect()
}

/// Ordered candidate pipeline.
pub struct Normalizer {
    aliases: Arc<AliasTable>,
    generators: Vec<Box<dyn CandidateGenerator>>,
}

impl Normalizer {
    /// Build the default pipeline (input, alias, suffix) from raw tables.
    pub fn new(
        aliases: &HashMap<String, Vec<String>>,
        suffixes: &[String],
    ) -> Result<Self, ResolverError> {
        let aliases = Arc::new(AliasTable::new(aliases)?);
        let suffixes = tables::suffix_list(suffixes)?;

        Ok(Self {
            generators: vec![
                Box::new(InputGenerator),
                Box::new(AliasGenerator::new(Arc::clone(&aliases))),
                Box::new(SuffixGenerator::new(suffixes)),
            ],
            aliases,
        })
    }

    pub fn from_reference(data: &ReferenceData) -> Result<Self, ResolverError> {
        Self::new(&data.aliases, &data.suffixes)
    }

    /// Append a generator after the built-in stages.
    pub fn add_generator(&mut self, generator: Box<dyn CandidateGenerator>) {
        self.generators.push(generator);
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Tagged candidates for `input`, in probe order.
    ///
    /// Returns nothing when the input has no letters or digits.
    pub fn candidates(&self, input: &str) -> Vec<Candidate> {
        let base = normalize_base(input);
        if base.is_empty() {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for generator in &self.generators {
            for symbol in generator.generate(&base) {
                if symbol.is_empty() || !seen.insert(symbol.clone()) {
                    continue;
                }
                candidates.push(Candidate {
                    symbol,
                    source: generator.source(),
                });
            }
        }

        candidates
    }

    /// Candidate symbols for `input`, in probe order.
    pub fn normalize_candidates(&self, input: &str) -> Vec<String> {
        self.candidates(input)
            .into_iter()
            .map(|candidate| candidate.symbol)
            .collect()
    }
}
