//! Immutable catalog snapshot.

use log::{info, warn};

use crate::catalog::ReferenceData;
use crate::errors::ResolverError;
use crate::index::{self, SymbolIndex, TokenIndex};
use crate::matcher::FuzzyMatcher;
use crate::normalizer::Normalizer;

/// Indexes and normalization tables built from one catalog version.
///
/// A snapshot is never mutated after [`Snapshot::build`] returns; reloading
/// the engine builds a new one.
pub struct Snapshot {
    version: String,
    symbols: SymbolIndex,
    tokens: TokenIndex,
    normalizer: Normalizer,
}

impl Snapshot {
    pub fn build(data: &ReferenceData) -> Result<Self, ResolverError> {
        let (symbols, tokens) = index::build(&data.instruments)?;
        let normalizer = Normalizer::from_reference(data)?;

        for (alias, targets) in normalizer.aliases().iter() {
            for target in targets.iter().filter(|t| !symbols.contains(t.as_str())) {
                warn!(
                    "Alias '{}' points at '{}' which is not in catalog '{}'",
                    alias, target, data.version
                );
            }
        }

        info!(
            "Built catalog snapshot '{}': {} instruments, {} tokens, {} aliases",
            data.version,
            symbols.len(),
            tokens.len(),
            normalizer.aliases().len()
        );

        Ok(Self {
            version: data.version.clone(),
            symbols,
            tokens,
            normalizer,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn symbols(&self) -> &SymbolIndex {
        &self.symbols
    }

    pub fn tokens(&self) -> &TokenIndex {
        &self.tokens
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn matcher(&self) -> FuzzyMatcher<'_> {
        FuzzyMatcher::new(&self.symbols, &self.tokens)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
