//! Substring-based fuzzy matching over the catalog indexes.
//!
//! Two passes, unioned in order:
//!
//! 1. **Token pass** - every display-name token that contains the term, or
//!    is contained in it, contributes its whole symbol bucket.
//! 2. **Symbol pass** - every symbol that contains the term, or is contained
//!    in it.
//!
//! There is no scoring: results come back in first-seen order, which is
//! deterministic for a given catalog.

use std::collections::HashSet;

use crate::index::{SymbolIndex, TokenIndex};
use crate::models::InstrumentRecord;

/// Read-only view over one snapshot's indexes.
#[derive(Clone, Copy)]
pub struct FuzzyMatcher<'a> {
    symbols: &'a SymbolIndex,
    tokens: &'a TokenIndex,
}

impl<'a> FuzzyMatcher<'a> {
    pub fn new(symbols: &'a SymbolIndex, tokens: &'a TokenIndex) -> Self {
        Self { symbols, tokens }
    }

    /// Records loosely matching `term`, de-duplicated by symbol.
    ///
    /// A blank term matches nothing (every string contains the empty string).
    pub fn search(&self, term: &str) -> Vec<InstrumentRecord> {
        if term.trim().is_empty() {
            return Vec::new();
        }

        let term = term.to_uppercase();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut matches = Vec::new();

        for (token, bucket) in self.tokens.iter() {
            if !overlaps(token, &term) {
                continue;
            }
            for symbol in bucket {
                if let Some(record) = self.symbols.get(symbol) {
                    if seen.insert(record.symbol()) {
                        matches.push(record.clone());
                    }
                }
            }
        }

        for record in self.symbols.iter() {
            if overlaps(record.symbol(), &term) && seen.insert(record.symbol()) {
                matches.push(record.clone());
            }
        }

        matches
    }
}

fn overlaps(candidate: &str, term: &str) -> bool {
    candidate.contains(term) || term.contains(candidate)
}
