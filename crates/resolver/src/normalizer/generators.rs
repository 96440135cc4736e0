//! Candidate generators applied in order by the [`Normalizer`].
//!
//! [`Normalizer`]: super::Normalizer

use std::fmt;
use std::sync::Arc;

use super::tables::AliasTable;

/// Which stage of the pipeline produced a candidate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CandidateSource {
    /// The normalized input itself.
    Input,
    /// An alias table expansion.
    Alias,
    /// A suffix added to or stripped from the input.
    Suffix,
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Alias => write!(f, "alias"),
            Self::Suffix => write!(f, "suffix"),
        }
    }
}

/// A symbol to probe against the catalog, tagged with its origin.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    pub symbol: String,
    pub source: CandidateSource,
}

/// One stage of the candidate pipeline.
///
/// Generators see only the normalized base form and return candidates in the
/// order they should be probed. They never consult the catalog.
pub trait CandidateGenerator: Send + Sync {
    fn source(&self) -> CandidateSource;

    fn generate(&self, base: &str) -> Vec<String>;
}

/// Seeds the pipeline with the base form.
pub struct InputGenerator;

impl CandidateGenerator for InputGenerator {
    fn source(&self) -> CandidateSource {
        CandidateSource::Input
    }

    fn generate(&self, base: &str) -> Vec<String> {
        vec![base.to_string()]
    }
}

/// Expands a known colloquial name to its mapped symbols.
pub struct AliasGenerator {
    aliases: Arc<AliasTable>,
}

impl AliasGenerator {
    pub fn new(aliases: Arc<AliasTable>) -> Self {
        Self { aliases }
    }
}

impl CandidateGenerator for AliasGenerator {
    fn source(&self) -> CandidateSource {
        CandidateSource::Alias
    }

    fn generate(&self, base: &str) -> Vec<String> {
        self.aliases
            .get(base)
            .map(|targets| targets.to_vec())
            .unwrap_or_default()
    }
}

/// Strips a trailing suffix when present, appends it otherwise.
pub struct SuffixGenerator {
    suffixes: Vec<String>,
}

impl SuffixGenerator {
    pub fn new(suffixes: Vec<String>) -> Self {
        Self { suffixes }
    }
}

impl CandidateGenerator for SuffixGenerator {
    fn source(&self) -> CandidateSource {
        CandidateSource::Suffix
    }

    fn generate(&self, base: &str) -> Vec<String> {
        self.suffixes
            .iter()
            .map(|suffix| match base.strip_suffix(suffix.as_str()) {
                Some(stripped) => stripped.to_string(),
                None => format!("{}{}", base, suffix),
            })
            .collect()
    }
}
