use serde::{Deserialize, Serialize};

use crate::ranker::SEARCH_SUGGESTION_LIMIT;
use crate::resolver::AmbiguityPolicy;

/// Behavioral settings for a [`SymbolEngine`](super::SymbolEngine).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Cap on suggestions returned by `validate`, and the default
    /// `search_stocks` limit.
    pub max_suggestions: usize,
    /// Handling of aliases that name several instruments.
    pub ambiguity_policy: AmbiguityPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_suggestions: SEARCH_SUGGESTION_LIMIT,
            ambiguity_policy: AmbiguityPolicy::Suggest,
        }
    }
}
