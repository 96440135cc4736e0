use serde::Serialize;

use super::instrument::InstrumentRecord;

/// Verdict for a single `validate` call.
///
/// `is_valid == true` always comes with `validated_symbol` set and exactly
/// one suggestion: the resolved record. Callers must submit
/// `validated_symbol` downstream, never the raw user input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validated_symbol: Option<String>,
    pub suggestions: Vec<InstrumentRecord>,
    pub message: String,
}

/// Business classification of a [`ValidationResult`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolutionKind {
    /// Input identified exactly one instrument.
    Resolved,
    /// Input did not resolve but plausible instruments were found.
    Ambiguous,
    /// Input matched nothing.
    NoMatch,
}

impl ValidationResult {
    pub fn resolved(record: InstrumentRecord) -> Self {
        Self {
            is_valid: true,
            validated_symbol: Some(record.symbol().to_string()),
            message: format!("Found: {} - {}", record.symbol(), record.display_name()),
            suggestions: vec![record],
        }
    }

    /// Fuzzy suggestions for input that had no exact match.
    pub fn suggested(input: &str, suggestions: Vec<InstrumentRecord>) -> Self {
        if suggestions.is_empty() {
            return Self::no_match(input);
        }
        Self {
            is_valid: false,
            validated_symbol: None,
            suggestions,
            message: format!("\"{}\" not found. Here are some suggestions:", input),
        }
    }

    /// Input named several instruments at once (e.g., a brand alias).
    pub fn ambiguous(input: &str, suggestions: Vec<InstrumentRecord>) -> Self {
        if suggestions.is_empty() {
            return Self::no_match(input);
        }
        Self {
            is_valid: false,
            validated_symbol: None,
            suggestions,
            message: format!(
                "\"{}\" matches multiple instruments. Please choose one of the following:",
                input
            ),
        }
    }

    pub fn no_match(input: &str) -> Self {
        Self {
            is_valid: false,
            validated_symbol: None,
            suggestions: Vec::new(),
            message: format!(
                "No instruments found matching \"{}\". Please check the symbol and try again.",
                input
            ),
        }
    }

    pub fn kind(&self) -> ResolutionKind {
        if self.is_valid {
            ResolutionKind::Resolved
        } else if self.suggestions.is_empty() {
            ResolutionKind::NoMatch
        } else {
            ResolutionKind::Ambiguous
        }
    }

    /// The resolved record, if any.
    pub fn record(&self) -> Option<&InstrumentRecord> {
        if self.is_valid {
            self.suggestions.first()
        } else {
            None
        }
    }
}
