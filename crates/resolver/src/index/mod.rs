//! Lookup structures derived from the catalog.
//!
//! Both indexes keep catalog order for iteration so that fuzzy results are
//! stable across calls and across processes; `HashMap`s are used only for
//! position lookup.

use std::collections::HashMap;

use log::debug;

use crate::errors::ResolverError;
use crate::models::InstrumentRecord;

/// Display-name words shorter than this are not indexed.
pub const MIN_TOKEN_LEN: usize = 3;

/// Canonical symbol -> record, one entry per catalog record.
#[derive(Clone, Debug, Default)]
pub struct SymbolIndex {
    records: Vec<InstrumentRecord>,
    positions: HashMap<String, usize>,
}

impl SymbolIndex {
    /// Exact lookup by canonical (uppercase) symbol.
    pub fn get(&self, symbol: &str) -> Option<&InstrumentRecord> {
        self.positions.get(symbol).map(|&i| &self.records[i])
    }

    /// Case-insensitive lookup, ignoring surrounding whitespace.
    pub fn find(&self, symbol: &str) -> Option<&InstrumentRecord> {
        self.get(&symbol.trim().to_uppercase())
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.positions.contains_key(symbol)
    }

    /// Records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &InstrumentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Display-name token -> symbols whose display name contains it.
#[derive(Clone, Debug, Default)]
pub struct TokenIndex {
    buckets: Vec<(String, Vec<String>)>,
    positions: HashMap<String, usize>,
}

impl TokenIndex {
    pub fn get(&self, token: &str) -> Option<&[String]> {
        self.positions
            .get(token)
            .map(|&i| self.buckets[i].1.as_slice())
    }

    /// Tokens in first-seen order with their symbol buckets.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.buckets
            .iter()
            .map(|(token, symbols)| (token.as_str(), symbols.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    fn push(&mut self, token: String, symbol: &str) {
        match self.positions.get(&token) {
            Some(&i) => {
                let bucket = &mut self.buckets[i].1;
                // Same word twice in one name ("Mahindra & Mahindra")
                if bucket.last().map(String::as_str) != Some(symbol) {
                    bucket.push(symbol.to_string());
                }
            }
            None => {
                self.positions.insert(token.clone(), self.buckets.len());
                self.buckets.push((token, vec![symbol.to_string()]));
            }
        }
    }
}

/// Uppercased whitespace-separated words of a display name, minus short ones.
pub fn tokenize(display_name: &str) -> impl Iterator<Item = String> + '_ {
    display_name
        .split_whitespace()
        .map(str::to_uppercase)
        .filter(|word| word.chars().count() >= MIN_TOKEN_LEN)
}

/// Build both indexes from catalog records.
///
/// Symbols are trimmed and uppercased. Fails on empty or whitespace-bearing
/// symbols, empty display names, and duplicate symbols; nothing is dropped
/// silently.
pub fn build(records: &[InstrumentRecord]) -> Result<(SymbolIndex, TokenIndex), ResolverError> {
    let mut symbols = SymbolIndex::default();
    let mut tokens = TokenIndex::default();

    for (position, record) in records.iter().enumerate() {
        let record = record.canonicalized();
        let symbol = record.symbol();

        if symbol.is_empty() {
            return Err(ResolverError::EmptySymbol { position });
        }
        if symbol.chars().any(char::is_whitespace) {
            return Err(ResolverError::MalformedSymbol(symbol.to_string()));
        }
        if record.display_name().is_empty() {
            return Err(ResolverError::EmptyDisplayName(symbol.to_string()));
        }
        if symbols.positions.contains_key(symbol) {
            return Err(ResolverError::DuplicateSymbol(symbol.to_string()));
        }

        for token in tokenize(record.display_name()) {
            tokens.push(token, symbol);
        }

        symbols
            .positions
            .insert(symbol.to_string(), symbols.records.len());
        symbols.records.push(record);
    }

    debug!(
        "Built symbol index with {} records and {} tokens",
        symbols.len(),
        tokens.len()
    );

    Ok((symbols, tokens))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<InstrumentRecord> {
        vec![
            InstrumentRecord::new("HDFCBANK", "HDFC Bank Ltd", "NSE"),
            InstrumentRecord::new("HDFCLIFE", "HDFC Life Insurance Company Ltd", "NSE"),
            InstrumentRecord::new("M&M", "Mahindra & Mahindra Ltd", "NSE"),
            InstrumentRecord::new("SBIN", "State Bank of India", "NSE"),
        ]
    }

    #[test]
    fn test_symbol_index_one_entry_per_record() {
        let (symbols, _) = build(&sample()).unwrap();
        assert_eq!(symbols.len(), 4);
        assert_eq!(symbols.get("M&M").unwrap().display_name(), "Mahindra & Mahindra Ltd");
        assert!(symbols.get("hdfcbank").is_none());
        assert_eq!(symbols.find(" hdfcbank ").unwrap().symbol(), "HDFCBANK");

        let order: Vec<&str> = symbols.iter().map(|r| r.symbol()).collect();
        assert_eq!(order, vec!["HDFCBANK", "HDFCLIFE", "M&M", "SBIN"]);
    }

    #[test]
    fn test_symbols_are_uppercased() {
        let (symbols, tokens) =
            build(&[InstrumentRecord::new("infy", "Infosys Ltd", "NSE")]).unwrap();
        assert!(symbols.contains("INFY"));
        assert_eq!(symbols.get("INFY").unwrap().symbol(), "INFY");
        assert_eq!(tokens.get("INFOSYS"), Some(&["INFY".to_string()][..]));
    }

    #[test]
    fn test_token_index_skips_short_words() {
        let (_, tokens) = build(&sample()).unwrap();
        assert!(tokens.get("OF").is_none());
        assert!(tokens.get("&").is_none());
        assert!(tokens.get("LTD").is_some());
        assert!(tokens.get("Ltd").is_none());
    }

    #[test]
    fn test_token_buckets_keep_catalog_order() {
        let (_, tokens) = build(&sample()).unwrap();
        assert_eq!(
            tokens.get("HDFC").unwrap(),
            &["HDFCBANK".to_string(), "HDFCLIFE".to_string()]
        );
        assert_eq!(
            tokens.get("BANK").unwrap(),
            &["HDFCBANK".to_string(), "SBIN".to_string()]
        );

        let first_tokens: Vec<&str> = tokens.iter().map(|(t, _)| t).take(3).collect();
        assert_eq!(first_tokens, vec!["HDFC", "BANK", "LTD"]);
    }

    #[test]
    fn test_repeated_word_does_not_repeat_symbol() {
        let (_, tokens) = build(&sample()).unwrap();
        assert_eq!(tokens.get("MAHINDRA").unwrap(), &["M&M".to_string()]);
    }

    #[test]
    fn test_tokens_only_reference_indexed_symbols() {
        let (symbols, tokens) = build(&sample()).unwrap();
        for (_, bucket) in tokens.iter() {
            for symbol in bucket {
                assert!(symbols.contains(symbol));
            }
        }
    }

    #[test]
    fn test_duplicate_symbol_fails() {
        let records = vec![
            InstrumentRecord::new("TCS", "Tata Consultancy Services Ltd", "NSE"),
            InstrumentRecord::new("tcs", "Duplicate", "BSE"),
        ];
        match build(&records).unwrap_err() {
            ResolverError::DuplicateSymbol(symbol) => assert_eq!(symbol, "TCS"),
            other => panic!("Expected DuplicateSymbol, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_records_fail() {
        let empty = vec![InstrumentRecord::new("  ", "Blank", "NSE")];
        assert!(matches!(
            build(&empty).unwrap_err(),
            ResolverError::EmptySymbol { position: 0 }
        ));

        let spaced = vec![InstrumentRecord::new("HDFC BANK", "HDFC Bank Ltd", "NSE")];
        assert!(matches!(
            build(&spaced).unwrap_err(),
            ResolverError::MalformedSymbol(_)
        ));

        let unnamed = vec![InstrumentRecord::new("ITC", " ", "NSE")];
        assert!(matches!(
            build(&unnamed).unwrap_err(),
            ResolverError::EmptyDisplayName(_)
        ));
    }

    #[test]
    fn test_build_is_idempotent() {
        let (a_symbols, a_tokens) = build(&sample()).unwrap();
        let (b_symbols, b_tokens) = build(&sample()).unwrap();

        let a: Vec<_> = a_symbols.iter().collect();
        let b: Vec<_> = b_symbols.iter().collect();
        assert_eq!(a, b);

        let a: Vec<_> = a_tokens.iter().collect();
        let b: Vec<_> = b_tokens.iter().collect();
        assert_eq!(a, b);
    }
}
