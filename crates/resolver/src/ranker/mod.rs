//! Ordering, truncation and display of candidate lists.
//!
//! No relevance scoring happens here. The matcher's first-seen order is the
//! ranking; this module only keeps that order stable and trims it.

use crate::models::InstrumentRecord;

/// Suggestions shown by order-placement front ends.
pub const ORDER_SUGGESTION_LIMIT: usize = 5;

/// Suggestions shown by search front ends.
pub const SEARCH_SUGGESTION_LIMIT: usize = 10;

/// Order records for presentation, dropping repeated symbols.
pub fn rank(records: Vec<InstrumentRecord>) -> Vec<InstrumentRecord> {
    let mut ranked: Vec<InstrumentRecord> = Vec::with_capacity(records.len());
    for record in records {
        if !ranked.iter().any(|r| r.symbol() == record.symbol()) {
            ranked.push(record);
        }
    }
    ranked
}

/// First `limit` records of the ranked list.
pub fn top(records: Vec<InstrumentRecord>, limit: usize) -> Vec<InstrumentRecord> {
    let mut ranked = rank(records);
    ranked.truncate(limit);
    ranked
}

/// Numbered `symbol - name` list for display.
pub fn format_suggestions(records: &[InstrumentRecord]) -> String {
    if records.is_empty() {
        return "No matching instruments found.".to_string();
    }

    let mut formatted = String::from("Available options:");
    for (index, record) in records.iter().enumerate() {
        formatted.push_str(&format!(
            "\n{}. {} - {}",
            index + 1,
            record.symbol(),
            record.display_name()
        ));
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<InstrumentRecord> {
        vec![
            InstrumentRecord::new("TATASTEEL", "Tata Steel Ltd", "NSE"),
            InstrumentRecord::new("TATAMOTORS", "Tata Motors Ltd", "NSE"),
            InstrumentRecord::new("TATASTEEL", "Tata Steel Ltd", "NSE"),
            InstrumentRecord::new("TCS", "Tata Consultancy Services Ltd", "NSE"),
        ]
    }

    #[test]
    fn test_rank_keeps_first_seen_order() {
        let ranked = rank(records());
        let symbols: Vec<&str> = ranked.iter().map(|r| r.symbol()).collect();
        assert_eq!(symbols, vec!["TATASTEEL", "TATAMOTORS", "TCS"]);
    }

    #[test]
    fn test_top_truncates() {
        assert_eq!(top(records(), 2).len(), 2);
        assert_eq!(top(records(), 50).len(), 3);
        assert!(top(records(), 0).is_empty());
    }

    #[test]
    fn test_format_suggestions() {
        let formatted = format_suggestions(&rank(records()));
        assert_eq!(
            formatted,
            "Available options:\n\
             1. TATASTEEL - Tata Steel Ltd\n\
             2. TATAMOTORS - Tata Motors Ltd\n\
             3. TCS - Tata Consultancy Services Ltd"
        );
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_suggestions(&[]), "No matching instruments found.");
    }
}
