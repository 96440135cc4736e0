use serde::{Deserialize, Serialize};

/// A tradable instrument known to the catalog.
///
/// Identity is the canonical symbol. Catalog building uppercases it, so two
/// records whose symbols differ only in case are duplicates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentRecord {
    #[serde(alias = "tradingsymbol")]
    symbol: String,

    #[serde(alias = "name", alias = "display_name")]
    display_name: String,

    #[serde(alias = "exchange")]
    venue: String,
}

impl InstrumentRecord {
    pub fn new(
        symbol: impl Into<String>,
        display_name: impl Into<String>,
        venue: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            display_name: display_name.into(),
            venue: venue.into(),
        }
    }

    /// Canonical symbol (e.g., "HDFCBANK", "M&M").
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Human-readable name (e.g., "HDFC Bank Ltd").
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Venue the instrument trades on (e.g., "NSE").
    pub fn venue(&self) -> &str {
        &self.venue
    }

    /// Copy of this record with the symbol trimmed and uppercased.
    pub(crate) fn canonicalized(&self) -> Self {
        Self {
            symbol: self.symbol.trim().to_uppercase(),
            display_name: self.display_name.trim().to_string(),
            venue: self.venue.trim().to_string(),
        }
    }
}
