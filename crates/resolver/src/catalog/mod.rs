//! Reference data supplied to the engine.
//!
//! The instrument list, alias table and suffix list are data, not code. They
//! are loaded from a JSON document, either a caller-provided file or the
//! builtin `defaults.json` compiled into the crate and parsed once via
//! `lazy_static`.
//!
//! ```json
//! {
//!   "version": "nse-large-caps-1",
//!   "instruments": [{ "symbol": "HDFCBANK", "displayName": "HDFC Bank Ltd", "venue": "NSE" }],
//!   "aliases": { "HDFC": ["HDFCBANK", "HDFCLIFE"] },
//!   "suffixes": ["BANK", "LTD", "IND"]
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::errors::ResolverError;
use crate::models::InstrumentRecord;

/// One version of the reference dataset.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Label identifying this dataset version (logged on build and reload).
    #[serde(default)]
    pub version: String,

    /// Instruments in catalog order.
    pub instruments: Vec<InstrumentRecord>,

    /// Colloquial name -> candidate canonical symbols, in preference order.
    #[serde(default)]
    pub aliases: HashMap<String, Vec<String>>,

    /// Trailing qualifiers tried in order (e.g., "BANK", "LTD").
    #[serde(default)]
    pub suffixes: Vec<String>,
}

lazy_static! {
    static ref BUILTIN: ReferenceData = ReferenceData::from_json_str(include_str!("defaults.json"))
        .expect("defaults.json must be valid");
}

impl ReferenceData {
    pub fn new(version: impl Into<String>, instruments: Vec<InstrumentRecord>) -> Self {
        Self {
            version: version.into(),
            instruments,
            aliases: HashMap::new(),
            suffixes: Vec::new(),
        }
    }

    pub fn with_alias<I, S>(mut self, alias: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases
            .insert(alias.into(), targets.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// The dataset compiled into the crate.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ResolverError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ResolverError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ResolverError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}
