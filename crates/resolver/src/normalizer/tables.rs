//! Alias and suffix tables, validated when a snapshot is built.

use std::collections::HashMap;

use crate::errors::ResolverError;

use super::normalize_base;

/// Colloquial name -> canonical symbols, in preference order.
///
/// Keys are stored in normalized form (uppercase alphanumeric), the same
/// form [`normalize_base`] produces from user input.
#[derive(Clone, Debug, Default)]
pub struct AliasTable {
    entries: HashMap<String, Vec<String>>,
}

impl AliasTable {
    pub fn new(raw: &HashMap<String, Vec<String>>) -> Result<Self, ResolverError> {
        let mut entries = HashMap::with_capacity(raw.len());

        for (key, targets) in raw {
            let normalized = normalize_base(key);
            if normalized.is_empty() || normalized != key.trim().to_uppercase() {
                return Err(ResolverError::MalformedAlias(key.clone()));
            }

            let targets: Vec<String> = targets
                .iter()
                .map(|t| t.trim().to_uppercase())
                .filter(|t| !t.is_empty())
                .collect();
            if targets.is_empty() {
                return Err(ResolverError::EmptyAliasTargets(key.clone()));
            }

            if entries.insert(normalized, targets).is_some() {
                return Err(ResolverError::MalformedAlias(key.clone()));
            }
        }

        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, targets)| (key.as_str(), targets.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validate and uppercase the suffix list, keeping its order.
pub fn suffix_list(raw: &[String]) -> Result<Vec<String>, ResolverError> {
    raw.iter()
        .map(|suffix| {
            let upper = suffix.trim().to_uppercase();
            if upper.is_empty() || normalize_base(&upper) != upper {
                Err(ResolverError::MalformedSuffix(suffix.clone()))
            } else {
                Ok(upper)
            }
        })
        .collect()
}
