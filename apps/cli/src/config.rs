use std::env;
use std::path::PathBuf;

use symbolguard_resolver::{AmbiguityPolicy, EngineConfig, SEARCH_SUGGESTION_LIMIT};

use crate::error::CliError;

/// Runtime settings read from `SG_*` environment variables.
///
/// Command-line flags take precedence; see [`Config::apply_overrides`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub max_suggestions: usize,
    pub ambiguity_policy: AmbiguityPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            max_suggestions: SEARCH_SUGGESTION_LIMIT,
            ambiguity_policy: AmbiguityPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let mut config = Self::default();

        if let Some(path) = lookup("SG_CATALOG_PATH").filter(|v| !v.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(raw) = lookup("SG_MAX_SUGGESTIONS") {
            config.max_suggestions = parse_max_suggestions(&raw)?;
        }
        if let Some(raw) = lookup("SG_AMBIGUITY_POLICY") {
            config.ambiguity_policy = raw.parse().map_err(CliError::Config)?;
        }

        Ok(config)
    }

    pub fn apply_overrides(
        mut self,
        catalog: Option<PathBuf>,
        max_suggestions: Option<usize>,
        ambiguity_policy: Option<AmbiguityPolicy>,
    ) -> Result<Self, CliError> {
        if let Some(path) = catalog {
            self.catalog_path = Some(path);
        }
        if let Some(max) = max_suggestions {
            if max == 0 {
                return Err(CliError::Config(
                    "--max-suggestions must be greater than zero".to_string(),
                ));
            }
            self.max_suggestions = max;
        }
        if let Some(policy) = ambiguity_policy {
            self.ambiguity_policy = policy;
        }
        Ok(self)
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            max_suggestions: self.max_suggestions,
            ambiguity_policy: self.ambiguity_policy,
        }
    }
}

fn parse_max_suggestions(raw: &str) -> Result<usize, CliError> {
    match raw.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(CliError::Config(format!(
            "SG_MAX_SUGGESTIONS must be a positive integer, got '{}'",
            raw
        ))),
        Ok(n) => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.engine_config(), EngineConfig::default());
    }

    #[test]
    fn test_reads_env_values() {
        let config = Config::from_lookup(lookup(&[
            ("SG_CATALOG_PATH", "/data/catalog.json"),
            ("SG_MAX_SUGGESTIONS", "5"),
            ("SG_AMBIGUITY_POLICY", "first-candidate"),
        ]))
        .unwrap();

        assert_eq!(config.catalog_path, Some(PathBuf::from("/data/catalog.json")));
        assert_eq!(config.max_suggestions, 5);
        assert_eq!(config.ambiguity_policy, AmbiguityPolicy::FirstCandidate);
    }

    #[test]
    fn test_invalid_env_values_are_config_errors() {
        for (key, value) in [
            ("SG_MAX_SUGGESTIONS", "0"),
            ("SG_MAX_SUGGESTIONS", "many"),
            ("SG_AMBIGUITY_POLICY", "random"),
        ] {
            let err = Config::from_lookup(lookup(&[(key, value)])).unwrap_err();
            assert_eq!(err.exit_code(), 2, "{}={}", key, value);
        }
    }

    #[test]
    fn test_flags_override_env() {
        let config = Config::from_lookup(lookup(&[("SG_MAX_SUGGESTIONS", "3")]))
            .unwrap()
            .apply_overrides(
                Some(PathBuf::from("custom.json")),
                Some(7),
                Some(AmbiguityPolicy::FirstCandidate),
            )
            .unwrap();

        assert_eq!(config.catalog_path, Some(PathBuf::from("custom.json")));
        assert_eq!(config.max_suggestions, 7);
        assert_eq!(config.ambiguity_policy, AmbiguityPolicy::FirstCandidate);

        assert!(Config::default()
            .apply_overrides(None, Some(0), None)
            .is_err());
    }
}
