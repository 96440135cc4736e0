//! The resolution engine: a swappable catalog snapshot plus configuration.
//!
//! Every call clones the current `Arc<Snapshot>` under a short read lock and
//! then works on that snapshot alone, so a concurrent [`SymbolEngine::reload`]
//! is never observed half-built. Reload builds the new snapshot first and
//! swaps it in under the write lock; a failed build keeps the old one.

mod config;

use std::path::Path;
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{info, warn};

pub use config::EngineConfig;

use crate::catalog::ReferenceData;
use crate::errors::ResolverError;
use crate::models::{InstrumentRecord, ValidationResult};
use crate::resolver::{Resolver, Snapshot};

/// Symbol resolution engine.
///
/// Construct one explicitly and share it by reference (or `Arc`); there is no
/// process-wide instance.
pub struct SymbolEngine {
    snapshot: RwLock<Arc<Snapshot>>,
    reload_lock: Mutex<()>,
    config: EngineConfig,
}

impl SymbolEngine {
    /// Build an engine, failing on malformed reference data or a zero
    /// suggestion cap.
    pub fn new(data: &ReferenceData, config: EngineConfig) -> Result<Self, ResolverError> {
        // A zero cap would turn every suggestion list into a no-match.
        if config.max_suggestions == 0 {
            return Err(ResolverError::ZeroSuggestionLimit);
        }
        let snapshot = Snapshot::build(data)?;
        Ok(Self {
            snapshot: RwLock::new(Arc::new(snapshot)),
            reload_lock: Mutex::new(()),
            config,
        })
    }

    /// Engine over the builtin dataset with default settings.
    pub fn with_builtin() -> Result<Self, ResolverError> {
        Self::new(&ReferenceData::builtin(), EngineConfig::default())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The snapshot current at the time of the call.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.read_snapshot())
    }

    /// Validate user input against the current catalog.
    pub fn validate(&self, input: &str) -> ValidationResult {
        let snapshot = self.snapshot();
        Resolver::new(&snapshot, &self.config).validate(input)
    }

    /// Fuzzy search capped at the configured suggestion limit.
    pub fn search_stocks(&self, query: &str) -> Vec<InstrumentRecord> {
        self.search_stocks_with_limit(query, self.config.max_suggestions)
    }

    pub fn search_stocks_with_limit(&self, query: &str, limit: usize) -> Vec<InstrumentRecord> {
        let snapshot = self.snapshot();
        Resolver::new(&snapshot, &self.config).search(query, limit)
    }

    /// Case-insensitive exact catalog membership.
    pub fn is_valid_symbol(&self, symbol: &str) -> bool {
        self.snapshot().symbols().find(symbol).is_some()
    }

    /// Record for an exact (case-insensitive) symbol.
    pub fn instrument(&self, symbol: &str) -> Option<InstrumentRecord> {
        self.snapshot().symbols().find(symbol).cloned()
    }

    pub fn catalog_version(&self) -> String {
        self.snapshot().version().to_string()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Replace the catalog wholesale.
    ///
    /// Reloads are serialized. On error the current snapshot stays live.
    pub fn reload(&self, data: &ReferenceData) -> Result<(), ResolverError> {
        let _guard = self.reload_lock.lock().unwrap_or_else(|poisoned| {
            warn!("Reload mutex was poisoned, recovering");
            poisoned.into_inner()
        });

        let next = Arc::new(Snapshot::build(data)?);
        let previous = {
            let mut current = self.write_snapshot();
            std::mem::replace(&mut *current, next)
        };

        info!(
            "Reloaded catalog '{}' -> '{}'",
            previous.version(),
            data.version
        );
        Ok(())
    }

    pub fn reload_from_path(&self, path: impl AsRef<Path>) -> Result<(), ResolverError> {
        self.reload(&ReferenceData::from_path(path)?)
    }

    // The guarded value is only ever replaced whole, so a poisoned lock
    // still holds a complete snapshot.
    fn read_snapshot(&self) -> RwLockReadGuard<'_, Arc<Snapshot>> {
        self.snapshot.read().unwrap_or_else(|poisoned| {
            warn!("Snapshot lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write_snapshot(&self) -> RwLockWriteGuard<'_, Arc<Snapshot>> {
        self.snapshot.write().unwrap_or_else(|poisoned| {
            warn!("Snapshot lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}
