//! Concurrent, load-once cache of tables

// standard library
use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

// external crates
use dashmap::DashMap;
use log::{debug, info, warn};

// crate modules
use crate::config::{Config, FailurePolicy};
use crate::element::Element;
use crate::error::{Error, Result};
use crate::loader::{TableLoader, TableSource};
use crate::particle::Particle;
use crate::table::CrossSectionTable;

type Key = (Particle, Element);
type Slot = Arc<OnceLock<Result<Arc<CrossSectionTable>>>>;

/// Thread-safe cache of tables keyed on particle type and element
///
/// Each key has its own slot, so a table is read at most once no matter how
/// many threads ask for it at the same time. Callers asking for a key that is
/// mid-load wait for that load and then share the result. Loads of different
/// keys never wait on each other, since the file is read outside of any map
/// lock.
///
/// A failed load is handled according to the [FailurePolicy]:
///
/// - `Sticky` keeps the error and hands it to every later caller
/// - `Retry` forgets the error so the next caller loads again
///
/// Successfully loaded tables are never replaced or removed.
///
/// ```rust, no_run
/// # use xstools_attenuation::{CrossSectionStore, Element, FailurePolicy, Particle, TableLoader};
/// let store = CrossSectionStore::new(TableLoader::new("./data"), FailurePolicy::Sticky);
/// let lead = Element::from_z(82).unwrap();
///
/// let table = store.load_if_absent(Particle::Photon, lead).unwrap();
/// assert!(!table.is_empty());
/// assert!(store.contains(Particle::Photon, lead));
/// assert_eq!(store.count(), 1);
/// ```
#[derive(Debug)]
pub struct CrossSectionStore {
    source: Box<dyn TableSource>,
    policy: FailurePolicy,
    slots: DashMap<Key, Slot>,
}

impl CrossSectionStore {
    /// Empty cache reading tables from `source`
    pub fn new<S: TableSource + 'static>(source: S, policy: FailurePolicy) -> Self {
        Self {
            source: Box::new(source),
            policy,
            slots: DashMap::new(),
        }
    }

    /// Empty cache reading files as described by a [Config]
    pub fn from_config(config: &Config) -> Self {
        Self::new(TableLoader::from_config(config), config.failure_policy)
    }

    /// Policy applied to failed loads
    pub fn failure_policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Table for the key, loading it first if this is the first request
    ///
    /// Concurrent callers for the same key block until the single load
    /// completes and all receive the same `Arc`.
    pub fn load_if_absent(
        &self,
        particle: Particle,
        element: Element,
    ) -> Result<Arc<CrossSectionTable>> {
        let key = (particle, element);
        let slot = self.slot(key);

        let mut loaded_here = false;
        let result = slot
            .get_or_init(|| {
                loaded_here = true;
                debug!("Cache miss for {particle} {element}");
                self.source.load(particle, element).map(Arc::new)
            })
            .clone();

        match &result {
            Ok(table) if loaded_here => {
                info!(
                    "Loaded {particle} table for {element} ({} rows)",
                    table.len()
                );
            }
            Err(e) if loaded_here => match self.policy {
                FailurePolicy::Sticky => {
                    warn!("Failed to load {particle} table for {element}, keeping error: {e}");
                }
                FailurePolicy::Retry => {
                    warn!("Failed to load {particle} table for {element}, will retry: {e}");
                    // only evict the slot this call filled
                    self.slots.remove_if(&key, |_, s| Arc::ptr_eq(s, &slot));
                }
            },
            _ => (),
        }

        result
    }

    /// Table for the key, only if it has already been loaded
    ///
    /// Never reads from disk. A sticky failure is returned as the stored error,
    /// and a key that is absent or still loading gives
    /// [Error::NotFoundInCache].
    pub fn get(&self, particle: Particle, element: Element) -> Result<Arc<CrossSectionTable>> {
        let not_found = || Error::NotFoundInCache { particle, element };

        let slot = self
            .slots
            .get(&(particle, element))
            .map(|s| Arc::clone(s.value()))
            .ok_or_else(not_found)?;

        slot.get().cloned().unwrap_or_else(|| Err(not_found()))
    }

    /// True if a table for the key has been loaded successfully
    pub fn contains(&self, particle: Particle, element: Element) -> bool {
        self.slots
            .get(&(particle, element))
            .is_some_and(|s| matches!(s.value().get(), Some(Ok(_))))
    }

    /// Load every key in order
    ///
    /// Stops at the first failure and returns it. Tables loaded before the
    /// failure stay in the cache.
    pub fn add_multiple(&self, keys: &[(Particle, Element)]) -> Result<()> {
        debug!("Loading {} tables", keys.len());
        for (particle, element) in keys {
            self.load_if_absent(*particle, *element)?;
        }
        Ok(())
    }

    /// Number of successfully loaded tables
    pub fn count(&self) -> usize {
        self.slots
            .iter()
            .filter(|entry| matches!(entry.value().get(), Some(Ok(_))))
            .count()
    }

    /// Copy of every successfully loaded table, ordered by key
    ///
    /// The tables themselves are shared, not copied.
    pub fn snapshot(&self) -> BTreeMap<Key, Arc<CrossSectionTable>> {
        self.slots
            .iter()
            .filter_map(|entry| match entry.value().get() {
                Some(Ok(table)) => Some((*entry.key(), Arc::clone(table))),
                _ => None,
            })
            .collect()
    }

    /// Slot for a key, inserted empty if absent
    ///
    /// The map guard is dropped before returning so that loading happens
    /// outside of the shard lock.
    fn slot(&self, key: Key) -> Slot {
        if let Some(slot) = self.slots.get(&key) {
            return Arc::clone(slot.value());
        }
        Arc::clone(self.slots.entry(key).or_default().value())
    }
}
