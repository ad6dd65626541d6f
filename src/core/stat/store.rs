use super::Counter;
use crate::base::{CounterSample, StoreError};
use crate::utils::WallClock;
use crate::{config, logging};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// CounterStore is the bounded name→counter registry. The `RwLock` guards
/// the table's shape only: shared mode for lookups and snapshots, exclusive
/// mode for insertion. It is never held across a counter's value update.
///
/// The table grows monotonically up to `max_counters` and entries are never
/// removed; callers hold `Arc<Counter>` references that stay valid for the
/// life of the store.
#[derive(Debug)]
pub struct CounterStore {
    max_counters: usize,
    max_name_len: usize,
    counters: RwLock<HashMap<String, Arc<Counter>>>,
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterStore {
    /// A store sized from the global configuration.
    pub fn new() -> Self {
        Self::with_limits(
            config::registry_max_counters(),
            config::registry_max_name_len(),
        )
    }

    /// A store with explicit bounds, both immutable for the store's life.
    pub fn with_limits(max_counters: usize, max_name_len: usize) -> Self {
        CounterStore {
            max_counters,
            max_name_len,
            counters: RwLock::new(HashMap::new()),
        }
    }

    pub fn max_counters(&self) -> usize {
        self.max_counters
    }

    pub fn max_name_len(&self) -> usize {
        self.max_name_len
    }

    pub fn len(&self) -> usize {
        self.counters.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.read().unwrap().is_empty()
    }

    fn validate_name(&self, name: &str) -> Result<(), StoreError> {
        if name.is_empty() || name.len() > self.max_name_len {
            return Err(StoreError::InvalidName {
                len: name.len(),
                max: self.max_name_len,
            });
        }
        Ok(())
    }

    /// Find the counter registered under `name` without creating it.
    pub fn lookup(&self, name: &str) -> Option<Arc<Counter>> {
        self.counters.read().unwrap().get(name).cloned()
    }

    /// Find the counter registered under `name`, creating it when absent
    /// and capacity allows.
    ///
    /// Lookup runs under the shared lock; creation re-acquires the lock in
    /// exclusive mode. The gap between the two is settled by the map's
    /// insert-if-absent: exactly one racing creator wins, and the losers
    /// get the winner's counter rather than a re-initialized one. The
    /// capacity check precedes the insert, so a loser racing against a
    /// table that just filled up is rejected even though its name exists by
    /// then.
    pub fn resolve_or_create(&self, name: &str) -> Result<Arc<Counter>, StoreError> {
        self.validate_name(name)?;
        if let Some(counter) = self.lookup(name) {
            return Ok(counter);
        }

        let mut counters = self.counters.write().unwrap();
        if counters.len() >= self.max_counters {
            logging::FREQUENT_ERROR_ONCE.call_once(|| {
                logging::warn!(
                    "[CounterStore] counter amount exceeds the threshold {}",
                    self.max_counters
                )
            });
            return Err(StoreError::CapacityExceeded {
                max: self.max_counters,
            });
        }
        Ok(counters
            .entry(name.into())
            .or_insert_with(|| Arc::new(Counter::new(name.into())))
            .clone())
    }

    /// Clone a reference to every live counter under one shared-lock
    /// acquisition. The set of names is consistent as of the snapshot
    /// instant; values read afterwards may already be newer.
    pub fn snapshot_all(&self) -> Vec<Arc<Counter>> {
        self.counters.read().unwrap().values().cloned().collect()
    }

    /// Enumerate a (name, total, rate) sample for every counter. Each
    /// counter is locked individually after the structural lock has been
    /// released; emission order is map iteration order.
    pub fn samples(&self, clock: WallClock) -> Vec<CounterSample> {
        self.snapshot_all()
            .into_iter()
            .map(|counter| {
                let (total, rate) = counter.sample(clock);
                CounterSample {
                    name: counter.name().into(),
                    total,
                    rate,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn name_bounds() {
        let store = CounterStore::with_limits(16, 50);
        assert!(store.resolve_or_create(&"a".repeat(50)).is_ok());
        assert_eq!(
            store.resolve_or_create(&"a".repeat(51)).unwrap_err(),
            StoreError::InvalidName { len: 51, max: 50 }
        );
        assert_eq!(
            store.resolve_or_create("").unwrap_err(),
            StoreError::InvalidName { len: 0, max: 50 }
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn resolve_returns_the_same_counter() {
        let store = CounterStore::with_limits(16, 50);
        let first = store.resolve_or_create("queries").unwrap();
        let second = store.resolve_or_create("queries").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn capacity_is_enforced() {
        let store = CounterStore::with_limits(3, 50);
        assert_eq!(store.max_counters(), 3);
        assert_eq!(store.max_name_len(), 50);
        for name in &["a", "b", "c"] {
            store.resolve_or_create(name).unwrap();
        }
        assert_eq!(
            store.resolve_or_create("d").unwrap_err(),
            StoreError::CapacityExceeded { max: 3 }
        );
        assert_eq!(store.len(), 3);
        // existing counters stay fully functional at capacity
        let counter = store.resolve_or_create("a").unwrap();
        assert_eq!(counter.add(WallClock::new(0, 0, 0), 2), 2);
    }

    #[test]
    fn lookup_does_not_create() {
        let store = CounterStore::with_limits(16, 50);
        assert!(store.lookup("missing").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn concurrent_creation_of_one_name() {
        let store = Arc::new(CounterStore::with_limits(16, 50));
        let mut handles = Vec::new();
        for _ in 0..32 {
            let store = store.clone();
            handles.push(std::thread::spawn(move || {
                let counter = store.resolve_or_create("raced").unwrap();
                counter.add(WallClock::new(1, 0, 0), 1)
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.len(), 1);
        let counter = store.lookup("raced").unwrap();
        assert_eq!(counter.add(WallClock::new(1, 0, 1), 0), 32);
    }

    #[test]
    fn samples_cover_every_counter() {
        let store = CounterStore::with_limits(16, 50);
        store
            .resolve_or_create("alpha")
            .unwrap()
            .add(WallClock::new(2, 0, 0), 5);
        store
            .resolve_or_create("beta")
            .unwrap()
            .add(WallClock::new(2, 0, 0), 7);

        let mut samples = store.samples(WallClock::new(2, 1, 0));
        samples.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].name, "alpha");
        assert_eq!(samples[0].total, 5);
        assert_eq!(samples[0].rate, 5);
        assert_eq!(samples[1].name, "beta");
        assert_eq!(samples[1].total, 7);
        assert_eq!(samples[1].rate, 7);
    }
}
