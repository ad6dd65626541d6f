use super::global_store;
use crate::base::{CounterSample, StoreError};
use crate::utils::WallClock;
use crate::Result;

/// `increment` adds `by` events to the named counter and returns the new
/// cumulative total. The counter is created on first use. When the
/// registry is full a new name is dropped and 0 is returned; existing
/// counters keep counting.
pub fn increment(name: &str, by: u64) -> Result<u64> {
    let store = global_store()?;
    match store.resolve_or_create(name) {
        Ok(counter) => Ok(counter.add(WallClock::now(), by)),
        Err(StoreError::CapacityExceeded { .. }) => Ok(0),
        Err(err) => Err(err.into()),
    }
}

/// `rate` returns the named counter's approximate event count over the
/// trailing 60 seconds, without incrementing it. The counter is created on
/// first use; reading advances the bucket bookkeeping, so the rate decays
/// while the counter sits idle.
pub fn rate(name: &str) -> Result<u32> {
    let store = global_store()?;
    match store.resolve_or_create(name) {
        Ok(counter) => Ok(counter.rate(WallClock::now())),
        Err(StoreError::CapacityExceeded { .. }) => Ok(0),
        Err(err) => Err(err.into()),
    }
}

/// `list` enumerates a (name, total, rate) sample for every registered
/// counter. Emission order is unspecified.
pub fn list() -> Result<Vec<CounterSample>> {
    let store = global_store()?;
    Ok(store.samples(WallClock::now()))
}
