use std::error::Error as StdError;
use std::fmt;

/// StoreError enumerates the caller-visible failure modes of the counter
/// store. `CapacityExceeded` is mapped to a sentinel result at the API
/// surface; the other variants surface as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// The counter name is empty or exceeds the configured length bound.
    InvalidName { len: usize, max: usize },
    /// A counter was accessed before the one-time store initialization ran.
    NotInitialized,
    /// The registry already holds the configured maximum number of counters.
    CapacityExceeded { max: usize },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidName { len, max } => write!(
                f,
                "the name of the counter must be between 1 and {} bytes in length, got {}",
                max, len
            ),
            StoreError::NotInitialized => write!(
                f,
                "the counter store is not initialized! did you remember to call `init_default`, `init_with_config` or `init_with_config_file`?"
            ),
            StoreError::CapacityExceeded { max } => {
                write!(f, "the registry already holds the maximum of {} counters", max)
            }
        }
    }
}

impl StdError for StoreError {}
