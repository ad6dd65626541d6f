#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, allow(unused_attributes))]

//! # mem-counters
//!
//! A shared, concurrent registry of **named rate counters** for
//! instrumenting a host process. Any number of worker threads increment or
//! read counters by name; each counter carries a cumulative total and an
//! approximate "events per trailing 60 seconds" rate derived from a
//! two-level time-bucket window (per-millisecond buckets rolled into
//! per-second buckets).
//!
//! The store is bounded: the maximum number of distinct counters and the
//! maximum name length are fixed when the store is created. Counters are
//! created on first use and never removed. Counting is best-effort
//! instrumentation: a new name arriving at a full registry is dropped with
//! a sentinel result instead of an error, and existing counters keep
//! working.
//!
//! ## Initialization
//!
//! The store must be initialized once per process before any counter
//! operation. The `api` module provides three ways to do so:
//!
//! - `init_default()`: load configuration from environment variables, using
//!   default values for anything undefined.
//! - `init_with_config(config_entity: ConfigEntity)`: use a hand-crafted
//!   `ConfigEntity`.
//! - `init_with_config_file(config_path: &mut String)`: load configuration
//!   from a YAML file.
//!
//! Accessing a counter before initialization fails fast with a
//! configuration error.
//!
//! ## Usage
//!
//! ```rust
//! use mem_counters as counters;
//!
//! counters::init_default().unwrap_or_else(|err| counters::logging::error!("{:?}", err));
//!
//! // Count an event and get the new cumulative total back.
//! let total = counters::increment("queries", 1).unwrap();
//!
//! // Read the approximate event count over the trailing minute.
//! let per_minute = counters::rate("queries").unwrap();
//!
//! // Enumerate every counter as (name, total, rate).
//! for sample in counters::list().unwrap() {
//!     println!("{}", sample);
//! }
//! ```
//!
//! ## Concurrency
//!
//! Two strictly nested lock tiers guard the store: a table-wide
//! reader/writer lock for structural changes (insertion, snapshots) and a
//! per-counter mutex held only across the bucket arithmetic. The structural
//! lock is never held across a counter's value update, and a counter's lock
//! is never taken while holding the table lock in write mode.
//!
//! Optional features:
//! - `logger_env`: use `env_logger` to initialize logging.
//! - `logger_log4rs`: use `log4rs` to initialize logging.

/// Topmost APIs: one-time store initialization and the caller surface.
pub mod api;
/// Core implementations: the bounded counter table, the per-counter
/// rolling-window statistics, the configuration stack and the domain
/// error/sample types.
pub mod core;
/// Adapters for different logging crates.
pub mod logging;
// Utility functions: wall-clock access and test helpers.
pub mod utils;

// re-export preludes
pub use crate::core::*;
pub use api::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
