//! hackair-core
//!
//! Core types, traits, and utilities shared across the hackair adapter.
//!
//! - `types`: re-exports of the shared DTOs from `hackair-types`.
//! - `range` / `measurement`: time windows, partitions, and observations.
//! - `time`: timestamp parsing and epoch conversion.
//! - `connector`: the `MeasurementProvider` trait implemented by remote clients.
//! - `timeseries`: splitting a window into bounded sub-ranges and gathering
//!   the per-range results back into one ascending series.
#![warn(missing_docs)]

/// Provider trait for the remote measurement API.
pub mod connector;
/// Observations and raw remote readings.
pub mod measurement;
/// Time windows and partitions.
pub mod range;
/// Timestamp parsing and conversion.
pub mod time;
/// Partitioning, merging, and concurrent gathering of series.
pub mod timeseries;
pub mod types;

pub use connector::MeasurementProvider;
pub use measurement::{Measurement, PartialResult, Reading};
pub use range::{Partition, TimeRange};
pub use timeseries::gather::fetch_partitioned;
pub use timeseries::merge::merge_partials;
pub use timeseries::split::{check_split_config, split_range};
pub use types::*;
