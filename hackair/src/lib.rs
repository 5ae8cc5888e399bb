//! hackair answers air-quality questions for one geographic area.
//!
//! Overview
//! - Delegates raw reads to a single [`MeasurementProvider`] (the HTTP client in
//!   `hackair-client`, or a mock from `hackair-mock`).
//! - Splits long pollutant windows into bounded sub-ranges, fetches them
//!   concurrently, and merges the slices back into one ascending series.
//! - Derives the set of reporting sensors and their count for a window.
//!
//! Key behaviors and trade-offs
//! - Partitioning caps each remote call at `max_span` and each query at
//!   `max_ranges` calls; oversized windows are rejected before any I/O.
//! - An embedded remote status error empties only the affected sub-range, while
//!   transport failures and malformed payloads fail the whole query.
//! - An optional request deadline bounds the whole fan-out; dropping the returned
//!   future abandons in-flight calls.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use hackair::{ClientConfig, Hackair, SeriesKind, parse_window};
//! use hackair_client::HackairClient;
//!
//! let client = HackairClient::new(&ClientConfig::new("-0.5,51.2|0.3,51.7"))?;
//! let hackair = Hackair::builder()
//!     .with_provider(Arc::new(client))
//!     .request_timeout(std::time::Duration::from_secs(30))
//!     .build()?;
//!
//! let window = parse_window("2016-10-31T06:33:44.866Z", "2016-10-31T09:00:00Z")?;
//! let series = hackair.pollutant(SeriesKind::Pm25, window).await?;
//! ```
#![warn(missing_docs)]

mod core;
mod query;

pub use crate::core::{Hackair, HackairBuilder};
pub use crate::query::parse_window;

pub use hackair_core::{
    Capability, ClientConfig, HackairConfig, HackairError, Measurement, MeasurementProvider,
    Reading, SeriesKind, SplitConfig, Target, TimeRange,
};
