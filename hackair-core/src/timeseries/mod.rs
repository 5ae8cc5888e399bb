//! Time-series utilities shared by providers and the orchestrator.
//!
//! Modules include:
//! - `split`: partition a window into bounded, contiguous sub-ranges
//! - `merge`: reassemble per-range results in partition order
//! - `gather`: fetch every sub-range concurrently and merge the results
/// Concurrent per-range fetching.
pub mod gather;
/// Reassembly of partial results.
pub mod merge;
/// Window partitioning.
pub mod split;
