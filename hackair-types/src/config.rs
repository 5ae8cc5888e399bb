//! Configuration types shared across the orchestrator, the client, and the server.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Bounds used when partitioning a query window into sub-ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Longest span a single sub-range may cover. Must be at least one second.
    pub max_span: Duration,
    /// Ceiling on the number of sub-ranges (and therefore remote calls) per query.
    pub max_ranges: usize,
}

impl SplitConfig {
    /// One hour per remote call, at most 100 calls per query.
    pub const DEFAULT_MAX_SPAN: Duration = Duration::from_secs(60 * 60);
    /// Default ceiling on sub-ranges per query.
    pub const DEFAULT_MAX_RANGES: usize = 100;
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            max_span: Self::DEFAULT_MAX_SPAN,
            max_ranges: Self::DEFAULT_MAX_RANGES,
        }
    }
}

/// Global configuration for the `Hackair` orchestrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HackairConfig {
    /// Partitioning bounds for pollutant series.
    pub split: SplitConfig,
    /// Optional overall deadline for a single query, covering every sub-fetch.
    pub request_timeout: Option<Duration>,
}

/// Settings for the HTTP client talking to the remote measurement API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme and host of the API, without the `/measurements` path.
    pub base_url: String,
    /// Bounding box passed verbatim as `location`: `"lon,lat|lon,lat"`.
    pub location: String,
    /// Per-request timeout applied by the HTTP client.
    pub timeout: Option<Duration>,
    /// Skip TLS certificate verification.
    pub accept_invalid_certs: bool,
}

impl ClientConfig {
    /// Public endpoint of the hackAIR API.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.hackair.eu";

    /// Configuration for the public endpoint and the given bounding box.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            location: location.into(),
            timeout: None,
            accept_invalid_certs: false,
        }
    }
}
