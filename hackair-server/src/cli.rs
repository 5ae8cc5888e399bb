use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use clap::Parser;
use hackair::{ClientConfig, HackairConfig, SplitConfig};
use hackair_client::HackairClient;

/// Command-line and environment settings for the adapter.
#[derive(Parser, Debug, Clone)]
#[command(name = "hackair-server")]
#[command(about = "JSON dashboard adapter for hackAIR air-quality measurements")]
#[command(version)]
pub struct Args {
    /// Bounding box to query, "lon,lat|lon,lat" (lower-left | upper-right)
    #[arg(long, env = "HACKAIR_LOCATION")]
    pub location: String,

    /// Port for the HTTP server
    #[arg(short, long, env = "HACKAIR_PORT", default_value_t = 8888)]
    pub port: u16,

    /// Address to listen on
    #[arg(long, env = "HACKAIR_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Base URL of the hackAIR API
    #[arg(long, env = "HACKAIR_BASE_URL", default_value = ClientConfig::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Longest span, in seconds, covered by one remote call
    #[arg(
        long,
        env = "HACKAIR_MAX_SPAN_SECS",
        default_value_t = SplitConfig::DEFAULT_MAX_SPAN.as_secs()
    )]
    pub max_span_secs: u64,

    /// Maximum number of remote calls per pollutant query
    #[arg(long, env = "HACKAIR_MAX_RANGES", default_value_t = SplitConfig::DEFAULT_MAX_RANGES)]
    pub max_ranges: usize,

    /// Deadline, in seconds, for a whole query (unset: no deadline)
    #[arg(long, env = "HACKAIR_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Timeout, in seconds, for each remote HTTP call
    #[arg(long, env = "HACKAIR_REMOTE_TIMEOUT_SECS", default_value_t = 30)]
    pub remote_timeout_secs: u64,

    /// Skip TLS certificate verification toward the remote API
    #[arg(long, env = "HACKAIR_INSECURE")]
    pub insecure: bool,
}

impl Args {
    /// Socket address to bind.
    #[must_use]
    pub const fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Orchestrator settings derived from the flags.
    #[must_use]
    pub fn hackair_config(&self) -> HackairConfig {
        HackairConfig {
            split: SplitConfig {
                max_span: Duration::from_secs(self.max_span_secs),
                max_ranges: self.max_ranges,
            },
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }

    /// Remote client settings derived from the flags.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            location: self.location.clone(),
            timeout: Some(Duration::from_secs(self.remote_timeout_secs)),
            accept_invalid_certs: self.insecure,
        }
    }

    /// Remote client built from [`Args::client_config`].
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid.
    pub fn client(&self) -> anyhow::Result<HackairClient> {
        Ok(HackairClient::new(&self.client_config())?)
    }
}
