//! hackair-client
//!
//! Connector that implements `MeasurementProvider` on top of `reqwest`, talking
//! to the hackAIR `/measurements` endpoint for one fixed bounding box.
#![warn(missing_docs)]

mod wire;

use async_trait::async_trait;
use hackair_core::{
    ClientConfig, HackairError, MeasurementProvider, Reading, TimeRange, time::format_api_date,
};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

/// HTTP client for the hackAIR measurements API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HackairClient {
    http: reqwest::Client,
    endpoint: Url,
    location: String,
}

impl HackairClient {
    /// Provider name reported in errors and logs.
    pub const NAME: &'static str = "hackair-client";
    /// Versioned media type the API expects in `Accept`.
    pub const MEDIA_TYPE: &'static str = "application/vnd.hackair.v1+json";

    /// Build a client with its own connection pool, honoring the timeout and
    /// certificate settings in `cfg`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base_url` is not a valid URL or the HTTP client
    /// cannot be constructed.
    pub fn new(cfg: &ClientConfig) -> Result<Self, HackairError> {
        let mut builder =
            reqwest::Client::builder().danger_accept_invalid_certs(cfg.accept_invalid_certs);
        if let Some(timeout) = cfg.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| HackairError::InvalidArg(format!("http client: {e}")))?;
        Self::with_http(http, cfg)
    }

    /// Build from an existing `reqwest::Client`.
    ///
    /// The timeout and certificate fields of `cfg` are ignored; configure them on `http`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base_url` is not a valid URL.
    pub fn with_http(http: reqwest::Client, cfg: &ClientConfig) -> Result<Self, HackairError> {
        Ok(Self {
            http,
            endpoint: endpoint(&cfg.base_url)?,
            location: cfg.location.clone(),
        })
    }

    /// Full URL of the measurements endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Bounding box sent with every request.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "hackair_client::fetch",
            skip(self),
            fields(window = %window),
        )
    )]
    async fn fetch(&self, window: TimeRange) -> Result<Vec<Reading>, HackairError> {
        let transport = |e: reqwest::Error| HackairError::remote(Self::NAME, e.to_string());

        let resp = self
            .http
            .get(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, Self::MEDIA_TYPE)
            .query(&[
                ("timestampStart", format_api_date(window.start)),
                ("timestampEnd", format_api_date(window.end)),
                ("location", self.location.clone()),
                ("show", "all".to_string()),
            ])
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(transport)?;
        let readings = wire::decode(Self::NAME, status, &body)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(http_status = status.as_u16(), readings = readings.len(), "fetched");

        Ok(readings)
    }
}

fn endpoint(base_url: &str) -> Result<Url, HackairError> {
    let raw = format!("{}/measurements", base_url.trim_end_matches('/'));
    Url::parse(&raw).map_err(|e| HackairError::InvalidArg(format!("base url {base_url:?}: {e}")))
}

#[async_trait]
impl MeasurementProvider for HackairClient {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    async fn measurements(&self, window: TimeRange) -> Result<Vec<Reading>, HackairError> {
        self.fetch(window).await
    }
}
