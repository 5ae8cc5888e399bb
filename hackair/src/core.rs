use std::sync::Arc;
use std::time::Duration;

use hackair_core::{
    Capability, HackairConfig, HackairError, MeasurementProvider, check_split_config,
};

/// Orchestrator that answers sensor and pollutant queries against one provider.
#[derive(Clone)]
pub struct Hackair {
    pub(crate) provider: Arc<dyn MeasurementProvider>,
    pub(crate) cfg: HackairConfig,
}

/// Builder for constructing a `Hackair` orchestrator with custom configuration.
pub struct HackairBuilder {
    provider: Option<Arc<dyn MeasurementProvider>>,
    cfg: HackairConfig,
}

impl Default for HackairBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HackairBuilder {
    /// Create a new builder with default partitioning and no request deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            provider: None,
            cfg: HackairConfig::default(),
        }
    }

    /// Set the measurement provider. A later call replaces an earlier one.
    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn MeasurementProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: HackairConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Longest span covered by a single remote call.
    ///
    /// Behavior and trade-offs:
    /// - Shorter spans keep each remote response small but multiply calls, which
    ///   makes `max_ranges` bite sooner.
    #[must_use]
    pub const fn max_span(mut self, span: Duration) -> Self {
        self.cfg.split.max_span = span;
        self
    }

    /// Ceiling on the number of remote calls a single pollutant query may issue.
    #[must_use]
    pub const fn max_ranges(mut self, n: usize) -> Self {
        self.cfg.split.max_ranges = n;
        self
    }

    /// Overall deadline for one query, covering every concurrent sub-fetch.
    ///
    /// Behavior and trade-offs:
    /// - On expiry the query fails with `RequestTimeout` and in-flight calls are dropped.
    /// - Unset by default; per-call limits then come only from the provider itself.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` when no provider is set, `max_span` is under one second
    /// or too large to represent, or `max_ranges` is zero.
    pub fn build(self) -> Result<Hackair, HackairError> {
        let Some(provider) = self.provider else {
            return Err(HackairError::InvalidArg(
                "no provider registered; add one via with_provider(...)".to_string(),
            ));
        };
        check_split_config(&self.cfg.split)?;
        Ok(Hackair {
            provider,
            cfg: self.cfg,
        })
    }
}

impl Hackair {
    /// Start building a new `Hackair` instance.
    #[must_use]
    pub fn builder() -> HackairBuilder {
        HackairBuilder::new()
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &HackairConfig {
        &self.cfg
    }

    /// Name of the underlying provider.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Run `fut` under the configured request deadline, mapping expiry to `RequestTimeout`.
    pub(crate) async fn with_request_deadline<T, Fut>(
        &self,
        capability: Capability,
        fut: Fut,
    ) -> Result<T, HackairError>
    where
        Fut: core::future::Future<Output = Result<T, HackairError>>,
    {
        match self.cfg.request_timeout {
            Some(deadline) => tokio::time::timeout(deadline, fut)
                .await
                .unwrap_or_else(|_| Err(HackairError::request_timeout(capability.as_str()))),
            None => fut.await,
        }
    }
}
