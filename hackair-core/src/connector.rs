use async_trait::async_trait;

use crate::{HackairError, Reading, TimeRange};

/// Source of raw measurement readings for a bounded time window.
///
/// Implementations must be safe to call concurrently: the orchestrator issues
/// one call per partition element at the same time.
#[async_trait]
pub trait MeasurementProvider: Send + Sync {
    /// Short identifier used in errors and logs.
    fn name(&self) -> &'static str;

    /// Fetch every reading inside `window`, in whatever order the source returns them.
    ///
    /// # Errors
    /// - `RemoteRequestFailed` for transport failures and non-2xx responses.
    /// - `RemoteStatus` when the payload embeds a non-success `status_code`.
    /// - `Data` when the payload cannot be decoded.
    async fn measurements(&self, window: TimeRange) -> Result<Vec<Reading>, HackairError>;
}
