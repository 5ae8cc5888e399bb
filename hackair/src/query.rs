use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use hackair_core::time::{parse_instant, truncate_to_seconds};
use hackair_core::{
    Capability, HackairError, Measurement, MeasurementProvider, SeriesKind, TimeRange,
    fetch_partitioned,
};

use crate::Hackair;

/// Parse a dashboard `from`/`to` pair into a whole-second window.
///
/// # Errors
/// - `InvalidTimeFormat` if either side is not an RFC 3339 instant with offset.
/// - `InvalidArg` if `from` is after `to` once truncated.
pub fn parse_window(from: &str, to: &str) -> Result<TimeRange, HackairError> {
    TimeRange::new(parse_instant(from)?, parse_instant(to)?)
}

fn whole_seconds(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<TimeRange, HackairError> {
    TimeRange::new(truncate_to_seconds(start), truncate_to_seconds(end))
}

impl Hackair {
    /// Distinct ids of the sensors that reported anything inside `window`.
    ///
    /// Behavior and trade-offs:
    /// - Issues a single remote call for the whole window; no partitioning.
    /// - An embedded remote status error yields an empty set.
    ///
    /// # Errors
    /// Transport failures, malformed payloads, and `RequestTimeout`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "hackair::query",
            skip(self),
            fields(window = %window),
        )
    )]
    pub async fn sensors(&self, window: TimeRange) -> Result<BTreeSet<String>, HackairError> {
        let window = whole_seconds(window.start, window.end)?;
        let fetched = self
            .with_request_deadline(Capability::Sensors, self.provider.measurements(window))
            .await;
        match fetched {
            Ok(readings) => Ok(readings.into_iter().map(|r| r.sensor_id).collect()),
            Err(HackairError::RemoteStatus { code, message }) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    code,
                    remote_message = %message,
                    "remote status error; reporting no sensors"
                );
                #[cfg(not(feature = "tracing"))]
                let _ = (code, message);
                Ok(BTreeSet::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Number of distinct sensors that reported inside `window`.
    ///
    /// # Errors
    /// Same as [`Hackair::sensors`].
    pub async fn sensors_count(&self, window: TimeRange) -> Result<usize, HackairError> {
        self.sensors(window).await.map(|ids| ids.len())
    }

    /// Ascending series of `kind` readings inside `window`.
    ///
    /// Behavior and trade-offs:
    /// - The window is split into sub-ranges of at most `max_span`, fetched concurrently.
    /// - Points from every sensor are interleaved by timestamp; duplicates are kept.
    /// - A sub-range whose response embeds a remote status error contributes nothing.
    ///
    /// # Errors
    /// - `IntervalTooLarge` if the window needs more than `max_ranges` calls.
    /// - Transport failures and malformed payloads from any sub-range.
    /// - `RequestTimeout` when the request deadline expires.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "hackair::query",
            skip(self),
            fields(window = %window),
        )
    )]
    pub async fn pollutant(
        &self,
        kind: SeriesKind,
        window: TimeRange,
    ) -> Result<Vec<Measurement>, HackairError> {
        let window = whole_seconds(window.start, window.end)?;
        let provider: &dyn MeasurementProvider = self.provider.as_ref();
        let gathered = fetch_partitioned(kind, window, &self.cfg.split, move |range| {
            provider.measurements(range)
        });
        let series = self
            .with_request_deadline(Capability::Pollutant, gathered)
            .await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(points = series.len(), "pollutant series assembled");

        Ok(series)
    }

    /// PM2.5 series; shorthand for [`Hackair::pollutant`].
    ///
    /// # Errors
    /// Same as [`Hackair::pollutant`].
    pub async fn pm25(&self, window: TimeRange) -> Result<Vec<Measurement>, HackairError> {
        self.pollutant(SeriesKind::Pm25, window).await
    }

    /// PM10 series; shorthand for [`Hackair::pollutant`].
    ///
    /// # Errors
    /// Same as [`Hackair::pollutant`].
    pub async fn pm10(&self, window: TimeRange) -> Result<Vec<Measurement>, HackairError> {
        self.pollutant(SeriesKind::Pm10, window).await
    }
}
