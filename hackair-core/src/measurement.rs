use serde::{Deserialize, Serialize};

use crate::time::api_date_to_epoch_millis;
use crate::{HackairError, SeriesKind};

/// One pollutant observation: a value and its epoch-millisecond timestamp.
///
/// Serialises as the `[value, timestampMs]` pair dashboards expect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, i64)", into = "(f64, i64)")]
pub struct Measurement {
    /// Concentration reported by the sensor.
    pub value: f64,
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: i64,
}

impl Measurement {
    /// Build a measurement from its parts.
    #[must_use]
    pub const fn new(value: f64, timestamp_ms: i64) -> Self {
        Self {
            value,
            timestamp_ms,
        }
    }
}

impl From<(f64, i64)> for Measurement {
    fn from((value, timestamp_ms): (f64, i64)) -> Self {
        Self::new(value, timestamp_ms)
    }
}

impl From<Measurement> for (f64, i64) {
    fn from(m: Measurement) -> Self {
        (m.value, m.timestamp_ms)
    }
}

/// A single item of a remote measurements payload, before normalisation.
///
/// `value` and `date_str` are kept verbatim; they are parsed only for readings
/// whose pollutant is actually requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    /// `source_info.sensor.id`.
    pub sensor_id: String,
    /// `pollutant_q.name`, e.g. `PM2.5_AirPollutantValue`.
    pub pollutant: String,
    /// `pollutant_q.value` as text.
    pub value: String,
    /// `date_str`, `YYYY-MM-DDTHH:MM:SSZ`.
    pub date_str: String,
}

impl Reading {
    /// Whether this reading carries the given series kind.
    #[must_use]
    pub fn is_kind(&self, kind: SeriesKind) -> bool {
        kind.matches(&self.pollutant)
    }

    /// Parse value and timestamp into a [`Measurement`].
    ///
    /// # Errors
    /// - `Data` if the value is not a finite number.
    /// - `InvalidTimeFormat` if `date_str` does not match the API layout.
    pub fn to_measurement(&self) -> Result<Measurement, HackairError> {
        let value = self
            .value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                HackairError::Data(format!(
                    "non-numeric value {:?} from sensor {}",
                    self.value, self.sensor_id
                ))
            })?;
        let timestamp_ms = api_date_to_epoch_millis(&self.date_str)?;
        Ok(Measurement::new(value, timestamp_ms))
    }
}

/// Measurements fetched for one partition element, tagged with its index.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialResult {
    /// Position of the source range in its partition.
    pub index: usize,
    /// Observations, ascending by timestamp.
    pub measurements: Vec<Measurement>,
}

impl PartialResult {
    /// A slice that yielded no data.
    #[must_use]
    pub const fn empty(index: usize) -> Self {
        Self {
            index,
            measurements: Vec::new(),
        }
    }

    /// Keep only readings of `kind`, normalise them, and sort ascending by time.
    ///
    /// Readings of other pollutants are discarded without being parsed. Equal
    /// timestamps keep their payload order.
    ///
    /// # Errors
    /// Propagates the first parse failure among matching readings.
    pub fn from_readings(
        index: usize,
        kind: SeriesKind,
        readings: &[Reading],
    ) -> Result<Self, HackairError> {
        let mut measurements = readings
            .iter()
            .filter(|r| r.is_kind(kind))
            .map(Reading::to_measurement)
            .collect::<Result<Vec<_>, _>>()?;
        measurements.sort_by_key(|m| m.timestamp_ms);
        Ok(Self {
            index,
            measurements,
        })
    }
}
