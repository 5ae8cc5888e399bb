use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which pollutant metric a series carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    /// Fine particulate matter, diameter below 2.5 µm.
    Pm25,
    /// Particulate matter, diameter below 10 µm.
    Pm10,
}

impl SeriesKind {
    /// Both kinds, in a stable order.
    pub const ALL: [Self; 2] = [Self::Pm25, Self::Pm10];

    /// The `pollutant_q.name` value the remote API uses for this kind.
    #[must_use]
    pub const fn pollutant_name(self) -> &'static str {
        match self {
            Self::Pm25 => "PM2.5_AirPollutantValue",
            Self::Pm10 => "PM10_AirPollutantValue",
        }
    }

    /// Whether a remote `pollutant_q.name` belongs to this kind.
    #[must_use]
    pub fn matches(self, pollutant_name: &str) -> bool {
        self.pollutant_name() == pollutant_name
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pm25 => "PM2.5",
            Self::Pm10 => "PM10",
        })
    }
}

/// A queryable target name exposed to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Target {
    /// Table of distinct sensor identifiers.
    Sensors,
    /// Single-cell table with the number of distinct sensors.
    SensorsCount,
    /// PM2.5 time series.
    PollutantPm25,
    /// PM10 time series.
    PollutantPm10,
}

impl Target {
    /// Every target, in the order `/search` advertises them.
    pub const ALL: [Self; 4] = [
        Self::Sensors,
        Self::SensorsCount,
        Self::PollutantPm25,
        Self::PollutantPm10,
    ];

    /// Wire name of the target.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sensors => "sensors",
            Self::SensorsCount => "sensors_count",
            Self::PollutantPm25 => "pollutant_pm25",
            Self::PollutantPm10 => "pollutant_pm10",
        }
    }

    /// The pollutant series behind a time-series target, `None` for table targets.
    #[must_use]
    pub const fn series_kind(self) -> Option<SeriesKind> {
        match self {
            Self::PollutantPm25 => Some(SeriesKind::Pm25),
            Self::PollutantPm10 => Some(SeriesKind::Pm10),
            Self::Sensors | Self::SensorsCount => None,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A target name that is not part of [`Target::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown target: {0}")]
pub struct UnknownTarget(pub String);

impl FromStr for Target {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTarget(s.to_string()))
    }
}

impl TryFrom<String> for Target {
    type Error = UnknownTarget;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Target> for &'static str {
    fn from(t: Target) -> Self {
        t.as_str()
    }
}
