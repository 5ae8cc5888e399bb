use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use hackair::{Hackair, MeasurementProvider, Reading, SeriesKind, TimeRange};
use hackair_core::time::format_api_date;

/// Construct a UTC instant on 2016-10-31 for readability in tests.
pub fn at(hh: u32, mm: u32, ss: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 10, 31, hh, mm, ss).unwrap()
}

pub fn window(start: DateTime<Utc>, end: DateTime<Utc>) -> TimeRange {
    TimeRange::new(start, end).unwrap()
}

/// A remote reading as the provider would return it.
pub fn reading(sensor: &str, kind: SeriesKind, value: &str, t: DateTime<Utc>) -> Reading {
    Reading {
        sensor_id: sensor.to_string(),
        pollutant: kind.pollutant_name().to_string(),
        value: value.to_string(),
        date_str: format_api_date(t),
    }
}

pub fn hackair_with(provider: Arc<dyn MeasurementProvider>) -> Hackair {
    Hackair::builder().with_provider(provider).build().unwrap()
}
