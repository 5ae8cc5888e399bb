use chrono::{DateTime, Utc};
use hackair_core::{Reading, SeriesKind, TimeRange, time::format_api_date};

/// Spacing between fixture readings.
pub const STEP_SECS: i64 = 20 * 60;

/// Sensors reporting in the fixture area.
pub const SENSORS: [&str; 2] = ["S1", "S2"];

/// Deterministic value for a sensor, pollutant, and grid slot.
fn value(sensor: usize, kind: SeriesKind, slot: i64) -> String {
    let base = match kind {
        SeriesKind::Pm25 => 8,
        SeriesKind::Pm10 => 20,
    };
    let v = base + slot.rem_euclid(17) + 3 * sensor as i64;
    format!("{v}.5")
}

/// Every fixture reading inside `window`, newest first.
///
/// Readings sit on a 20 minute grid aligned to the Unix epoch. Each grid point
/// carries one PM2.5 and one PM10 reading per sensor.
pub fn readings_in(window: TimeRange) -> Vec<Reading> {
    let first = window.start.timestamp().div_euclid(STEP_SECS)
        + i64::from(window.start.timestamp().rem_euclid(STEP_SECS) != 0);
    let last = window.end.timestamp().div_euclid(STEP_SECS);

    let mut out = Vec::new();
    for slot in (first..=last).rev() {
        let Some(at) = DateTime::<Utc>::from_timestamp(slot * STEP_SECS, 0) else {
            continue;
        };
        let date_str = format_api_date(at);
        for (i, sensor) in SENSORS.iter().enumerate() {
            for kind in SeriesKind::ALL {
                out.push(Reading {
                    sensor_id: (*sensor).to_string(),
                    pollutant: kind.pollutant_name().to_string(),
                    value: value(i, kind, slot),
                    date_str: date_str.clone(),
                });
            }
        }
    }
    out
}
