use chrono::{DateTime, TimeDelta, Utc};

use crate::time::truncate_to_seconds;
use crate::{HackairError, Partition, SplitConfig, TimeRange};

/// Validate partition bounds and return `max_span` as a whole-second delta.
///
/// # Errors
/// Returns `InvalidArg` if `max_span` is under one second or beyond what a
/// `TimeDelta` can hold, or if `max_ranges` is zero.
pub fn check_split_config(cfg: &SplitConfig) -> Result<TimeDelta, HackairError> {
    let secs = cfg.max_span.as_secs();
    if secs < 1 {
        return Err(HackairError::InvalidArg(
            "max_span must be at least one second".into(),
        ));
    }
    let max_span = i64::try_from(secs)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .ok_or_else(|| HackairError::InvalidArg("max_span is too large".into()))?;
    if cfg.max_ranges == 0 {
        return Err(HackairError::InvalidArg(
            "max_ranges must be positive".into(),
        ));
    }
    Ok(max_span)
}

/// Partition `[start, end]` into sub-ranges no longer than `cfg.max_span`.
///
/// - Bounds are truncated to whole seconds first.
/// - The first range starts at `start`; each later range starts one second
///   after the previous range's end, so no instant is requested twice.
/// - A range ends at `min(range_start + max_span, end)`; the last one ends at `end`.
/// - `start == end` yields a single zero-length range.
///
/// # Errors
/// - `InvalidArg` if `start > end` or [`check_split_config`] rejects `cfg`.
/// - `IntervalTooLarge` if more than `cfg.max_ranges` ranges would be needed.
pub fn split_range(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    cfg: &SplitConfig,
) -> Result<Partition, HackairError> {
    let start = truncate_to_seconds(start);
    let end = truncate_to_seconds(end);
    TimeRange::new(start, end)?;

    let max_span = check_split_config(cfg)?;
    let step = TimeDelta::seconds(1);

    let mut ranges = Vec::new();
    let mut cursor = start;
    loop {
        if ranges.len() == cfg.max_ranges {
            return Err(HackairError::IntervalTooLarge {
                max: cfg.max_ranges,
            });
        }
        let range_end = cursor
            .checked_add_signed(max_span)
            .map_or(end, |t| t.min(end));
        ranges.push(TimeRange {
            start: cursor,
            end: range_end,
        });
        if range_end >= end {
            break;
        }
        // range_end < end at whole-second precision, so the next start never passes `end`.
        cursor = range_end + step;
    }
    Ok(Partition::from_ranges(ranges))
}
