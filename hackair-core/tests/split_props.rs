use std::time::Duration;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use hackair_core::{HackairError, SplitConfig, TimeRange, split_range};
use proptest::prelude::*;

fn utc(h: u32, m: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 10, 31, h, m, s).unwrap()
}

fn hourly() -> SplitConfig {
    SplitConfig::default()
}

fn cfg(span_secs: u64, max_ranges: usize) -> SplitConfig {
    SplitConfig {
        max_span: Duration::from_secs(span_secs),
        max_ranges,
    }
}

#[test]
fn short_window_is_a_single_range() {
    let p = split_range(utc(6, 33, 44), utc(7, 0, 0), &hourly()).unwrap();
    assert_eq!(
        &*p,
        &[TimeRange {
            start: utc(6, 33, 44),
            end: utc(7, 0, 0)
        }]
    );
}

#[test]
fn long_window_splits_on_hour_boundaries_plus_one_second() {
    let p = split_range(utc(6, 33, 44), utc(9, 0, 0), &hourly()).unwrap();
    let expected = [
        (utc(6, 33, 44), utc(7, 33, 44)),
        (utc(7, 33, 45), utc(8, 33, 44)),
        (utc(8, 33, 45), utc(9, 0, 0)),
    ];
    let got: Vec<_> = p.iter().map(|r| (r.start, r.end)).collect();
    assert_eq!(got, expected);
}

#[test]
fn equal_bounds_yield_one_zero_length_range() {
    let p = split_range(utc(6, 33, 44), utc(6, 33, 44), &hourly()).unwrap();
    assert_eq!(p.len(), 1);
    assert!(p[0].is_instant());
}

#[test]
fn inverted_bounds_are_rejected() {
    let err = split_range(utc(9, 0, 0), utc(6, 0, 0), &hourly()).unwrap_err();
    assert!(matches!(err, HackairError::InvalidArg(_)));
}

#[test]
fn sub_second_span_is_rejected() {
    let bad = SplitConfig {
        max_span: Duration::from_millis(500),
        max_ranges: 10,
    };
    let err = split_range(utc(6, 0, 0), utc(7, 0, 0), &bad).unwrap_err();
    assert!(matches!(err, HackairError::InvalidArg(_)));
}

#[test]
fn unrepresentable_span_is_rejected() {
    let huge = SplitConfig {
        max_span: Duration::from_secs(10_000_000_000_000_000),
        max_ranges: 100,
    };
    let err = split_range(utc(6, 33, 44), utc(9, 0, 0), &huge).unwrap_err();
    assert_eq!(err, HackairError::InvalidArg("max_span is too large".into()));

    let max = SplitConfig {
        max_span: Duration::from_secs(u64::MAX),
        max_ranges: 100,
    };
    assert!(matches!(
        split_range(utc(6, 33, 44), utc(9, 0, 0), &max),
        Err(HackairError::InvalidArg(_))
    ));
}

#[test]
fn span_longer_than_any_window_yields_one_range() {
    // About 31 million years: representable, but past every calendar date chrono supports.
    let wide = cfg(1_000_000_000_000_000, 1);
    let p = split_range(utc(6, 33, 44), utc(9, 0, 0), &wide).unwrap();
    let got: Vec<_> = p.iter().map(|r| (r.start, r.end)).collect();
    assert_eq!(got, vec![(utc(6, 33, 44), utc(9, 0, 0))]);
}

#[test]
fn fractional_bounds_are_truncated_not_rounded() {
    let start = utc(6, 33, 44) + TimeDelta::milliseconds(999);
    let end = utc(7, 0, 0) + TimeDelta::milliseconds(600);
    let p = split_range(start, end, &hourly()).unwrap();
    assert_eq!(p[0].start, utc(6, 33, 44));
    assert_eq!(p[0].end, utc(7, 0, 0));
}

#[test]
fn exactly_one_hundred_hourly_ranges_is_allowed() {
    // 100 ranges: first spans 3600s, every later one advances 3601s.
    let start = utc(0, 0, 0);
    let end = start + TimeDelta::seconds(3600 + 99 * 3601);
    let p = split_range(start, end, &hourly()).unwrap();
    assert_eq!(p.len(), 100);
    assert_eq!(p[99].end, end);
}

#[test]
fn one_more_second_exceeds_the_ceiling() {
    let start = utc(0, 0, 0);
    let end = start + TimeDelta::seconds(3600 + 99 * 3601 + 1);
    let err = split_range(start, end, &hourly()).unwrap_err();
    assert_eq!(err, HackairError::IntervalTooLarge { max: 100 });
}

#[test]
fn ceiling_is_configurable() {
    let err = split_range(utc(0, 0, 0), utc(3, 0, 0), &cfg(3600, 2)).unwrap_err();
    assert_eq!(err, HackairError::IntervalTooLarge { max: 2 });
}

proptest! {
    #[test]
    fn partition_tiles_the_window(
        start in 0i64..2_000_000_000i64,
        len in 1i64..200_000i64,
        span in 1u64..20_000u64,
    ) {
        let s = DateTime::from_timestamp(start, 0).unwrap();
        let e = DateTime::from_timestamp(start + len, 0).unwrap();
        let c = cfg(span, usize::MAX);
        let p = split_range(s, e, &c).unwrap();

        prop_assert_eq!(p[0].start, s);
        prop_assert_eq!(p[p.len() - 1].end, e);
        prop_assert_eq!(p.covered(), Some(TimeRange { start: s, end: e }));

        let mut covered_instants = 0i64;
        for (i, r) in p.iter().enumerate() {
            prop_assert!(r.start <= r.end);
            prop_assert!(r.span() <= TimeDelta::seconds(span as i64));
            if i > 0 {
                prop_assert_eq!(r.start, p[i - 1].end + TimeDelta::seconds(1));
            }
            covered_instants += r.span().num_seconds() + 1;
        }
        // Every whole second of [s, e] lies in exactly one range.
        prop_assert_eq!(covered_instants, len + 1);
    }

    #[test]
    fn partition_is_deterministic(
        start in 0i64..2_000_000_000i64,
        len in 0i64..400_000i64,
        span in 1u64..7_200u64,
    ) {
        let s = DateTime::from_timestamp(start, 0).unwrap();
        let e = DateTime::from_timestamp(start + len, 0).unwrap();
        let c = cfg(span, 1_000);
        prop_assert_eq!(split_range(s, e, &c), split_range(s, e, &c));
    }

    #[test]
    fn ceiling_matches_needed_range_count(
        len in 0i64..50_000i64,
        span in 1u64..5_000u64,
        max_ranges in 1usize..40usize,
    ) {
        let s = DateTime::from_timestamp(1_477_895_624, 0).unwrap();
        let e = s + TimeDelta::seconds(len);
        let unbounded = split_range(s, e, &cfg(span, usize::MAX)).unwrap();
        match split_range(s, e, &cfg(span, max_ranges)) {
            Ok(p) => {
                prop_assert!(unbounded.len() <= max_ranges);
                prop_assert_eq!(p, unbounded);
            }
            Err(err) => {
                prop_assert!(unbounded.len() > max_ranges);
                prop_assert_eq!(err, HackairError::IntervalTooLarge { max: max_ranges });
            }
        }
    }
}
