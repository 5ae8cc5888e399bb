use std::sync::Arc;
use std::time::Duration;

use hackair::{Hackair, HackairConfig, HackairError, SplitConfig, parse_window};
use hackair_mock::MockProvider;

#[test]
fn build_requires_a_provider() {
    let err = Hackair::builder().build().err().unwrap();
    assert!(matches!(err, HackairError::InvalidArg(_)));
}

#[test]
fn defaults_match_split_config() {
    let hackair = Hackair::builder()
        .with_provider(Arc::new(MockProvider::new()))
        .build()
        .unwrap();
    assert_eq!(hackair.config(), &HackairConfig::default());
    assert_eq!(hackair.config().split, SplitConfig::default());
    assert_eq!(hackair.provider_name(), "hackair-mock");
}

#[test]
fn modifiers_are_applied() {
    let hackair = Hackair::builder()
        .with_provider(Arc::new(MockProvider::new()))
        .max_span(Duration::from_secs(600))
        .max_ranges(7)
        .request_timeout(Duration::from_secs(3))
        .build()
        .unwrap();
    let cfg = hackair.config();
    assert_eq!(cfg.split.max_span, Duration::from_secs(600));
    assert_eq!(cfg.split.max_ranges, 7);
    assert_eq!(cfg.request_timeout, Some(Duration::from_secs(3)));
}

#[test]
fn rejects_degenerate_split_bounds() {
    let base = || Hackair::builder().with_provider(Arc::new(MockProvider::new()));
    assert!(matches!(
        base().max_span(Duration::from_millis(999)).build(),
        Err(HackairError::InvalidArg(_))
    ));
    assert!(matches!(
        base().max_ranges(0).build(),
        Err(HackairError::InvalidArg(_))
    ));
}

#[test]
fn rejects_span_beyond_time_arithmetic() {
    let err = Hackair::builder()
        .with_provider(Arc::new(MockProvider::new()))
        .max_span(Duration::from_secs(10_000_000_000_000_000))
        .build()
        .err()
        .unwrap();
    assert_eq!(err, HackairError::InvalidArg("max_span is too large".into()));
}

#[test]
fn parse_window_accepts_dashboard_instants() {
    let w = parse_window("2016-10-31T06:33:44.866Z", "2016-10-31T09:00:00.000Z").unwrap();
    assert_eq!(w.start.timestamp(), 1_477_895_624);
    assert_eq!((w.end - w.start).num_seconds(), 8776);
}

#[test]
fn parse_window_rejects_bad_input() {
    assert_eq!(
        parse_window("yesterday", "2016-10-31T09:00:00Z").err(),
        Some(HackairError::invalid_time("yesterday"))
    );
    assert!(matches!(
        parse_window("2016-10-31T09:00:00Z", "2016-10-31T06:00:00Z"),
        Err(HackairError::InvalidArg(_))
    ));
    // Equal once truncated.
    assert!(parse_window("2016-10-31T06:00:00.9Z", "2016-10-31T06:00:00.1Z").is_ok());
}
