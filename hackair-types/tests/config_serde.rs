use std::time::Duration;

use hackair_types::{ClientConfig, HackairConfig, SeriesKind, SplitConfig, Target};

#[test]
fn defaults_match_remote_api_limits() {
    let cfg = HackairConfig::default();
    assert_eq!(cfg.split.max_span, Duration::from_secs(3600));
    assert_eq!(cfg.split.max_ranges, 100);
    assert!(cfg.request_timeout.is_none());
}

#[test]
fn hackair_config_roundtrip() {
    let cfg = HackairConfig {
        split: SplitConfig {
            max_span: Duration::from_secs(900),
            max_ranges: 12,
        },
        request_timeout: Some(Duration::from_millis(2500)),
    };
    let json = serde_json::to_string(&cfg).expect("serialize config");
    let de: HackairConfig = serde_json::from_str(&json).expect("deserialize config");
    assert_eq!(de, cfg);
}

#[test]
fn client_config_points_at_public_api() {
    let cfg = ClientConfig::new("23.7,37.9|23.8,38.0");
    assert_eq!(cfg.base_url, "https://api.hackair.eu");
    assert_eq!(cfg.location, "23.7,37.9|23.8,38.0");
    assert!(!cfg.accept_invalid_certs);
}

#[test]
fn targets_serialize_as_wire_names() {
    let json = serde_json::to_string(&Target::ALL).unwrap();
    assert_eq!(
        json,
        r#"["sensors","sensors_count","pollutant_pm25","pollutant_pm10"]"#
    );
    let t: Target = serde_json::from_str(r#""pollutant_pm10""#).unwrap();
    assert_eq!(t, Target::PollutantPm10);
    assert!(serde_json::from_str::<Target>(r#""ozone""#).is_err());
}

#[test]
fn target_series_kind_mapping() {
    assert_eq!(Target::PollutantPm25.series_kind(), Some(SeriesKind::Pm25));
    assert_eq!(Target::PollutantPm10.series_kind(), Some(SeriesKind::Pm10));
    assert_eq!(Target::Sensors.series_kind(), None);
    assert_eq!("sensors_count".parse::<Target>().unwrap(), Target::SensorsCount);
}

#[test]
fn series_kind_matches_remote_vocabulary() {
    assert!(SeriesKind::Pm25.matches("PM2.5_AirPollutantValue"));
    assert!(!SeriesKind::Pm25.matches("PM10_AirPollutantValue"));
    assert!(SeriesKind::Pm10.matches("PM10_AirPollutantValue"));
    assert!(!SeriesKind::Pm10.matches("CO_AirPollutantValue"));
}
