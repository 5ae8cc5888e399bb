mod helpers;

use std::sync::Arc;
use std::time::Duration;

use hackair::{HackairError, SeriesKind};
use hackair_mock::{DynamicMockProvider, MockBehavior, MockProvider};
use helpers::{at, hackair_with, reading, window};

#[tokio::test]
async fn distinct_sensors_across_pollutants() {
    let (mock, controller) = DynamicMockProvider::new_with_controller("dyn");
    controller
        .set_fallback(MockBehavior::Return(vec![
            reading("B", SeriesKind::Pm25, "1", at(6, 10, 0)),
            reading("A", SeriesKind::Pm10, "2", at(6, 20, 0)),
            reading("B", SeriesKind::Pm10, "3", at(6, 30, 0)),
        ]))
        .await;
    let hackair = hackair_with(mock);
    let w = window(at(6, 0, 0), at(7, 0, 0));

    let ids: Vec<String> = hackair.sensors(w).await.unwrap().into_iter().collect();
    assert_eq!(ids, vec!["A".to_string(), "B".to_string()]);
    assert_eq!(hackair.sensors_count(w).await.unwrap(), 2);
}

#[tokio::test]
async fn long_window_uses_a_single_call() {
    let (mock, controller) = DynamicMockProvider::new_with_controller("dyn");
    let hackair = hackair_with(mock);
    let w = window(at(0, 0, 0), at(23, 59, 59));

    assert!(hackair.sensors(w).await.unwrap().is_empty());
    assert_eq!(controller.calls().await, vec![w]);
}

#[tokio::test]
async fn fixture_area_has_two_sensors() {
    let hackair = hackair_with(Arc::new(MockProvider::new()));
    let n = hackair
        .sensors_count(window(at(6, 33, 44), at(9, 0, 0)))
        .await
        .unwrap();
    assert_eq!(n, 2);
}

#[tokio::test]
async fn remote_status_means_no_sensors() {
    let (mock, controller) = DynamicMockProvider::new_with_controller("dyn");
    controller
        .set_fallback(MockBehavior::Fail(HackairError::RemoteStatus {
            code: 400,
            message: "bad location".into(),
        }))
        .await;
    let hackair = hackair_with(mock);
    assert_eq!(
        hackair
            .sensors_count(window(at(6, 0, 0), at(7, 0, 0)))
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn transport_failure_propagates() {
    let (mock, controller) = DynamicMockProvider::new_with_controller("dyn");
    let err = HackairError::remote("dyn", "dns");
    controller.set_fallback(MockBehavior::Fail(err.clone())).await;
    let hackair = hackair_with(mock);
    assert_eq!(
        hackair.sensors(window(at(6, 0, 0), at(7, 0, 0))).await,
        Err(err)
    );
}

#[tokio::test(start_paused = true)]
async fn stalled_remote_hits_request_deadline() {
    let (mock, controller) = DynamicMockProvider::new_with_controller("dyn");
    controller.set_fallback(MockBehavior::Hang).await;
    let hackair = hackair::Hackair::builder()
        .with_provider(mock)
        .request_timeout(Duration::from_millis(500))
        .build()
        .unwrap();
    assert_eq!(
        hackair.sensors(window(at(6, 0, 0), at(7, 0, 0))).await,
        Err(HackairError::request_timeout("sensors"))
    );
}
