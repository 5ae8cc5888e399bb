use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use hackair_core::{HackairError, MeasurementProvider, Reading, TimeRange};

/// Instruction for how a call should behave for a given window.
#[derive(Debug, Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value.
    Return(T),
    /// Fail with the provided error.
    Fail(HackairError),
    /// Hang indefinitely (simulate a stalled remote).
    Hang,
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<DateTime<Utc>, MockBehavior<Vec<Reading>>>,
    delays: HashMap<DateTime<Utc>, Duration>,
    fallback: Option<MockBehavior<Vec<Reading>>>,
    calls: Vec<TimeRange>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for calls whose window starts at `start`.
    pub async fn set_behavior(&self, start: DateTime<Utc>, behavior: MockBehavior<Vec<Reading>>) {
        let mut guard = self.state.lock().await;
        guard.rules.insert(start, behavior);
    }

    /// Behavior for windows without a specific rule. Without one, such calls return no readings.
    pub async fn set_fallback(&self, behavior: MockBehavior<Vec<Reading>>) {
        let mut guard = self.state.lock().await;
        guard.fallback = Some(behavior);
    }

    /// Sleep for `delay` before answering calls whose window starts at `start`.
    pub async fn set_delay(&self, start: DateTime<Utc>, delay: Duration) {
        let mut guard = self.state.lock().await;
        guard.delays.insert(start, delay);
    }

    /// Windows requested so far, in call order.
    pub async fn calls(&self) -> Vec<TimeRange> {
        self.state.lock().await.calls.clone()
    }

    /// Clear all configured behaviors, delays, and the call log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.delays.clear();
        guard.fallback = None;
        guard.calls.clear();
    }
}

/// A provider that defers all behavior to an external controller.
pub struct DynamicMockProvider {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockProvider {
    /// Create a new dynamic mock provider and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn MeasurementProvider>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn MeasurementProvider>, controller)
    }
}

#[async_trait]
impl MeasurementProvider for DynamicMockProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn measurements(&self, window: TimeRange) -> Result<Vec<Reading>, HackairError> {
        // Snapshot the rule without holding the lock across await points
        let (behavior, delay) = {
            let mut guard = self.state.lock().await;
            guard.calls.push(window);
            let behavior = guard
                .rules
                .get(&window.start)
                .or(guard.fallback.as_ref())
                .cloned();
            (behavior, guard.delays.get(&window.start).copied())
        };

        if let Some(d) = delay {
            tokio::time::sleep(d).await;
        }

        match behavior {
            Some(MockBehavior::Return(readings)) => Ok(readings),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Ok(Vec::new()),
        }
    }
}
