//! hackair-mock
//!
//! Measurement providers for tests and demos that never touch the network.
//!
//! - [`MockProvider`] serves deterministic fixture readings for any window.
//! - [`DynamicMockProvider`] defers every call to a test-side controller.
#![warn(missing_docs)]

use async_trait::async_trait;
use hackair_core::{HackairError, MeasurementProvider, Reading, TimeRange};

mod dynamic;
/// Fixture grid served by [`MockProvider`].
pub mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockProvider, MockBehavior};

/// Mock provider for CI-safe tests. Serves readings from a fixed 20 minute grid.
///
/// Readings are returned newest first so callers exercise their own ordering.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockProvider;

impl MockProvider {
    /// Create a new fixture provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MeasurementProvider for MockProvider {
    fn name(&self) -> &'static str {
        "hackair-mock"
    }

    async fn measurements(&self, window: TimeRange) -> Result<Vec<Reading>, HackairError> {
        Ok(fixtures::readings_in(window))
    }
}
