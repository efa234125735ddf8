//! Simulated provider behavior.

use brandforge_core::error::{BrandforgeError, Result};
use rand::Rng;
use std::time::Duration;

/// Latency and failure characteristics shared by the in-memory providers.
///
/// Every provider call awaits the configured latency before answering,
/// mirroring a real backend round-trip. A non-zero `failure_rate` makes the
/// call fail with a retryable `Provider` error with that probability;
/// failures never mutate provider state.
#[derive(Debug, Clone, Copy)]
pub struct MockBehavior {
    latency: Duration,
    failure_rate: f64,
}

impl Default for MockBehavior {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(600),
            failure_rate: 0.0,
        }
    }
}

impl MockBehavior {
    /// Creates a behavior with the given latency and no failures.
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            failure_rate: 0.0,
        }
    }

    /// Zero latency, no failures. The behavior tests run with.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Sets the probability (0.0..=1.0) that a call fails transiently.
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Simulates one provider round-trip.
    ///
    /// # Errors
    ///
    /// Returns `BrandforgeError::Provider` when failure injection fires.
    pub async fn simulate(&self, operation: &str) -> Result<()> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.failure_rate > 0.0 && rand::thread_rng().gen_bool(self.failure_rate) {
            tracing::warn!(operation, "injected transient provider failure");
            return Err(BrandforgeError::provider(format!(
                "{operation} temporarily unavailable"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_instant_behavior_never_fails() {
        let behavior = MockBehavior::instant();
        for _ in 0..10 {
            behavior.simulate("list brands").await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_certain_failure_is_retryable() {
        let behavior = MockBehavior::instant().with_failure_rate(1.0);
        let err = behavior.simulate("list brands").await.unwrap_err();
        assert!(err.is_retryable());
    }
}
