//! Fixed spacing between outbound HTTP requests.

use std::time::Duration;

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};

/// Lets one request through per `period`; the first request is never delayed.
///
/// This is the only backpressure the collectors apply. A zero period turns
/// the pacer into a no-op.
pub struct RequestPacer {
    period: Duration,
    limiter: Option<DefaultDirectRateLimiter>,
}

impl RequestPacer {
    pub fn new(period: Duration) -> Self {
        let limiter = Quota::with_period(period).map(RateLimiter::direct);
        Self { period, limiter }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Waits until the next request may be sent.
    pub async fn wait(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }
}

impl std::fmt::Debug for RequestPacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestPacer").field("period", &self.period).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[tokio::test]
    async fn spaces_consecutive_requests() {
        let pacer = RequestPacer::new(Duration::from_millis(50));
        let started = Instant::now();
        pacer.wait().await;
        assert!(started.elapsed() < Duration::from_millis(40), "first permit is immediate");
        pacer.wait().await;
        pacer.wait().await;
        assert!(started.elapsed() >= Duration::from_millis(90));
    }

    #[tokio::test]
    async fn zero_period_never_waits() {
        let pacer = RequestPacer::new(Duration::ZERO);
        let started = Instant::now();
        for _ in 0..100 {
            pacer.wait().await;
        }
        assert!(started.elapsed() < Duration::from_millis(50));
    }
}
