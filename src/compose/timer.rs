//! Timer - Injectable Delays
//!
//! Both timed transitions (the simulated send and the banner timeout) go
//! through [`Timer`], so hosts pick the clock and tests can run on tokio's
//! paused time.

use std::time::Duration;

use futures::future::BoxFuture;

/// Source of delays
pub trait Timer: Send + Sync {
    /// Complete after `duration` has elapsed
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()>;
}

/// Timer backed by `tokio::time`
///
/// The returned future must be polled inside a tokio runtime. It only
/// touches the runtime when first polled, so it can be built on the UI
/// thread and handed to [`run_in_tokio`](crate::services::runtime::run_in_tokio).
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    fn sleep(&self, duration: Duration) -> BoxFuture<'static, ()> {
        Box::pin(async move { tokio::time::sleep(duration).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn tokio_timer_follows_paused_clock() {
        let start = tokio::time::Instant::now();
        TokioTimer.sleep(Duration::from_millis(1500)).await;
        assert_eq!(start.elapsed(), Duration::from_millis(1500));
    }

    #[test]
    fn building_the_future_needs_no_runtime() {
        let _pending = TokioTimer.sleep(Duration::from_secs(1));
    }
}
