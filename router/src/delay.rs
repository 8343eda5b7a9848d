use std::time::Duration;
use tokio::time::{sleep_until, Instant};
use tracing::instrument;

/// Holds a response back for a fixed number of seconds to emulate slow work.
///
/// The wait is a timer await, so every request counts down independently and
/// no worker thread is parked while it does.
#[derive(Debug, Clone, Copy)]
pub struct Delay {
    seconds: u64,
}

impl Delay {
    pub const DEFAULT_SECONDS: u64 = 20;

    pub fn from_secs(seconds: u64) -> Self {
        Self { seconds }
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    #[instrument(skip(self), fields(seconds = self.seconds))]
    pub async fn run(&self, route: &'static str) {
        let start = Instant::now();
        for remaining in (1..=self.seconds).rev() {
            tracing::info!(remaining, "{route}: responding in {remaining}s");
            // Deadlines are absolute so per-tick scheduling latency does not add up.
            let elapsed = self.seconds - remaining + 1;
            sleep_until(start + Duration::from_secs(elapsed)).await;
        }
        tracing::info!("{route}: delay finished");
    }
}

impl Default for Delay {
    fn default() -> Self {
        Self::from_secs(Self::DEFAULT_SECONDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn waits_exactly_the_configured_seconds() {
        let start = Instant::now();
        Delay::from_secs(20).run("multiply").await;
        assert_eq!(start.elapsed(), Duration::from_secs(20));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_seconds_returns_immediately() {
        let start = Instant::now();
        Delay::from_secs(0).run("chatstate").await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_delays_overlap() {
        let start = Instant::now();
        let delay = Delay::from_secs(5);
        tokio::join!(delay.run("multiply"), delay.run("chatstate"));
        assert_eq!(start.elapsed(), Duration::from_secs(5));
    }
}
