//! Fixed courtesy delay between successive requests
//!
//! The crawl is strictly sequential; a `Pacer` only makes sure two requests
//! of the same kind are at least `delay` apart.

use std::time::{Duration, Instant};

/// Enforces a minimum gap between successive requests
#[derive(Debug, Clone)]
pub struct Pacer {
    /// Minimum time between two requests
    delay: Duration,

    /// When the previous request was released
    last_request: Option<Instant>,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_request: None,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Time left before the next request may go out, if any
    pub fn time_until_ready(&self, now: Instant) -> Option<Duration> {
        let last = self.last_request?;
        let ready_at = last + self.delay;
        if ready_at > now {
            Some(ready_at - now)
        } else {
            None
        }
    }

    /// Records that a request went out at `now`
    pub fn record_request(&mut self, now: Instant) {
        self.last_request = Some(now);
    }

    /// Sleeps until the next request may go out, then records it
    pub async fn wait(&mut self) {
        if let Some(wait) = self.time_until_ready(Instant::now()) {
            tracing::trace!("Pacing: sleeping {:?}", wait);
            tokio::time::sleep(wait).await;
        }
        self.record_request(Instant::now());
    }
}
