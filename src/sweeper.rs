use std::sync::Arc;
use tokio::time::{Duration, MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::clock::Clock;
use crate::metrics::TRACKED_CLIENTS;
use crate::rate_limit::RateLimiter;

// One sweep: drop clients with nothing left in their window
pub fn sweep_once(limiter: &RateLimiter, clock: &dyn Clock) -> usize {
    let evicted = limiter.purge_expired(clock.now());
    TRACKED_CLIENTS.set(limiter.tracked_clients() as f64);
    evicted
}

// Idle client sweeper - runs every `sweep_interval` for the life of the process
pub async fn idle_sweeper(
    limiter: Arc<RateLimiter>,
    clock: Arc<dyn Clock>,
    sweep_interval: Duration,
) {
    let mut interval = interval(sweep_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(interval = ?sweep_interval, "idle client sweeper started");

    loop {
        interval.tick().await;

        let evicted = sweep_once(&limiter, clock.as_ref());
        if evicted > 0 {
            info!(evicted, remaining = limiter.tracked_clients(), "evicted idle clients");
        } else {
            debug!(remaining = limiter.tracked_clients(), "sweep found no idle clients");
        }
    }
}
