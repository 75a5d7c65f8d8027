use std::sync::Arc;
use crate::clock::Clock;
use crate::rate_limit::{Decision, RateLimiter};
// app's shared state

#[derive(Clone)]
pub struct AppState {
    pub limiter: Arc<RateLimiter>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(limiter: RateLimiter, clock: Arc<dyn Clock>) -> Self {
        Self {
            limiter: Arc::new(limiter),
            clock,
        }
    }

    // Decision endpoint: rate check for `key` at the clock's current instant
    pub fn check(&self, key: &str) -> Decision {
        self.limiter.decide(key, self.clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;
    use std::time::Duration;

    #[test]
    fn check_reads_time_from_the_injected_clock() {
        let clock = Arc::new(MockClock::new());
        let state = AppState::new(RateLimiter::new(1, Duration::from_secs(1)), clock.clone());

        assert!(state.check("k").allowed);
        assert!(!state.check("k").allowed);

        clock.advance(Duration::from_secs(1));
        assert!(state.check("k").allowed);
    }
}
