use dashmap::DashMap;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

// Sliding window log for one client.
// Only admitted requests are recorded, so it never holds more than `limit` instants.
#[derive(Debug, Default)]
pub struct WindowState {
    hits: VecDeque<Instant>,
}

impl WindowState {
    // drop every instant that is `window` old or older
    fn expire(&mut self, now: Instant, window: Duration) {
        self.hits
            .retain(|hit| now.saturating_duration_since(*hit) < window);
    }

    fn record(&mut self, now: Instant) {
        self.hits.push_back(now);
    }

    fn oldest(&self) -> Option<Instant> {
        self.hits.iter().min().copied()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Outcome of one rate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub allowed: bool,
    pub limit: usize,
    /// Admissions left in the current window after this decision.
    pub remaining: usize,
    /// Set on denial: time until the oldest counted request leaves the window.
    pub retry_after: Option<Duration>,
}

/// Per-client registry of sliding windows.
///
/// Each key's read-modify-write runs under the DashMap shard guard for that
/// key, so concurrent callers on the same key can never both be admitted as
/// the last slot.
pub struct RateLimiter {
    clients: DashMap<String, WindowState>,
    limit: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(limit: usize, window: Duration) -> Self {
        Self {
            clients: DashMap::new(),
            limit,
            window,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    // Is this client allowed to proceed at `now`?
    pub fn allow(&self, key: &str, now: Instant) -> bool {
        self.decide(key, now).allowed
    }

    pub fn decide(&self, key: &str, now: Instant) -> Decision {
        let mut entry = self.clients.entry(key.to_string()).or_default();
        entry.expire(now, self.window);

        // under limit.? record and allow
        if entry.len() < self.limit {
            entry.record(now);
            return Decision {
                allowed: true,
                limit: self.limit,
                remaining: self.limit - entry.len(),
                retry_after: None,
            };
        }

        // over limit, nothing recorded
        let retry_after = entry
            .oldest()
            .map(|hit| self.window.saturating_sub(now.saturating_duration_since(hit)));
        Decision {
            allowed: false,
            limit: self.limit,
            remaining: 0,
            retry_after,
        }
    }

    /// Forget every client.
    pub fn reset(&self) {
        self.clients.clear();
    }

    /// Evicts clients whose recorded requests have all expired at `now`.
    /// Returns how many were removed.
    pub fn purge_expired(&self, now: Instant) -> usize {
        let window = self.window;
        let before = self.clients.len();
        self.clients.retain(|_, state| {
            state.expire(now, window);
            !state.is_empty()
        });
        before.saturating_sub(self.clients.len())
    }

    pub fn tracked_clients(&self) -> usize {
        self.clients.len()
    }
}
