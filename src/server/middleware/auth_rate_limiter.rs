//! Login rate limiter for brute force protection

use crate::config::LoginLimitConfig;
use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Brute force protection for the login endpoint
pub struct AuthRateLimiter {
    /// Map of client identifier -> tracker
    attempts: DashMap<String, AuthAttemptTracker>,
    /// Maximum failed attempts before lockout
    max_attempts: u32,
    /// Time window for counting failures (seconds)
    window_secs: u64,
    /// Lockout duration (seconds), doubled on each repeated lockout
    base_lockout_secs: u64,
}

/// Tracks login attempts for a single client
struct AuthAttemptTracker {
    failure_count: u32,
    window_start: Instant,
    lockout_until: Option<Instant>,
    lockout_count: u32,
}

impl AuthAttemptTracker {
    fn new(now: Instant) -> Self {
        Self {
            failure_count: 0,
            window_start: now,
            lockout_until: None,
            lockout_count: 0,
        }
    }
}

impl Default for AuthRateLimiter {
    fn default() -> Self {
        Self::from_config(&LoginLimitConfig::default())
    }
}

impl AuthRateLimiter {
    pub fn new(max_attempts: u32, window_secs: u64, base_lockout_secs: u64) -> Self {
        Self {
            attempts: DashMap::new(),
            max_attempts,
            window_secs,
            base_lockout_secs,
        }
    }

    pub fn from_config(config: &LoginLimitConfig) -> Self {
        Self::new(
            config.max_attempts,
            config.window_secs,
            config.base_lockout_secs,
        )
    }

    /// `Err(seconds)` while the client is locked out
    pub fn check_allowed(&self, client_id: &str) -> Result<(), u64> {
        let now = Instant::now();

        let mut entry = self
            .attempts
            .entry(client_id.to_string())
            .or_insert_with(|| AuthAttemptTracker::new(now));
        let tracker = entry.value_mut();

        if let Some(lockout_until) = tracker.lockout_until {
            if now < lockout_until {
                // Never report a 0 second wait
                let remaining = lockout_until.duration_since(now).as_secs().max(1);
                return Err(remaining);
            }
            tracker.lockout_until = None;
        }

        if now.duration_since(tracker.window_start) > Duration::from_secs(self.window_secs) {
            tracker.failure_count = 0;
            tracker.window_start = now;
        }

        Ok(())
    }

    /// Count a failed login; returns the lockout length if one starts
    pub fn record_failure(&self, client_id: &str) -> Option<u64> {
        let now = Instant::now();

        let mut entry = self
            .attempts
            .entry(client_id.to_string())
            .or_insert_with(|| AuthAttemptTracker::new(now));
        let tracker = entry.value_mut();
        tracker.failure_count += 1;

        if tracker.failure_count >= self.max_attempts {
            let multiplier = 2u64.saturating_pow(tracker.lockout_count);
            let lockout_secs = self.base_lockout_secs.saturating_mul(multiplier);

            tracker.lockout_until = Some(now + Duration::from_secs(lockout_secs));
            tracker.lockout_count += 1;
            tracker.failure_count = 0;

            tracing::warn!(
                "Client {} locked out of login for {} seconds (lockout #{})",
                client_id,
                lockout_secs,
                tracker.lockout_count
            );

            return Some(lockout_secs);
        }

        None
    }

    pub fn record_success(&self, client_id: &str) {
        self.attempts.remove(client_id);
    }

    pub fn cleanup_old_entries(&self) {
        let now = Instant::now();
        let max_age = Duration::from_secs(self.window_secs.saturating_mul(2));

        self.attempts.retain(|_, tracker| {
            now.duration_since(tracker.window_start) < max_age
                || tracker.lockout_until.is_some_and(|until| until > now)
        });
    }

    /// Number of clients currently tracked
    pub fn tracked_clients(&self) -> usize {
        self.attempts.len()
    }
}
