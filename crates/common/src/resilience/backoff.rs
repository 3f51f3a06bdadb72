//! Fixed backoff schedule bounded by an attempt count.

use std::time::Duration;

/// Ordered sequence of waits between attempts.
///
/// Retry `n` (1-based) waits `delays[n - 1]`. When the attempt budget is
/// larger than the schedule, the last delay is reused; an empty schedule
/// retries immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackoffSchedule {
    max_attempts: u32,
    delays: Vec<Duration>,
}

impl BackoffSchedule {
    /// Create a schedule. `max_attempts` is clamped to at least one.
    pub fn new(max_attempts: u32, delays: Vec<Duration>) -> Self {
        Self { max_attempts: max_attempts.max(1), delays }
    }

    /// Build a schedule from millisecond delays (config representation).
    pub fn from_millis(max_attempts: u32, delays_ms: &[u64]) -> Self {
        Self::new(max_attempts, delays_ms.iter().copied().map(Duration::from_millis).collect())
    }

    /// Doubling schedule starting at `initial`, one delay per retry.
    pub fn exponential(max_attempts: u32, initial: Duration) -> Self {
        let retries = max_attempts.max(1) - 1;
        let delays = (0..retries)
            .map(|shift| initial.saturating_mul(1u32 << shift.min(16)))
            .collect();
        Self::new(max_attempts, delays)
    }

    /// Total number of attempts allowed.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Configured delays, in order.
    pub fn delays(&self) -> &[Duration] {
        &self.delays
    }

    /// Whether another attempt is allowed after `attempts_made` attempts.
    pub fn allows_another(&self, attempts_made: u32) -> bool {
        attempts_made < self.max_attempts
    }

    /// Delay to wait before retry number `retry` (1-based).
    pub fn delay_before_retry(&self, retry: u32) -> Duration {
        if retry == 0 {
            return Duration::ZERO;
        }
        let index = (retry - 1) as usize;
        self.delays
            .get(index)
            .or_else(|| self.delays.last())
            .copied()
            .unwrap_or(Duration::ZERO)
    }

    /// Sum of all waits a call that exhausts its attempts will incur.
    pub fn worst_case_delay(&self) -> Duration {
        (1..self.max_attempts)
            .map(|retry| self.delay_before_retry(retry))
            .fold(Duration::ZERO, Duration::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAYS_MS: [u64; 3] = [2_000, 4_000, 8_000];

    fn three_attempts() -> BackoffSchedule {
        BackoffSchedule::from_millis(3, &DELAYS_MS)
    }

    #[test]
    fn schedule_follows_configured_delays() {
        let schedule = three_attempts();
        assert_eq!(schedule.max_attempts(), 3);
        assert_eq!(schedule.delay_before_retry(1), Duration::from_secs(2));
        assert_eq!(schedule.delay_before_retry(2), Duration::from_secs(4));
        assert_eq!(schedule.delay_before_retry(3), Duration::from_secs(8));
    }

    #[test]
    fn retry_zero_has_no_delay() {
        assert_eq!(three_attempts().delay_before_retry(0), Duration::ZERO);
    }

    #[test]
    fn delays_beyond_schedule_reuse_last_entry() {
        let schedule = BackoffSchedule::from_millis(6, &[10, 20]);
        assert_eq!(schedule.delay_before_retry(3), Duration::from_millis(20));
        assert_eq!(schedule.delay_before_retry(5), Duration::from_millis(20));
    }

    #[test]
    fn empty_schedule_retries_immediately() {
        let schedule = BackoffSchedule::new(3, Vec::new());
        assert_eq!(schedule.delay_before_retry(1), Duration::ZERO);
    }

    #[test]
    fn max_attempts_clamped_to_one() {
        let schedule = BackoffSchedule::new(0, vec![Duration::from_secs(1)]);
        assert_eq!(schedule.max_attempts(), 1);
        assert!(schedule.allows_another(0));
        assert!(!schedule.allows_another(1));
    }

    #[test]
    fn worst_case_counts_only_retries_within_budget() {
        // three attempts -> two waits (2s + 4s)
        assert_eq!(three_attempts().worst_case_delay(), Duration::from_secs(6));
        assert_eq!(
            BackoffSchedule::from_millis(4, &DELAYS_MS).worst_case_delay(),
            Duration::from_secs(14)
        );
    }

    #[test]
    fn exponential_doubles() {
        let schedule = BackoffSchedule::exponential(4, Duration::from_millis(100));
        assert_eq!(
            schedule.delays(),
            &[Duration::from_millis(100), Duration::from_millis(200), Duration::from_millis(400)]
        );
    }
}
