use std::time::{Duration, Instant};

use crate::config::TICK_INTERVAL_MS;

/// Fixed-cadence tick driver.
///
/// The scheduler is disarmed whenever the game cannot advance and re-armed
/// from scratch once it can, so a stale interval never fires into a state that
/// just changed under it.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    last_fire: Option<Instant>,
}

impl TickScheduler {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fire: None,
        }
    }

    /// Returns true when a tick is due at `now`.
    ///
    /// `runnable` reports whether the game currently satisfies the tick
    /// preconditions.
    pub fn poll(&mut self, now: Instant, runnable: bool) -> bool {
        if !runnable {
            self.last_fire = None;
            return false;
        }

        match self.last_fire {
            None => {
                self.last_fire = Some(now);
                false
            }
            Some(last) if now.saturating_duration_since(last) >= self.interval => {
                self.last_fire = Some(now);
                true
            }
            Some(_) => false,
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.last_fire.is_some()
    }

    /// Time left before the next tick, or the full interval when disarmed.
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Duration {
        match self.last_fire {
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
            None => self.interval,
        }
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_INTERVAL_MS))
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::TickScheduler;

    const INTERVAL: Duration = Duration::from_millis(200);

    #[test]
    fn fires_once_per_interval_after_arming() {
        let start = Instant::now();
        let mut scheduler = TickScheduler::new(INTERVAL);

        assert!(!scheduler.poll(start, true));
        assert!(scheduler.is_armed());
        assert!(!scheduler.poll(start + Duration::from_millis(199), true));
        assert!(scheduler.poll(start + INTERVAL, true));
        assert!(!scheduler.poll(start + INTERVAL + Duration::from_millis(10), true));
        assert!(scheduler.poll(start + INTERVAL * 2, true));
    }

    #[test]
    fn failing_precondition_cancels_and_rearms_fresh() {
        let start = Instant::now();
        let mut scheduler = TickScheduler::new(INTERVAL);
        scheduler.poll(start, true);

        assert!(!scheduler.poll(start + INTERVAL, false));
        assert!(!scheduler.is_armed());

        // Re-arming restarts the full interval.
        let resumed = start + INTERVAL * 3;
        assert!(!scheduler.poll(resumed, true));
        assert!(!scheduler.poll(resumed + Duration::from_millis(150), true));
        assert!(scheduler.poll(resumed + INTERVAL, true));
    }

    #[test]
    fn time_until_next_counts_down() {
        let start = Instant::now();
        let mut scheduler = TickScheduler::default();

        assert_eq!(scheduler.time_until_next(start), INTERVAL);
        scheduler.poll(start, true);
        assert_eq!(
            scheduler.time_until_next(start + Duration::from_millis(50)),
            Duration::from_millis(150)
        );
        assert_eq!(
            scheduler.time_until_next(start + Duration::from_millis(500)),
            Duration::ZERO
        );
    }
}
