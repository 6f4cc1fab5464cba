use crate::time::{Duration, Instant};

/// Tracks when the current slow cycle started, for the countdown bar.
#[derive(Debug, Clone, Copy)]
pub struct CycleClock {
    started_at: Instant,
    period: Duration,
}

impl CycleClock {
    pub fn new(now: Instant, period: Duration) -> Self {
        Self {
            started_at: now,
            period,
        }
    }

    pub fn restart(&mut self, now: Instant) {
        self.started_at = now;
    }

    /// Saturates to zero if `now` precedes the cycle start.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    pub fn progress(&self, now: Instant) -> Progress {
        Progress::new(self.elapsed(now), self.period)
    }
}

/// Snapshot of the countdown bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub elapsed: Duration,
    pub period: Duration,
}

impl Progress {
    pub fn new(elapsed: Duration, period: Duration) -> Self {
        Self { elapsed, period }
    }

    /// Remaining bar width in percent, 100 at cycle start and 0 at its end.
    pub fn bar_width(&self) -> f64 {
        let period_ms = self.period.as_secs_f64() * 1000.0;
        if period_ms <= 0.0 {
            return 0.0;
        }
        let elapsed_ms = self.elapsed.as_secs_f64() * 1000.0;
        (100.0 * (1.0 - elapsed_ms / period_ms)).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn bar_drains_linearly_over_cycle() {
        let t0 = Instant::now();
        let clock = CycleClock::new(t0, ms(5000));
        assert_eq!(clock.progress(t0).bar_width(), 100.0);
        // 100 - elapsed_ms / 50 with the default cycle.
        assert!((clock.progress(t0 + ms(2500)).bar_width() - 50.0).abs() < 1e-9);
        assert_eq!(clock.progress(t0 + ms(5000)).bar_width(), 0.0);
        assert_eq!(clock.progress(t0 + ms(9000)).bar_width(), 0.0);
    }

    #[test]
    fn restart_resets_elapsed() {
        let t0 = Instant::now();
        let mut clock = CycleClock::new(t0, ms(5000));
        clock.restart(t0 + ms(5000));
        assert_eq!(clock.elapsed(t0 + ms(5100)), ms(100));
        assert!((clock.progress(t0 + ms(5100)).bar_width() - 98.0).abs() < 1e-9);
    }

    #[test]
    fn earlier_instant_saturates() {
        let t0 = Instant::now();
        let clock = CycleClock::new(t0 + ms(10), ms(5000));
        assert_eq!(clock.elapsed(t0), Duration::ZERO);
    }

    #[test]
    fn zero_period_is_empty_bar() {
        assert_eq!(Progress::new(ms(1), Duration::ZERO).bar_width(), 0.0);
    }
}
