use std::sync::LazyLock;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct TimeStamp(Instant);

impl TimeStamp {
    /// Get a new timestamp for "now"
    pub fn now() -> Self {
        TimeStamp(Instant::now())
    }

    /// Returns the elapsed [`Duration`] since the timestamp.
    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Process-wide clock, forced as the first thing in `main`
pub static EPOCH: LazyLock<TimeStamp> = LazyLock::new(TimeStamp::now);

/// Global wall-clock budget of a run.
///
/// Before every probe the strategies ask [`TimeBudget::probe_limit`] for the time the next
/// solver call may take; `None` means the remaining time is at or below the safety margin
/// and the search must stop with what it has.
#[derive(Debug, Clone, Copy)]
pub struct TimeBudget {
    start: TimeStamp,
    max_runtime: Duration,
    safety_margin: Duration,
    /// Upper bound on the limit of a single solver call
    probe_cap: Option<Duration>,
}

impl TimeBudget {
    pub fn new(start: TimeStamp, max_runtime: Duration, safety_margin: Duration) -> Self {
        Self {
            start,
            max_runtime,
            safety_margin,
            probe_cap: None,
        }
    }

    /// Caps the limit of every single solver call at `cap`.
    pub fn with_probe_cap(self, cap: Duration) -> Self {
        Self {
            probe_cap: Some(cap),
            ..self
        }
    }

    /// Budget measured from process start
    pub fn from_epoch(max_runtime: Duration, safety_margin: Duration) -> Self {
        Self::new(*EPOCH, max_runtime, safety_margin)
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time left until the global deadline
    pub fn remaining(&self) -> Duration {
        self.max_runtime.saturating_sub(self.elapsed())
    }

    /// Hard limit for the next solver call: the remaining time minus the safety margin,
    /// bounded by the probe cap, or `None` if no further call may start.
    pub fn probe_limit(&self) -> Option<Duration> {
        let remaining = self.remaining();
        (remaining > self.safety_margin)
            .then(|| remaining - self.safety_margin)
            .map(|limit| self.probe_cap.map_or(limit, |cap| limit.min(cap)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_budget_allows_probes() {
        let budget = TimeBudget::new(
            TimeStamp::now(),
            Duration::from_secs(60),
            Duration::from_secs(5),
        );
        let limit = budget.probe_limit().unwrap();
        assert!(limit <= Duration::from_secs(55));
        assert!(limit > Duration::from_secs(50));
    }

    #[test]
    fn margin_at_or_above_runtime_is_exhausted() {
        let budget = TimeBudget::new(
            TimeStamp::now(),
            Duration::from_secs(5),
            Duration::from_secs(5),
        );
        assert!(budget.probe_limit().is_none());
    }

    #[test]
    fn limits_shrink_over_time() {
        let budget = TimeBudget::new(
            TimeStamp::now(),
            Duration::from_secs(60),
            Duration::from_secs(1),
        );
        let first = budget.probe_limit().unwrap();
        std::thread::sleep(Duration::from_millis(20));
        let second = budget.probe_limit().unwrap();
        assert!(second < first);
    }

    #[test]
    fn probe_cap_bounds_every_limit() {
        let budget = TimeBudget::new(
            TimeStamp::now(),
            Duration::from_secs(60),
            Duration::from_secs(1),
        )
        .with_probe_cap(Duration::from_secs(2));
        assert_eq!(budget.probe_limit(), Some(Duration::from_secs(2)));
    }
}
