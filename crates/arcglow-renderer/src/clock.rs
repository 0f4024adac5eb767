//! Cyclic animation clock.

use std::time::{Duration, Instant};

use arcglow_config::defaults::DEFAULT_DURATION_MS;

/// Start instant plus cycle length. Progress is `elapsed mod duration`
/// normalized into `[0, 1)`.
#[derive(Debug, Clone, Copy)]
pub struct AnimationClock {
    start: Instant,
    duration_ms: u32,
}

impl AnimationClock {
    /// A clock starting at `start`. A zero duration falls back to the default.
    pub fn new(start: Instant, duration_ms: u32) -> Self {
        Self {
            start,
            duration_ms: sanitize_duration(duration_ms),
        }
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    /// Begin a new cycle at `now`.
    pub fn restart(&mut self, now: Instant) {
        self.start = now;
    }

    /// Change the cycle length; takes effect from the next frame.
    pub fn set_duration(&mut self, duration_ms: u32) {
        self.duration_ms = sanitize_duration(duration_ms);
    }

    pub fn progress_at(&self, now: Instant) -> f64 {
        progress_for_elapsed(now.saturating_duration_since(self.start), self.duration_ms)
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(Instant::now(), DEFAULT_DURATION_MS)
    }
}

/// `(elapsed mod duration) / duration`, always in `[0, 1)`.
pub fn progress_for_elapsed(elapsed: Duration, duration_ms: u32) -> f64 {
    let duration_ms = sanitize_duration(duration_ms) as f64;
    let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
    let progress = (elapsed_ms % duration_ms) / duration_ms;
    if progress < 1.0 {
        progress
    } else {
        0.0
    }
}

/// A zero duration means the default cycle length.
pub(crate) fn sanitize_duration(duration_ms: u32) -> u32 {
    if duration_ms == 0 {
        DEFAULT_DURATION_MS
    } else {
        duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_fraction_of_cycle() {
        assert_eq!(progress_for_elapsed(Duration::ZERO, 1000), 0.0);
        assert!((progress_for_elapsed(Duration::from_millis(250), 1000) - 0.25).abs() < 1e-12);
        assert!((progress_for_elapsed(Duration::from_millis(2750), 1000) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn whole_cycles_wrap_to_zero() {
        assert_eq!(progress_for_elapsed(Duration::from_millis(9000), 9000), 0.0);
        assert_eq!(progress_for_elapsed(Duration::from_secs(18), 9000), 0.0);
    }

    #[test]
    fn zero_duration_uses_default() {
        let clock = AnimationClock::new(Instant::now(), 0);
        assert_eq!(clock.duration_ms(), 9000);
        assert!((progress_for_elapsed(Duration::from_millis(4500), 0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn progress_at_measures_from_start() {
        let start = Instant::now();
        let clock = AnimationClock::new(start, 2000);
        let p = clock.progress_at(start + Duration::from_millis(500));
        assert!((p - 0.25).abs() < 1e-9);
    }

    #[test]
    fn instants_before_start_read_as_zero() {
        let start = Instant::now() + Duration::from_secs(5);
        let clock = AnimationClock::new(start, 2000);
        assert_eq!(clock.progress_at(Instant::now()), 0.0);
    }

    #[test]
    fn restart_and_duration_change() {
        let start = Instant::now();
        let mut clock = AnimationClock::new(start, 1000);
        let later = start + Duration::from_millis(600);
        clock.restart(later);
        assert_eq!(clock.start(), later);
        assert_eq!(clock.progress_at(later), 0.0);

        clock.set_duration(3000);
        let p = clock.progress_at(later + Duration::from_millis(1500));
        assert!((p - 0.5).abs() < 1e-9);
    }
}
