//! Frame timing for the animation loop.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const DEFAULT_WINDOW: usize = 120;

/// Rolling window of frame intervals.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Option<Instant>,
    max_samples: usize,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            frame_times: VecDeque::with_capacity(DEFAULT_WINDOW),
            last_frame: None,
            max_samples: DEFAULT_WINDOW,
        }
    }

    /// Record a frame presented at `now`. The first call only sets the
    /// reference point.
    pub fn record_frame(&mut self, now: Instant) {
        if let Some(last) = self.last_frame.replace(now) {
            self.frame_times
                .push_back(now.saturating_duration_since(last));
            if self.frame_times.len() > self.max_samples {
                self.frame_times.pop_front();
            }
        }
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        let total = self.total_secs();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.total_secs() / self.frame_times.len() as f64 * 1000.0
    }

    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    fn total_secs(&self) -> f64 {
        self.frame_times.iter().map(Duration::as_secs_f64).sum()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
