use std::time::{Duration, Instant};

use tokio::time::{interval, Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::handle::FrameHandle;

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Cancellable frame ticker.
pub struct FrameLoop {
    ticker: Interval,
    token: CancellationToken,
}

impl FrameLoop {
    /// Start ticking every `period`. Must be called inside a tokio runtime.
    pub fn start(period: Duration) -> (Self, FrameHandle) {
        let mut ticker = interval(period.max(MIN_PERIOD));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let token = CancellationToken::new();
        debug!(period_ms = period.as_millis() as u64, "frame loop started");
        (
            Self {
                ticker,
                token: token.clone(),
            },
            FrameHandle::new(token),
        )
    }

    /// Wait for the next frame. Returns `None` once the loop is cancelled,
    /// including while waiting.
    pub async fn next_frame(&mut self) -> Option<Instant> {
        if self.token.is_cancelled() {
            return None;
        }
        tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                debug!("frame loop cancelled");
                None
            }
            tick = self.ticker.tick() => Some(tick.into_std()),
        }
    }

    pub fn handle(&self) -> FrameHandle {
        FrameHandle::new(self.token.clone())
    }
}

/// Tick period for a target frame rate. Zero is treated as one frame a second.
pub fn frame_period(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / fps.max(1) as f64)
}
