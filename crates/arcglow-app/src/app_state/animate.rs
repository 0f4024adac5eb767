//! The animation loop: tick, apply reloaded config, render, write a frame.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use arcglow_common::ArcglowError;
use arcglow_config::ArcglowConfig;
use arcglow_renderer::{frame_period, Animator, FrameLoop, PixelSurface};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::core::ArcglowApp;

const FPS_REPORT_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct AnimateOptions {
    /// Stop after this many frames; `None` runs until Ctrl-C.
    pub frames: Option<u64>,
    pub fps: u32,
    pub out_dir: PathBuf,
}

pub fn frame_file_name(index: u64) -> String {
    format!("frame-{index:05}.png")
}

impl ArcglowApp {
    /// Run the frame loop until the frame limit or Ctrl-C. Returns the
    /// number of frames written.
    pub async fn animate(
        &mut self,
        options: AnimateOptions,
        mut reload: Option<watch::Receiver<ArcglowConfig>>,
    ) -> Result<u64, ArcglowError> {
        if options.frames == Some(0) {
            return Ok(0);
        }
        std::fs::create_dir_all(&options.out_dir)?;

        let (width, height) = self.surface_size();
        let mut animator = Animator::new(PixelSurface::new(width, height)?);
        let (mut frames, handle) = FrameLoop::start(frame_period(options.fps));

        let interrupt = handle.clone();
        let signal_task = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("interrupt received, stopping animation");
                interrupt.cancel();
            }
        });

        info!(
            fps = options.fps,
            width,
            height,
            "animating into {}",
            options.out_dir.display()
        );
        self.settings.restart_clock(Instant::now());

        let mut written: u64 = 0;
        let mut last_report = Instant::now();
        let result = loop {
            let Some(now) = frames.next_frame().await else {
                break Ok(written);
            };

            if let Some(rx) = reload.as_mut() {
                if rx.has_changed().unwrap_or(false) {
                    let config = rx.borrow_and_update().clone();
                    self.apply_config(config, now);
                    let (width, height) = self.surface_size();
                    if let Err(e) = animator.surface_mut().resize(width, height) {
                        warn!("keeping current surface size: {e}");
                    }
                }
            }

            animator.frame(&self.settings, now);
            let path = options.out_dir.join(frame_file_name(written));
            if let Err(e) = animator.surface().save_png(&path) {
                handle.cancel();
                break Err(e.into());
            }
            written += 1;

            if now.saturating_duration_since(last_report) >= FPS_REPORT_INTERVAL {
                debug!(
                    fps = animator.timer().fps(),
                    frame_ms = animator.timer().frame_time_ms(),
                    "frame timing"
                );
                last_report = now;
            }

            if options.frames.is_some_and(|limit| written >= limit) {
                handle.cancel();
            }
        };

        signal_task.abort();
        if let Ok(count) = result {
            info!(frames = count, "animation stopped");
        }
        result
    }
}
