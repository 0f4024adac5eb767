//! Ties settings, renderer, and a surface together for one frame at a time.

use std::time::Instant;

use crate::perf::FrameTimer;
use crate::renderer::{GradientRenderer, RenderPhase};
use crate::settings::RenderSettings;
use crate::surface::Surface;

pub struct Animator<S: Surface> {
    surface: S,
    renderer: GradientRenderer,
    timer: FrameTimer,
}

impl<S: Surface> Animator<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            renderer: GradientRenderer::new(),
            timer: FrameTimer::new(),
        }
    }

    /// Render the frame for `now`. Settings are read once, up front.
    pub fn frame(&mut self, settings: &RenderSettings, now: Instant) -> RenderPhase {
        let snapshot = settings.snapshot(now);
        let phase = self
            .renderer
            .render(&mut self.surface, &snapshot.palette, snapshot.progress);
        self.timer.record_frame(now);
        phase
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn renderer(&self) -> &GradientRenderer {
        &self.renderer
    }

    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjust::HslAdjustment;
    use crate::surface::PixelSurface;
    use arcglow_common::Color;
    use std::time::Duration;

    #[test]
    fn frames_follow_settings() {
        let start = Instant::now();
        let mut settings = RenderSettings::new(
            vec![Color::from_rgb(255, 0, 0)],
            1000,
            HslAdjustment::default(),
            start,
        );
        let mut animator = Animator::new(PixelSurface::new(64, 16).unwrap());

        assert_eq!(animator.frame(&settings, start), RenderPhase::Rendering);
        let red = animator.surface().pixel(32, 15).unwrap();
        assert_eq!((red.r, red.g, red.b), (255, 0, 0));

        settings.set_adjustment(HslAdjustment::new(240, 100, 100));
        animator.frame(&settings, start + Duration::from_millis(16));
        let blue = animator.surface().pixel(32, 15).unwrap();
        assert_eq!((blue.r, blue.g, blue.b), (0, 0, 255));

        assert_eq!(animator.renderer().frames_rendered(), 2);
        assert_eq!(animator.timer().sample_count(), 1);
    }

    #[test]
    fn empty_palette_is_idle() {
        let now = Instant::now();
        let settings = RenderSettings::new(Vec::new(), 1000, HslAdjustment::default(), now);
        let mut animator = Animator::new(PixelSurface::new(8, 8).unwrap());
        assert_eq!(animator.frame(&settings, now), RenderPhase::Idle);
        let surface = animator.into_surface();
        assert!(surface.image().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }
}
