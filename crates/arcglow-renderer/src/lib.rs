pub mod adjust;
pub mod animator;
pub mod clock;
pub mod frame_loop;
pub mod gradient;
pub mod perf;
pub mod renderer;
pub mod settings;
pub mod surface;

pub use adjust::{adjust_color, adjust_palette, HslAdjustment};
pub use animator::Animator;
pub use clock::AnimationClock;
pub use frame_loop::{frame_period, FrameHandle, FrameLoop};
pub use gradient::{build_color_stops, compose_frame, FrameLayers, GradientGeometry};
pub use perf::FrameTimer;
pub use renderer::{GradientRenderer, RenderPhase};
pub use settings::{FrameSnapshot, RenderSettings};
pub use surface::{PixelSurface, Surface};
