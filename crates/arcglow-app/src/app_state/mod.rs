//! Top-level application state.
//!
//! Owns the config, the render settings and the controls that edit them,
//! and drives single-frame output and the animation loop.

mod animate;
mod core;
mod overrides;
mod render;


pub use animate::{frame_file_name, AnimateOptions};
pub use core::ArcglowApp;
pub use overrides::{Overrides, PickRequest};
