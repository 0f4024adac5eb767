//! Color Adjuster: the global HSL transform applied to the palette each frame.

mod adjuster;
mod hsl;

pub use adjuster::*;
pub use hsl::*;
