//! Control layer: speed, palette and HSL inputs, each validated and then
//! committed to the render settings.

mod adjust;
mod palette;
mod parse;
mod sampler;
mod speed;


pub use adjust::*;
pub use palette::*;
pub use parse::*;
pub use sampler::*;
pub use speed::*;
