//! Frame scheduling: a ticker that can be cancelled from anywhere.

mod driver;
mod handle;

pub use driver::*;
pub use handle::*;
