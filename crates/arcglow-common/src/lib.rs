pub mod errors;
pub mod types;

pub use errors::{ArcglowError, ConfigError, RendererError};
pub use types::{Color, Rgba};

pub type Result<T> = std::result::Result<T, ArcglowError>;
