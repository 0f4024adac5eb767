//! arcglow configuration system.
//!
//! Provides TOML-based configuration with live reload and full validation.
//! All config sections use the reset-control defaults so partial configs
//! work out of the box.

pub mod colors;
pub mod defaults;
pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

// Re-export core types for convenience
pub use colors::{format_hex, parse_palette, palette_to_text};
pub use reload::ReloadManager;
pub use schema::ArcglowConfig;
pub use watcher::ConfigWatcher;
