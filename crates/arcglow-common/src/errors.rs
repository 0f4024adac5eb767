use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSurface { width: u32, height: u32 },

    #[error("frame encode error: {0}")]
    Encode(String),

    #[error("frame output error: {0}")]
    Io(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ArcglowError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Renderer(#[from] RendererError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
