use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,

    #[error("invalid sphere #{index}: {reason}")]
    InvalidSphere { index: usize, reason: String },

    #[error("invalid light #{index}: {reason}")]
    InvalidLight { index: usize, reason: String },

    #[error("invalid viewport {width}x{height}: {reason}")]
    InvalidViewport {
        width: u32,
        height: u32,
        reason: String,
    },

    #[error("invalid room: {0}")]
    InvalidRoom(String),

    #[error("eye distance must be positive and finite, got {0}")]
    InvalidEyeDistance(f64),

    #[error("scene file not found: {0}")]
    SceneNotFound(PathBuf),

    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
