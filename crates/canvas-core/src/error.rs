use thiserror::Error;

/// Failures surfaced by the simulation core.
///
/// None of these are fatal to a mounted canvas: the caller skips the frame or
/// the regeneration and tries again on the next event.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("invalid canvas dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("unknown canvas variant `{0}`")]
    UnknownVariant(String),

    #[error("invalid canvas config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("invalid canvas setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    #[error("render loop already stopped")]
    AlreadyStopped,
}

pub type Result<T> = std::result::Result<T, CanvasError>;
