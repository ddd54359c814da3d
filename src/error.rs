//! Error types for configuration loading

use thiserror::Error;

/// Errors raised while building the arena or loading tuning data.
///
/// The simulation itself never fails; everything here is rejected before a
/// session starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid arena size: {width}x{height} (both must be positive and finite)")]
    InvalidArena { width: f32, height: f32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Value out of range: {field} {reason}")]
    OutOfRange { field: &'static str, reason: String },
}
