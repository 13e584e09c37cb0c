//! Unified error handling for ground track processing.
//!
//! Every fallible operation in the crate returns [`Result`], so callers can
//! decide per track whether to skip it or abort the whole render pass.

use thiserror::Error;

/// Errors raised while normalizing, segmenting or coloring tracks.
#[derive(Debug, Error)]
pub enum TrailError {
    /// A longitude was NaN or infinite.
    #[error("invalid longitude {value}: must be a finite number of degrees")]
    InvalidLongitude { value: f64 },

    /// A history entry was missing a coordinate or had an unusable latitude.
    #[error("malformed history point at index {index}: {reason}")]
    MalformedPoint { index: usize, reason: String },

    /// A palette was built without any colors.
    #[error("palette must contain at least one color")]
    EmptyPalette,

    /// A palette entry was not a `#rrggbb` string.
    #[error("invalid color {value:?}: expected #rrggbb")]
    InvalidColor { value: String },

    /// The process-wide configuration was installed twice.
    #[error("map configuration is already installed")]
    ConfigAlreadyInstalled,

    /// A configuration document could not be parsed.
    #[error("invalid map configuration: {0}")]
    Config(String),

    /// A tracks document could not be read or written as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File access failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for ground track operations.
pub type Result<T> = std::result::Result<T, TrailError>;

/// Extension trait for turning a missing value into a [`TrailError`].
pub trait OptionExt<T> {
    /// Convert `None` into [`TrailError::MalformedPoint`].
    fn ok_or_malformed(self, index: usize, reason: &str) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_malformed(self, index: usize, reason: &str) -> Result<T> {
        self.ok_or_else(|| TrailError::MalformedPoint {
            index,
            reason: reason.to_string(),
        })
    }
}
