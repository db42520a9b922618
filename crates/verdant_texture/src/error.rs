//! # Texture Error Types
//!
//! All errors that can occur while synthesizing or registering textures.

use thiserror::Error;

/// Boxed error returned by an engine collaborator.
pub type EngineError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur in the texture system.
#[derive(Error, Debug)]
pub enum TextureError {
    /// Zero or overflowing geometry, or a pixel count that does not match it.
    #[error("invalid dimensions: {width}x{height} with {pixels} pixels")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Number of pixels supplied (or that would have been produced).
        pixels: usize,
    },

    /// Noise variance must be finite and non-negative.
    #[error("invalid noise variance: {0}")]
    InvalidVariance(f64),

    /// The engine refused the bitmap.
    #[error("engine rejected texture `{name}`: {source}")]
    Engine {
        /// Texture name that failed to register.
        name: String,
        /// Error reported by the engine.
        #[source]
        source: EngineError,
    },
}

/// Result type for texture operations.
pub type TextureResult<T> = Result<T, TextureError>;
