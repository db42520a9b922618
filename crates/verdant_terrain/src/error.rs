//! # Terrain Error Types

use thiserror::Error;

/// Boxed error returned by a terrain generator.
pub type GeneratorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while validating, loading or applying a config.
#[derive(Error, Debug)]
pub enum TerrainError {
    /// A numeric field is outside its allowed range.
    #[error("{field} out of range: {value}")]
    OutOfRange {
        /// Path of the offending field, e.g. `elevations[2].biomes[0].max_temp`.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// A biome or vegetation entry has an empty name.
    #[error("empty name at {0}")]
    EmptyName(String),

    /// The preset file could not be read.
    #[error("failed to read preset: {0}")]
    Io(#[from] std::io::Error),

    /// The preset is not valid TOML for a terrain config.
    #[error("invalid preset: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be written as TOML.
    #[error("failed to serialize preset: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The terrain generator failed.
    #[error("terrain generator failed: {0}")]
    Generator(#[source] GeneratorError),
}

/// Result type for terrain config operations.
pub type TerrainResult<T> = Result<T, TerrainError>;
