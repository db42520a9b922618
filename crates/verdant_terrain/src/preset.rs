//! # World Presets
//!
//! Terrain configs stored as TOML. Sequence order in the file is the
//! elevation order:
//!
//! ```toml
//! map_size = 1024
//! tile_size = 16
//! num_cells = 16
//!
//! [[elevation]]
//! quantity = 0.57
//!
//! [[elevation.biome]]
//! name = "water"
//! blocking = true
//! ```
//!
//! Omitted sampling parameters and biome attributes take their defaults.

use std::path::Path;

use crate::config::TerrainConfig;
use crate::error::TerrainResult;

impl TerrainConfig {
    /// Parses a preset.
    ///
    /// # Errors
    ///
    /// [`crate::TerrainError::Parse`] if the text is not a valid preset.
    pub fn from_toml_str(text: &str) -> TerrainResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Writes the config as a preset.
    ///
    /// # Errors
    ///
    /// [`crate::TerrainError::Serialize`] if a value cannot be written.
    pub fn to_toml_string(&self) -> TerrainResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Reads and parses a preset file.
    ///
    /// # Errors
    ///
    /// [`crate::TerrainError::Io`] or [`crate::TerrainError::Parse`].
    pub fn load(path: impl AsRef<Path>) -> TerrainResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            "Loaded terrain preset {} ({} elevations)",
            path.display(),
            config.elevations().len()
        );
        Ok(config)
    }
}
