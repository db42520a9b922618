//! # Default World
//!
//! The terrain config new games start from, both as code and as the
//! shipped TOML preset.

use verdant_terrain::{TerrainConfig, TerrainResult};

/// The default world preset, as shipped.
pub const DEFAULT_PRESET: &str = include_str!("../presets/default_world.toml");

/// Builds the default world for a map of `map_size` tiles of `tile_size` pixels.
///
/// Elevations from lowest to highest: water, beach, a temperate band split
/// by temperature, bare earth, and walled mountains.
#[must_use]
pub fn default_world(map_size: u32, tile_size: u32) -> TerrainConfig {
    let mut config = TerrainConfig::new(map_size, tile_size);
    config.set_parameters(16, 3, 6);

    config.add_elevation_level(0.57).add_biome("water").blocking(true);
    config.add_elevation_level(0.0175).add_biome("beach");

    let mut ground = config.add_elevation_level(0.11);
    ground.add_biome("snow").max_temp(30.0);
    ground.add_biome("grass").max_temp(70.0);
    ground.add_biome("sand").max_temp(100.0);

    config.add_elevation_level(0.01).add_biome("earth");
    config
        .add_elevation_level(0.2925)
        .add_biome("earth")
        .wall("mountain_wall")
        .max_height(32)
        .wall_height(2);

    config
}

/// Parses [`DEFAULT_PRESET`].
///
/// # Errors
///
/// [`verdant_terrain::TerrainError::Parse`] if the shipped preset is broken.
pub fn default_preset() -> TerrainResult<TerrainConfig> {
    TerrainConfig::from_toml_str(DEFAULT_PRESET)
}
