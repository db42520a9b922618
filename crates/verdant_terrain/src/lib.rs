//! # VERDANT Terrain Configuration
//!
//! Builds the parameters of the engine's terrain generator: elevation
//! levels, the biomes inside them, and the vegetation on each biome.
//!
//! ## Design Principles
//!
//! 1. **Order is identity**: Elevations are addressed by position, append-only
//! 2. **Typed builders**: Each `add_*` returns a handle to the new child
//! 3. **Range checks only**: Semantic consistency is the generator's call
//! 4. **Consumed once**: `apply` takes the config by value
//!
//! ## Example
//!
//! ```rust
//! use verdant_terrain::TerrainConfig;
//!
//! let mut config = TerrainConfig::new(1024, 16);
//! config.set_parameters(16, 3, 6);
//! config.add_elevation_level(0.57).add_biome("water").blocking(true);
//!
//! let mut ground = config.add_elevation_level(0.11);
//! ground.add_biome("snow").max_temp(30.0);
//! ground.add_biome("grass").max_temp(70.0).add_vegetation("tree", 0.05);
//!
//! assert_eq!(config.elevations().len(), 2);
//! assert!(config.validate().is_ok());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod generator;
pub mod preset;

pub use config::{
    Biome, BiomeBuilder, Elevation, ElevationBuilder, SamplingParameters, TerrainConfig,
    Vegetation,
};
pub use error::{GeneratorError, TerrainError, TerrainResult};
pub use generator::{ConfigCommand, TerrainGenerator};
