//! # Terrain Configuration
//!
//! The parameters the engine's terrain generator runs on:
//!
//! ```text
//! TerrainConfig
//! ├── map_size, tile_size, num_cells, sample_factor, sample_distance
//! └── elevations (ordered)
//!     └── Elevation { quantity }
//!         └── biomes (ordered)
//!             └── Biome { name, max_temp, wall, max_height, wall_height, blocking }
//!                 └── vegetation (ordered)
//!                     └── Vegetation { name, quantity }
//! ```
//!
//! ## Ordering
//!
//! The generator addresses elevations by their position in the sequence, so
//! the position IS the identity. There is no API to remove, reorder or
//! deduplicate entries; builders only ever append.

use serde::{Deserialize, Serialize};

use crate::error::{TerrainError, TerrainResult};

/// Default number of anchor cells per map side.
pub const DEFAULT_NUM_CELLS: u32 = 16;
/// Default sampling multiplier.
pub const DEFAULT_SAMPLE_FACTOR: u32 = 3;
/// Default anchor sampling distance, in cells.
pub const DEFAULT_SAMPLE_DISTANCE: u32 = 6;
/// Default (and highest) biome temperature.
pub const MAX_TEMPERATURE: f64 = 100.0;

const fn default_num_cells() -> u32 {
    DEFAULT_NUM_CELLS
}

const fn default_sample_factor() -> u32 {
    DEFAULT_SAMPLE_FACTOR
}

const fn default_sample_distance() -> u32 {
    DEFAULT_SAMPLE_DISTANCE
}

const fn default_max_temp() -> f64 {
    MAX_TEMPERATURE
}

/// The three sampling parameters, passed by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplingParameters {
    /// Anchor cells per map side.
    pub num_cells: u32,
    /// Sampling multiplier.
    pub sample_factor: u32,
    /// Anchor sampling distance, in cells.
    pub sample_distance: u32,
}

impl Default for SamplingParameters {
    fn default() -> Self {
        Self {
            num_cells: DEFAULT_NUM_CELLS,
            sample_factor: DEFAULT_SAMPLE_FACTOR,
            sample_distance: DEFAULT_SAMPLE_DISTANCE,
        }
    }
}

/// A vegetation entry placed on a biome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Vegetation {
    /// Texture name of the plant.
    pub name: String,
    /// Relative frequency.
    pub quantity: f64,
}

/// A terrain type within an elevation level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Biome {
    name: String,
    #[serde(default = "default_max_temp")]
    max_temp: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wall: Option<String>,
    #[serde(default)]
    max_height: u32,
    #[serde(default)]
    wall_height: u32,
    #[serde(default)]
    blocking: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    vegetation: Vec<Vegetation>,
}

impl Biome {
    fn new(name: String) -> Self {
        Self {
            name,
            max_temp: MAX_TEMPERATURE,
            wall: None,
            max_height: 0,
            wall_height: 0,
            blocking: false,
            vegetation: Vec::new(),
        }
    }

    /// Ground texture name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Highest temperature this biome covers, in `(0, 100]`.
    #[must_use]
    pub const fn max_temp(&self) -> f64 {
        self.max_temp
    }

    /// Wall texture name, if the biome raises walls.
    #[must_use]
    pub fn wall(&self) -> Option<&str> {
        self.wall.as_deref()
    }

    /// Maximum terrain height.
    #[must_use]
    pub const fn max_height(&self) -> u32 {
        self.max_height
    }

    /// Height of wall tiles.
    #[must_use]
    pub const fn wall_height(&self) -> u32 {
        self.wall_height
    }

    /// Whether the biome blocks movement.
    #[must_use]
    pub const fn is_blocking(&self) -> bool {
        self.blocking
    }

    /// Vegetation entries, in insertion order.
    #[must_use]
    pub fn vegetation(&self) -> &[Vegetation] {
        &self.vegetation
    }
}

/// One elevation band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Elevation {
    quantity: f64,
    #[serde(default, rename = "biome", skip_serializing_if = "Vec::is_empty")]
    biomes: Vec<Biome>,
}

impl Elevation {
    /// Fraction of the total elevation mass this band takes.
    #[must_use]
    pub const fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Biomes, in insertion order.
    #[must_use]
    pub fn biomes(&self) -> &[Biome] {
        &self.biomes
    }

    /// First biome with this name.
    #[must_use]
    pub fn biome(&self, name: &str) -> Option<&Biome> {
        self.biomes.iter().find(|b| b.name == name)
    }
}

/// Complete terrain generator configuration.
///
/// Built once, validated, then handed to the generator by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TerrainConfig {
    map_size: u32,
    tile_size: u32,
    #[serde(default = "default_num_cells")]
    num_cells: u32,
    #[serde(default = "default_sample_factor")]
    sample_factor: u32,
    #[serde(default = "default_sample_distance")]
    sample_distance: u32,
    #[serde(default, rename = "elevation", skip_serializing_if = "Vec::is_empty")]
    elevations: Vec<Elevation>,
}

impl TerrainConfig {
    /// Creates an empty config with default sampling parameters.
    #[must_use]
    pub const fn new(map_size: u32, tile_size: u32) -> Self {
        Self {
            map_size,
            tile_size,
            num_cells: DEFAULT_NUM_CELLS,
            sample_factor: DEFAULT_SAMPLE_FACTOR,
            sample_distance: DEFAULT_SAMPLE_DISTANCE,
            elevations: Vec::new(),
        }
    }

    /// Overwrites the sampling parameters.
    pub fn set_parameters(
        &mut self,
        num_cells: u32,
        sample_factor: u32,
        sample_distance: u32,
    ) -> &mut Self {
        self.num_cells = num_cells;
        self.sample_factor = sample_factor;
        self.sample_distance = sample_distance;
        self
    }

    /// Appends an elevation level and returns a builder for it.
    pub fn add_elevation_level(&mut self, quantity: f64) -> ElevationBuilder<'_> {
        let index = self.elevations.len();
        self.elevations.push(Elevation {
            quantity,
            biomes: Vec::new(),
        });
        ElevationBuilder {
            elevation: &mut self.elevations[index],
            index,
        }
    }

    /// Map side length, in tiles.
    #[must_use]
    pub const fn map_size(&self) -> u32 {
        self.map_size
    }

    /// Tile side length, in pixels.
    #[must_use]
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Anchor cells per map side.
    #[must_use]
    pub const fn num_cells(&self) -> u32 {
        self.num_cells
    }

    /// Sampling multiplier.
    #[must_use]
    pub const fn sample_factor(&self) -> u32 {
        self.sample_factor
    }

    /// Anchor sampling distance, in cells.
    #[must_use]
    pub const fn sample_distance(&self) -> u32 {
        self.sample_distance
    }

    /// The sampling parameters as one value.
    #[must_use]
    pub const fn parameters(&self) -> SamplingParameters {
        SamplingParameters {
            num_cells: self.num_cells,
            sample_factor: self.sample_factor,
            sample_distance: self.sample_distance,
        }
    }

    /// Elevation levels. The index of each entry is its generator index.
    #[must_use]
    pub fn elevations(&self) -> &[Elevation] {
        &self.elevations
    }

    /// Elevation level at `index`.
    #[must_use]
    pub fn elevation(&self, index: usize) -> Option<&Elevation> {
        self.elevations.get(index)
    }

    /// First biome named `name` under elevation `index`.
    ///
    /// Vegetation is attached to biomes by (elevation, name) with this rule.
    #[must_use]
    pub fn biome(&self, index: usize, name: &str) -> Option<&Biome> {
        self.elevation(index)?.biome(name)
    }

    /// Checks value ranges.
    ///
    /// Only ranges are checked. Whether the combination makes sense (sums of
    /// quantities, vegetation on blocking biomes, ...) is up to the generator.
    ///
    /// # Errors
    ///
    /// - [`TerrainError::OutOfRange`] for the first out-of-range field
    /// - [`TerrainError::EmptyName`] for the first unnamed biome or plant
    pub fn validate(&self) -> TerrainResult<()> {
        positive("map_size", self.map_size)?;
        positive("tile_size", self.tile_size)?;
        positive("num_cells", self.num_cells)?;
        positive("sample_factor", self.sample_factor)?;

        for (e, elevation) in self.elevations.iter().enumerate() {
            fraction(&format!("elevation[{e}].quantity"), elevation.quantity)?;

            for (b, biome) in elevation.biomes.iter().enumerate() {
                let path = format!("elevation[{e}].biome[{b}]");
                if biome.name.is_empty() {
                    return Err(TerrainError::EmptyName(path));
                }
                let in_range = biome.max_temp > 0.0 && biome.max_temp <= MAX_TEMPERATURE;
                if !in_range {
                    return Err(TerrainError::OutOfRange {
                        field: format!("{path}.max_temp"),
                        value: biome.max_temp,
                    });
                }

                for (v, plant) in biome.vegetation.iter().enumerate() {
                    let path = format!("{path}.vegetation[{v}]");
                    if plant.name.is_empty() {
                        return Err(TerrainError::EmptyName(path));
                    }
                    fraction(&format!("{path}.quantity"), plant.quantity)?;
                }
            }
        }
        Ok(())
    }
}

/// Rejects zero.
fn positive(field: &str, value: u32) -> TerrainResult<()> {
    if value == 0 {
        return Err(TerrainError::OutOfRange {
            field: field.to_owned(),
            value: f64::from(value),
        });
    }
    Ok(())
}

/// Rejects negative and non-finite quantities.
fn fraction(field: &str, value: f64) -> TerrainResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TerrainError::OutOfRange {
            field: field.to_owned(),
            value,
        });
    }
    Ok(())
}

/// Builder handle for a freshly appended elevation level.
#[derive(Debug)]
pub struct ElevationBuilder<'a> {
    elevation: &'a mut Elevation,
    index: usize,
}

impl ElevationBuilder<'_> {
    /// Generator index of this elevation.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Appends a biome with default attributes and returns a builder for it.
    ///
    /// Defaults: `max_temp = 100`, no wall, `max_height = 0`,
    /// `wall_height = 0`, not blocking.
    pub fn add_biome(&mut self, name: impl Into<String>) -> BiomeBuilder<'_> {
        let index = self.elevation.biomes.len();
        self.elevation.biomes.push(Biome::new(name.into()));
        BiomeBuilder {
            biome: &mut self.elevation.biomes[index],
        }
    }
}

/// Builder handle for a freshly appended biome.
#[derive(Debug)]
pub struct BiomeBuilder<'a> {
    biome: &'a mut Biome,
}

impl BiomeBuilder<'_> {
    /// Highest temperature this biome covers.
    pub fn max_temp(&mut self, max_temp: f64) -> &mut Self {
        self.biome.max_temp = max_temp;
        self
    }

    /// Wall texture name. An empty name means no wall.
    pub fn wall(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        self.biome.wall = (!name.is_empty()).then_some(name);
        self
    }

    /// Maximum terrain height.
    pub fn max_height(&mut self, max_height: u32) -> &mut Self {
        self.biome.max_height = max_height;
        self
    }

    /// Height of wall tiles.
    pub fn wall_height(&mut self, wall_height: u32) -> &mut Self {
        self.biome.wall_height = wall_height;
        self
    }

    /// Whether the biome blocks movement.
    pub fn blocking(&mut self, blocking: bool) -> &mut Self {
        self.biome.blocking = blocking;
        self
    }

    /// Appends a vegetation entry.
    pub fn add_vegetation(&mut self, name: impl Into<String>, quantity: f64) -> &mut Self {
        self.biome.vegetation.push(Vegetation {
            name: name.into(),
            quantity,
        });
        self
    }
}
