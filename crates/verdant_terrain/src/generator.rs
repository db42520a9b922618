//! # Terrain Generator Interface
//!
//! The engine owns the actual generation. This module describes how a
//! finished [`TerrainConfig`] reaches it: either as one value, or as the
//! ordered call stream of the engine's incremental interface.

use crate::config::{Biome, SamplingParameters, TerrainConfig, Vegetation};
use crate::error::{GeneratorError, TerrainError, TerrainResult};

/// Engine collaborator that generates a map from a config.
pub trait TerrainGenerator {
    /// Reads the config and generates the map. Called once per map.
    ///
    /// # Errors
    ///
    /// Whatever the engine reports; [`TerrainConfig::apply`] propagates it.
    fn apply_terrain_config(&mut self, config: &TerrainConfig) -> Result<(), GeneratorError>;
}

/// One call of the engine's incremental config interface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigCommand<'a> {
    /// Sets the sampling parameters. Always first.
    SetParameters(SamplingParameters),
    /// Appends an elevation; its index is the number of earlier `AddElevation`s.
    AddElevation {
        /// Fraction of the total elevation mass.
        quantity: f64,
    },
    /// Appends a biome to an elevation.
    AddBiome {
        /// Index of the owning elevation.
        elevation: usize,
        /// The biome.
        biome: &'a Biome,
    },
    /// Attaches vegetation to the first biome named `biome` in an elevation.
    AddVegetation {
        /// Index of the owning elevation.
        elevation: usize,
        /// Name of the owning biome.
        biome: &'a str,
        /// The vegetation entry.
        vegetation: &'a Vegetation,
    },
}

impl TerrainConfig {
    /// Flattens the config into the engine's incremental call order.
    ///
    /// Parameters first, then for each elevation in order: the elevation,
    /// and for each of its biomes the biome followed by its vegetation.
    pub fn commands(&self) -> impl Iterator<Item = ConfigCommand<'_>> + '_ {
        std::iter::once(ConfigCommand::SetParameters(self.parameters())).chain(
            self.elevations()
                .iter()
                .enumerate()
                .flat_map(|(index, elevation)| {
                    std::iter::once(ConfigCommand::AddElevation {
                        quantity: elevation.quantity(),
                    })
                    .chain(elevation.biomes().iter().flat_map(move |biome| {
                        std::iter::once(ConfigCommand::AddBiome {
                            elevation: index,
                            biome,
                        })
                        .chain(biome.vegetation().iter().map(move |vegetation| {
                            ConfigCommand::AddVegetation {
                                elevation: index,
                                biome: biome.name(),
                                vegetation,
                            }
                        }))
                    }))
                }),
        )
    }

    /// Validates the config and hands it to the generator.
    ///
    /// Consumes the config: a config drives exactly one generation.
    ///
    /// # Errors
    ///
    /// - Any error from [`TerrainConfig::validate`]
    /// - [`TerrainError::Generator`] if the generator fails
    pub fn apply<G: TerrainGenerator + ?Sized>(self, generator: &mut G) -> TerrainResult<()> {
        self.validate()?;
        tracing::info!(
            "Applying terrain config: {} elevations, {} cells, map {}x{}",
            self.elevations().len(),
            self.num_cells(),
            self.map_size(),
            self.map_size()
        );
        generator
            .apply_terrain_config(&self)
            .map_err(TerrainError::Generator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        applied: Vec<TerrainConfig>,
        fail: bool,
    }

    impl TerrainGenerator for Recorder {
        fn apply_terrain_config(&mut self, config: &TerrainConfig) -> Result<(), GeneratorError> {
            if self.fail {
                return Err("generator offline".into());
            }
            self.applied.push(config.clone());
            Ok(())
        }
    }

    fn sample_config() -> TerrainConfig {
        let mut config = TerrainConfig::new(256, 16);
        config.set_parameters(8, 2, 4);
        config.add_elevation_level(0.6).add_biome("water").blocking(true);
        let mut ground = config.add_elevation_level(0.4);
        ground
            .add_biome("grass")
            .max_temp(70.0)
            .add_vegetation("tree", 0.1)
            .add_vegetation("flower", 0.02);
        ground.add_biome("sand");
        config
    }

    #[test]
    fn test_command_order() {
        let config = sample_config();
        let commands: Vec<ConfigCommand<'_>> = config.commands().collect();

        assert_eq!(commands.len(), 8);
        assert_eq!(
            commands[0],
            ConfigCommand::SetParameters(SamplingParameters {
                num_cells: 8,
                sample_factor: 2,
                sample_distance: 4,
            })
        );
        assert!(matches!(commands[1], ConfigCommand::AddElevation { quantity } if (quantity - 0.6).abs() < f64::EPSILON));
        assert!(matches!(commands[2], ConfigCommand::AddBiome { elevation: 0, biome } if biome.name() == "water"));
        assert!(matches!(commands[3], ConfigCommand::AddElevation { .. }));
        assert!(matches!(commands[4], ConfigCommand::AddBiome { elevation: 1, biome } if biome.name() == "grass"));
        assert!(matches!(
            commands[5],
            ConfigCommand::AddVegetation { elevation: 1, biome: "grass", vegetation } if vegetation.name == "tree"
        ));
        assert!(matches!(
            commands[6],
            ConfigCommand::AddVegetation { elevation: 1, biome: "grass", vegetation } if vegetation.name == "flower"
        ));
    }

    #[test]
    fn test_trailing_biome_without_vegetation() {
        let mut config = sample_config();
        config.add_elevation_level(0.1);
        let last: Vec<_> = config.commands().skip(7).collect();

        // "sand" comes after grass' vegetation, then the empty elevation
        assert!(matches!(last[0], ConfigCommand::AddBiome { elevation: 1, biome } if biome.name() == "sand"));
        assert!(matches!(last[1], ConfigCommand::AddElevation { .. }));
        assert_eq!(last.len(), 2);
    }

    #[test]
    fn test_apply_hands_over_once() {
        let mut generator = Recorder::default();
        sample_config().apply(&mut generator).unwrap();

        assert_eq!(generator.applied.len(), 1);
        assert_eq!(generator.applied[0], sample_config());
    }

    #[test]
    fn test_apply_validates_first() {
        let mut generator = Recorder::default();
        let mut config = sample_config();
        config.add_elevation_level(f64::NAN);

        assert!(matches!(config.apply(&mut generator), Err(TerrainError::OutOfRange { .. })));
        assert!(generator.applied.is_empty());
    }

    #[test]
    fn test_generator_failure_propagates() {
        let mut generator = Recorder {
            fail: true,
            ..Recorder::default()
        };
        let result = sample_config().apply(&mut generator);
        match result {
            Err(TerrainError::Generator(source)) => assert_eq!(source.to_string(), "generator offline"),
            other => panic!("expected generator error, got {other:?}"),
        }
    }
}
