//! # In-Memory Engine
//!
//! Stand-in for the rendering/world engine. Stores registered bitmaps,
//! records applied terrain configs, and can be told to refuse textures.
//!
//! Used by the bake tool and by tests that need to observe exactly what
//! reached the engine.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::{Mutex, RwLock};
use thiserror::Error;
use verdant_terrain::{GeneratorError, TerrainConfig, TerrainGenerator};
use verdant_texture::{BitmapSink, EngineError, PixelBuffer};

/// Reasons the in-memory engine refuses a call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineRejection {
    /// The name was put on the refuse list.
    #[error("texture `{0}` is refused")]
    Refused(String),

    /// A texture with this name already exists.
    #[error("texture `{0}` already exists")]
    Duplicate(String),

    /// The pixel count does not match the geometry.
    #[error("bitmap `{name}` has {actual} pixels, expected {expected}")]
    PixelCount {
        /// Texture name.
        name: String,
        /// `width * height`.
        expected: usize,
        /// Pixels received.
        actual: usize,
    },

    /// The terrain config has no elevation levels to generate from.
    #[error("terrain config has no elevation levels")]
    NoElevations,
}

/// In-memory engine.
#[derive(Debug, Default)]
pub struct MemoryEngine {
    /// Registered textures by name.
    textures: RwLock<HashMap<String, PixelBuffer>>,
    /// Names to refuse.
    refused: RwLock<HashSet<String>>,
    /// Number of `register_bitmap` calls that succeeded.
    registrations: AtomicUsize,
    /// Every config applied, in order.
    applied: Mutex<Vec<TerrainConfig>>,
}

impl MemoryEngine {
    /// Creates an empty engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every future registration of `name` fail.
    pub fn refuse(&self, name: impl Into<String>) {
        self.refused.write().insert(name.into());
    }

    /// A registered texture.
    #[must_use]
    pub fn texture(&self, name: &str) -> Option<PixelBuffer> {
        self.textures.read().get(name).cloned()
    }

    /// Names of all registered textures, sorted.
    #[must_use]
    pub fn texture_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.textures.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of successful registrations.
    #[must_use]
    pub fn registration_count(&self) -> usize {
        self.registrations.load(Ordering::Acquire)
    }

    /// Configs applied so far, oldest first.
    #[must_use]
    pub fn applied_configs(&self) -> Vec<TerrainConfig> {
        self.applied.lock().clone()
    }

    /// Applies a config through a shared reference.
    fn apply_shared(&self, config: &TerrainConfig) -> Result<(), GeneratorError> {
        if config.elevations().is_empty() {
            return Err(Box::new(EngineRejection::NoElevations));
        }
        let calls = config.commands().count();
        tracing::debug!("Engine received terrain config ({} calls)", calls);
        self.applied.lock().push(config.clone());
        Ok(())
    }
}

impl BitmapSink for MemoryEngine {
    fn is_registered(&self, name: &str) -> bool {
        self.textures.read().contains_key(name)
    }

    fn register_bitmap(
        &self,
        name: &str,
        pixels: &[i32],
        width: u32,
        height: u32,
    ) -> Result<(), EngineError> {
        if self.refused.read().contains(name) {
            return Err(Box::new(EngineRejection::Refused(name.to_owned())));
        }

        let buffer = PixelBuffer::from_packed(width, height, pixels.to_vec()).map_err(|_| {
            EngineRejection::PixelCount {
                name: name.to_owned(),
                expected: width as usize * height as usize,
                actual: pixels.len(),
            }
        })?;

        let mut textures = self.textures.write();
        if textures.contains_key(name) {
            return Err(Box::new(EngineRejection::Duplicate(name.to_owned())));
        }
        textures.insert(name.to_owned(), buffer);
        self.registrations.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }
}

impl TerrainGenerator for MemoryEngine {
    fn apply_terrain_config(&mut self, config: &TerrainConfig) -> Result<(), GeneratorError> {
        self.apply_shared(config)
    }
}

/// Lets an engine shared with a texture registry still take configs,
/// the same way `&File` implements `Write`.
impl TerrainGenerator for &MemoryEngine {
    fn apply_terrain_config(&mut self, config: &TerrainConfig) -> Result<(), GeneratorError> {
        self.apply_shared(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_texture::Color;

    #[test]
    fn test_register_and_read_back() {
        let engine = MemoryEngine::new();
        let pixels = vec![Color::rgb(1, 2, 3).pack(); 4];
        engine.register_bitmap("tile", &pixels, 2, 2).unwrap();

        assert!(engine.is_registered("tile"));
        assert_eq!(engine.texture("tile").unwrap().get(1, 1), Some(Color::rgb(1, 2, 3)));
        assert_eq!(engine.registration_count(), 1);
    }

    #[test]
    fn test_rejects_malformed_bitmap() {
        let engine = MemoryEngine::new();
        let err = engine.register_bitmap("bad", &[0; 3], 2, 2).unwrap_err();
        assert_eq!(err.to_string(), "bitmap `bad` has 3 pixels, expected 4");
        assert!(!engine.is_registered("bad"));
    }

    #[test]
    fn test_rejects_duplicates_and_refused() {
        let engine = MemoryEngine::new();
        engine.register_bitmap("once", &[0], 1, 1).unwrap();
        assert!(engine.register_bitmap("once", &[0], 1, 1).is_err());

        engine.refuse("lava");
        assert!(engine.register_bitmap("lava", &[0], 1, 1).is_err());
        assert_eq!(engine.registration_count(), 1);
    }

    #[test]
    fn test_terrain_config_recorded() {
        let mut engine = MemoryEngine::new();
        let mut config = TerrainConfig::new(64, 16);
        config.add_elevation_level(1.0).add_biome("grass");

        config.clone().apply(&mut engine).unwrap();
        assert_eq!(engine.applied_configs(), vec![config]);
    }

    #[test]
    fn test_empty_config_refused() {
        let engine = MemoryEngine::new();
        let result = TerrainConfig::new(64, 16).apply(&mut &engine);
        assert!(result.is_err());
        assert!(engine.applied_configs().is_empty());
    }
}
