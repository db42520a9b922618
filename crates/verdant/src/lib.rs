//! # VERDANT Procedural Content
//!
//! Ties texture synthesis and terrain configuration to an engine.
//!
//! ## Design Principles
//!
//! 1. **Engine at the edge**: Everything reaches the engine through
//!    `BitmapSink` and `TerrainGenerator`
//! 2. **Data tables**: Asset and world definitions are plain constants
//! 3. **Observable**: `MemoryEngine` records every call it receives
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use verdant::{assets, world, MemoryEngine};
//! use verdant_texture::TextureRegistry;
//!
//! let engine = Arc::new(MemoryEngine::new());
//! let registry = TextureRegistry::new(Arc::clone(&engine));
//!
//! assets::register_default_assets(&registry, assets::ScreenLayout::default())?;
//! world::default_world(1024, 16).apply(&mut &*engine)?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod assets;
pub mod engine;
pub mod world;

pub use assets::{NoiseAsset, ScreenLayout, GROUND_TILES, TILE_SIZE};
pub use engine::{EngineRejection, MemoryEngine};
pub use world::{default_world, DEFAULT_PRESET};
