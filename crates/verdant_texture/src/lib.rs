//! # VERDANT Texture Synthesis
//!
//! Procedural pixel buffers for an external rendering engine.
//!
//! ## Design Principles
//!
//! 1. **Bit-exact**: Pixels are packed `[blue, green, red, alpha]` little-endian
//! 2. **Pure**: Synthesizers are functions of their inputs (and injected draws)
//! 3. **Once per name**: The registry never synthesizes a name twice
//!
//! ## Core Components
//!
//! - `Color`: 8-bit RGBA with saturating arithmetic and packing
//! - `PixelBuffer`: Row-major packed pixels with checked geometry
//! - `synthesize_box` / `synthesize_noise`: The two texture recipes
//! - `TextureRegistry`: Synthesize-and-register cache over a `BitmapSink`
//!
//! ## Example
//!
//! ```rust,ignore
//! use verdant_texture::{Color, TextureRegistry};
//!
//! let registry = TextureRegistry::new(engine);
//!
//! // Button background, registered on first use
//! let chrome = registry.ensure_box(200, 48)?;
//!
//! // Ground tile
//! let water = registry.ensure_noise("water", 16, 16, Color::rgb(0, 72, 200), 0.04)?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod buffer;
pub mod color;
pub mod error;
pub mod registry;
pub mod sink;
pub mod synth;

pub use buffer::PixelBuffer;
pub use color::Color;
pub use error::{EngineError, TextureError, TextureResult};
pub use registry::TextureRegistry;
pub use sink::BitmapSink;
pub use synth::{
    synthesize_box, synthesize_box_with, synthesize_noise, Band, BoxStyle, GaussianSource,
    TextureSeed,
};
