//! # Bitmap Sink
//!
//! The engine side of texture registration.

use std::sync::Arc;

use crate::error::EngineError;

/// Engine collaborator that stores named bitmaps.
///
/// Pixels arrive in the packed `[blue, green, red, alpha]` format, row-major,
/// exactly `width * height` of them.
pub trait BitmapSink: Send + Sync {
    /// Returns whether a texture with this name already exists.
    fn is_registered(&self, name: &str) -> bool;

    /// Registers a bitmap under `name`. Called at most once per name.
    ///
    /// # Errors
    ///
    /// Whatever the engine reports; the registry propagates it unchanged.
    fn register_bitmap(
        &self,
        name: &str,
        pixels: &[i32],
        width: u32,
        height: u32,
    ) -> Result<(), EngineError>;
}

impl<T: BitmapSink + ?Sized> BitmapSink for Arc<T> {
    fn is_registered(&self, name: &str) -> bool {
        (**self).is_registered(name)
    }

    fn register_bitmap(
        &self,
        name: &str,
        pixels: &[i32],
        width: u32,
        height: u32,
    ) -> Result<(), EngineError> {
        (**self).register_bitmap(name, pixels, width, height)
    }
}
