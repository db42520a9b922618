//! # Texture Registry
//!
//! Makes sure every texture name is synthesized and handed to the engine
//! at most once.
//!
//! ## Thread Safety
//!
//! Each name owns a slot guarded by its own lock. The first caller for a
//! name holds that lock while synthesizing and registering; concurrent
//! callers for the same name wait and then see the registered marker.
//! Callers for different names only touch the slot map briefly and never
//! wait on each other's synthesis.
//!
//! The registered marker is an atomic beside the lock, so queries
//! (`contains`, `registered_names`) never wait on a synthesis in progress.
//! A failed name gives its slot back unless another caller is already
//! waiting on it.
//!
//! ## Reused Names
//!
//! The first registration wins. Asking again for a name that is already
//! registered, even with different parameters, returns the name untouched.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::error::{TextureError, TextureResult};
use crate::sink::BitmapSink;
use crate::synth::{synthesize_box, synthesize_noise, GaussianSource, TextureSeed};

/// Registration state for one texture name.
#[derive(Default)]
struct Slot {
    /// Held while the name is synthesized and registered.
    lock: Mutex<()>,
    /// Set once the engine has the texture.
    registered: AtomicBool,
}

impl Slot {
    fn is_registered(&self) -> bool {
        self.registered.load(Ordering::Acquire)
    }
}

/// Name-keyed cache in front of a [`BitmapSink`].
pub struct TextureRegistry<S: BitmapSink> {
    /// Engine collaborator.
    sink: S,
    /// Seed for per-name noise streams.
    seed: TextureSeed,
    /// One slot per name ever requested.
    slots: RwLock<HashMap<String, Arc<Slot>>>,
}

impl<S: BitmapSink> TextureRegistry<S> {
    /// Creates a registry with the default noise seed.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self::with_seed(sink, TextureSeed::default())
    }

    /// Creates a registry whose noise tiles derive from `seed`.
    #[must_use]
    pub fn with_seed(sink: S, seed: TextureSeed) -> Self {
        Self {
            sink,
            seed,
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// The engine collaborator.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The noise seed.
    #[must_use]
    pub const fn seed(&self) -> TextureSeed {
        self.seed
    }

    /// Name under which a box texture of this size is registered.
    #[must_use]
    pub fn box_name(width: u32, height: u32) -> String {
        format!("box_{width}_{height}")
    }

    /// Ensures a default-style box texture of this size exists.
    ///
    /// Returns `box_<width>_<height>`.
    ///
    /// # Errors
    ///
    /// - [`TextureError::InvalidDimensions`] for a zero or overflowing size
    /// - [`TextureError::Engine`] if the engine rejects the bitmap
    pub fn ensure_box(&self, width: u32, height: u32) -> TextureResult<String> {
        let name = Self::box_name(width, height);
        self.ensure_with(&name, || synthesize_box(width, height))?;
        Ok(name)
    }

    /// Ensures a noise texture exists under `name`.
    ///
    /// Draws come from a stream derived from the registry seed and `name`.
    ///
    /// # Errors
    ///
    /// - [`TextureError::InvalidDimensions`] for a zero or overflowing size
    /// - [`TextureError::InvalidVariance`] for a negative or non-finite variance
    /// - [`TextureError::Engine`] if the engine rejects the bitmap
    pub fn ensure_noise(
        &self,
        name: &str,
        width: u32,
        height: u32,
        color: Color,
        variance: f64,
    ) -> TextureResult<String> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed.derive(name));
        self.ensure_noise_with(name, width, height, color, variance, &mut rng)
    }

    /// Like [`TextureRegistry::ensure_noise`], drawing from `source`.
    ///
    /// Nothing is drawn when the name is already registered.
    ///
    /// # Errors
    ///
    /// Same as [`TextureRegistry::ensure_noise`].
    pub fn ensure_noise_with<G: GaussianSource + ?Sized>(
        &self,
        name: &str,
        width: u32,
        height: u32,
        color: Color,
        variance: f64,
        source: &mut G,
    ) -> TextureResult<String> {
        self.ensure_with(name, || {
            synthesize_noise(width, height, color, variance, source)
        })?;
        Ok(name.to_owned())
    }

    /// Returns whether `name` has been registered through this registry.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.slots
            .read()
            .get(name)
            .is_some_and(|slot| slot.is_registered())
    }

    /// Names registered through this registry, sorted.
    #[must_use]
    pub fn registered_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .slots
            .read()
            .iter()
            .filter(|(_, slot)| slot.is_registered())
            .map(|(name, _)| name.clone())
            .collect();
        names.sort_unstable();
        names
    }

    /// Runs `synthesize` and registers the result, unless `name` is taken.
    fn ensure_with(
        &self,
        name: &str,
        synthesize: impl FnOnce() -> TextureResult<PixelBuffer>,
    ) -> TextureResult<()> {
        let slot = self.slot(name);
        let guard = slot.lock.lock();

        if slot.is_registered() {
            tracing::debug!("Texture cache hit: {}", name);
            return Ok(());
        }
        if self.sink.is_registered(name) {
            tracing::debug!("Texture {} already known to the engine", name);
            slot.registered.store(true, Ordering::Release);
            return Ok(());
        }

        match synthesize().and_then(|buffer| self.register(name, &buffer).map(|()| buffer)) {
            Ok(buffer) => {
                slot.registered.store(true, Ordering::Release);
                tracing::info!(
                    "Registered texture {} ({}x{})",
                    name,
                    buffer.width(),
                    buffer.height()
                );
                Ok(())
            }
            Err(err) => {
                drop(guard);
                self.release(name, &slot);
                Err(err)
            }
        }
    }

    /// Hands a synthesized buffer to the engine.
    fn register(&self, name: &str, buffer: &PixelBuffer) -> TextureResult<()> {
        self.sink
            .register_bitmap(name, buffer.pixels(), buffer.width(), buffer.height())
            .map_err(|source| {
                tracing::warn!("Engine rejected texture {}: {}", name, source);
                TextureError::Engine {
                    name: name.to_owned(),
                    source,
                }
            })
    }

    /// Returns the slot for `name`, creating it on first use.
    fn slot(&self, name: &str) -> Arc<Slot> {
        if let Some(slot) = self.slots.read().get(name) {
            return Arc::clone(slot);
        }
        Arc::clone(self.slots.write().entry(name.to_owned()).or_default())
    }

    /// Drops the slot of a failed name.
    ///
    /// Slots are only cloned under the map lock, so with the write lock held
    /// a strong count of two (map + `slot`) means nobody else is waiting.
    fn release(&self, name: &str, slot: &Arc<Slot>) {
        let mut slots = self.slots.write();
        let idle = slots.get(name).is_some_and(|current| {
            Arc::ptr_eq(current, slot) && Arc::strong_count(slot) == 2 && !slot.is_registered()
        });
        if idle {
            slots.remove(name);
        }
    }
}

impl<S: BitmapSink + std::fmt::Debug> std::fmt::Debug for TextureRegistry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureRegistry")
            .field("sink", &self.sink)
            .field("seed", &self.seed)
            .field("registered", &self.registered_names())
            .finish()
    }
}
