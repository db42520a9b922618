//! # Default Assets
//!
//! The ground tiles every world references and the UI chrome sized for the
//! current screen.

use verdant_texture::{BitmapSink, Color, TextureRegistry, TextureResult};

/// Side length of a ground tile, in pixels.
pub const TILE_SIZE: u32 = 16;

/// A noise tile in the default asset set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseAsset {
    /// Texture name, also used as the biome name.
    pub name: &'static str,
    /// Base color.
    pub color: Color,
    /// Deviation of the per-pixel draws.
    pub variance: f64,
}

impl NoiseAsset {
    const fn new(name: &'static str, color: Color, variance: f64) -> Self {
        Self {
            name,
            color,
            variance,
        }
    }
}

/// Ground tiles, registered at [`TILE_SIZE`].
pub static GROUND_TILES: [NoiseAsset; 8] = [
    NoiseAsset::new("water", Color::rgb(0, 72, 200), 0.04),
    NoiseAsset::new("grass", Color::rgb(67, 141, 13), 0.03),
    NoiseAsset::new("sand", Color::rgb(220, 196, 126), 0.02),
    NoiseAsset::new("beach", Color::rgb(194, 152, 88), 0.02),
    NoiseAsset::new("earth", Color::rgb(155, 112, 57), 0.03),
    NoiseAsset::new("snow", Color::rgb(180, 180, 220), 0.01),
    NoiseAsset::new("mountain", Color::rgb(175, 127, 64), 0.03),
    NoiseAsset::new("mountain_wall", Color::rgb(104, 64, 32), 0.1),
];

/// Looks up a ground tile by name.
#[must_use]
pub fn ground_tile(name: &str) -> Option<&'static NoiseAsset> {
    GROUND_TILES.iter().find(|tile| tile.name == name)
}

/// Registers every ground tile. Returns the names in table order.
///
/// # Errors
///
/// The first registry error; tiles before it stay registered.
pub fn register_ground_tiles<S: BitmapSink>(
    registry: &TextureRegistry<S>,
) -> TextureResult<Vec<String>> {
    GROUND_TILES
        .iter()
        .map(|tile| registry.ensure_noise(tile.name, TILE_SIZE, TILE_SIZE, tile.color, tile.variance))
        .collect()
}

/// Screen size the UI chrome is laid out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Screen width in pixels.
    pub width: u32,
    /// Screen height in pixels.
    pub height: u32,
}

impl ScreenLayout {
    /// Layout for a `width` x `height` screen.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Main menu panel: half the screen each way.
    #[must_use]
    pub fn menu_panel(self) -> (u32, u32) {
        (scale(self.width, 0.5), scale(self.height, 0.5))
    }

    /// Menu button: panel width, 22% of panel height.
    ///
    /// The height is scaled from the unrounded panel height and truncated once.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn menu_button(self) -> (u32, u32) {
        let panel_height = 0.5 * f64::from(self.height);
        (self.menu_panel().0, (0.22 * panel_height) as u32)
    }

    /// In-game HUD: 30% of the screen width, full height.
    #[must_use]
    pub fn hud(self) -> (u32, u32) {
        (scale(self.width, 0.3), self.height)
    }
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

/// `value * factor`, truncated.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale(value: u32, factor: f64) -> u32 {
    (f64::from(value) * factor) as u32
}

/// Registers the menu button and HUD boxes for `layout`.
///
/// # Errors
///
/// The first registry error, including a zero-sized box on a tiny screen.
pub fn register_ui_chrome<S: BitmapSink>(
    registry: &TextureRegistry<S>,
    layout: ScreenLayout,
) -> TextureResult<Vec<String>> {
    [layout.menu_button(), layout.hud()]
        .into_iter()
        .map(|(width, height)| registry.ensure_box(width, height))
        .collect()
}

/// Registers the ground tiles and the UI chrome.
///
/// # Errors
///
/// The first registry error.
pub fn register_default_assets<S: BitmapSink>(
    registry: &TextureRegistry<S>,
    layout: ScreenLayout,
) -> TextureResult<Vec<String>> {
    let mut names = register_ground_tiles(registry)?;
    names.extend(register_ui_chrome(registry, layout)?);
    tracing::info!("Default assets ready ({} textures)", names.len());
    Ok(names)
}
