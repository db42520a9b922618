//! VERDANT texture baker
//!
//! Synthesizes the default asset set into an in-memory engine, writes every
//! texture as a PNG and the world preset as TOML.
//!
//! ```text
//! verdant_bake --out baked --seed 42 --screen 2560x1440 --box 200x48
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use verdant::assets::{register_default_assets, ScreenLayout};
use verdant::world::default_preset;
use verdant::MemoryEngine;
use verdant_terrain::TerrainConfig;
use verdant_texture::{TextureRegistry, TextureSeed};

#[derive(Parser, Debug)]
#[command(name = "verdant_bake")]
#[command(about = "Bake procedural textures and the world preset to disk")]
struct Args {
    /// Output directory
    #[arg(short, long, default_value = "baked")]
    out: PathBuf,

    /// Noise seed (uses the built-in seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// World preset to bake instead of the built-in one
    #[arg(short, long)]
    preset: Option<PathBuf>,

    /// Screen size the UI chrome is laid out for
    #[arg(long, default_value = "1920x1080", value_parser = parse_size)]
    screen: (u32, u32),

    /// Extra box textures to bake, e.g. `200x48` (repeatable)
    #[arg(long = "box", value_parser = parse_size)]
    boxes: Vec<(u32, u32)>,
}

/// Parses `WIDTHxHEIGHT`.
fn parse_size(text: &str) -> Result<(u32, u32)> {
    let Some((width, height)) = text.split_once(['x', 'X']) else {
        bail!("expected WIDTHxHEIGHT, got `{text}`");
    };
    let width = width.trim().parse().with_context(|| format!("bad width in `{text}`"))?;
    let height = height.trim().parse().with_context(|| format!("bad height in `{text}`"))?;
    Ok((width, height))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;

    let engine = Arc::new(MemoryEngine::new());
    let seed = args.seed.map(TextureSeed::new).unwrap_or_default();
    let registry = TextureRegistry::with_seed(Arc::clone(&engine), seed);
    tracing::info!("Baking with seed {:#018x}", seed.value());

    let (width, height) = args.screen;
    register_default_assets(&registry, ScreenLayout::new(width, height))?;
    for &(width, height) in &args.boxes {
        registry.ensure_box(width, height)?;
    }

    for name in registry.registered_names() {
        write_png(&engine, &name, &args.out)?;
    }

    let config = match &args.preset {
        Some(path) => TerrainConfig::load(path)
            .with_context(|| format!("loading preset {}", path.display()))?,
        None => default_preset()?,
    };
    config.validate()?;
    let preset_path = args.out.join("world.toml");
    fs::write(&preset_path, config.to_toml_string()?)
        .with_context(|| format!("writing {}", preset_path.display()))?;

    config.apply(&mut &*engine)?;
    tracing::info!(
        "Baked {} textures and {} into {}",
        engine.registration_count(),
        preset_path.display(),
        args.out.display()
    );
    Ok(())
}

/// Writes one registered texture as `<out>/<name>.png`.
fn write_png(engine: &MemoryEngine, name: &str, out: &Path) -> Result<()> {
    let Some(buffer) = engine.texture(name) else {
        bail!("texture `{name}` is not in the engine");
    };
    let image = image::RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.to_rgba8())
        .with_context(|| format!("texture `{name}` has the wrong pixel count"))?;
    let path = out.join(format!("{name}.png"));
    image
        .save(&path)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}
