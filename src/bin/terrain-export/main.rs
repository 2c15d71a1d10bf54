// terrain-export - Bake a diamond-square terrain to disk
//
// Pipeline:
//   1. Resolve config (defaults <- --config TOML <- flags)
//   2. Generate terrain
//   3. Write OBJ mesh and/or grayscale heightmap PNG
//
// Usage: cargo run --bin terrain-export -- --div 128 --seed 7 --obj terrain.obj --png height.png

mod heightmap;
mod obj;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use terrain_engine::{Terrain, TerrainConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "terrain-export", about = "Generate a diamond-square terrain and write it to disk", version)]
struct Cli {
    /// TOML file with TerrainConfig fields; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Subdivisions per axis
    #[arg(long)]
    div: Option<u32>,

    #[arg(long, allow_negative_numbers = true)]
    min_x: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    max_x: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    min_y: Option<f32>,
    #[arg(long, allow_negative_numbers = true)]
    max_y: Option<f32>,

    #[arg(long)]
    roughness: Option<f32>,

    /// Fixed RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Write a Wavefront OBJ mesh here
    #[arg(long)]
    obj: Option<PathBuf>,

    /// Write an 8-bit grayscale heightmap here
    #[arg(long)]
    png: Option<PathBuf>,
}

impl Cli {
    fn resolve(&self) -> anyhow::Result<TerrainConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                toml::from_str::<TerrainConfig>(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => TerrainConfig::default(),
        };

        if let Some(v) = self.div { config.div = v; }
        if let Some(v) = self.min_x { config.min_x = v; }
        if let Some(v) = self.max_x { config.max_x = v; }
        if let Some(v) = self.min_y { config.min_y = v; }
        if let Some(v) = self.max_y { config.max_y = v; }
        if let Some(v) = self.roughness { config.roughness = v; }
        if self.seed.is_some() { config.seed = self.seed; }

        config.validate()?;
        Ok(config)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = cli.resolve()?;

    let terrain = Terrain::from_config(&config)?;

    if cli.obj.is_none() && cli.png.is_none() {
        warn!("nothing to write; pass --obj and/or --png");
    }

    if let Some(path) = &cli.obj {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        obj::write_obj(&terrain, BufWriter::new(file))
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), vertices = terrain.vertex_count(), "wrote mesh");
    }

    if let Some(path) = &cli.png {
        heightmap::write_png(&terrain, path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), side = terrain.grid().side(), "wrote heightmap");
    }

    Ok(())
}
