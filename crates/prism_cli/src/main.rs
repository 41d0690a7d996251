use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use prism_core::load_scene;
use prism_renderer::{render, RenderConfig, RenderScene};

/// Render a scene file to an image.
#[derive(Debug, Parser)]
#[command(name = "prism", version)]
struct Args {
    #[arg(help = "Path to the scene file")]
    scene_file: PathBuf,

    #[arg(help = "Output image path (format from extension, e.g. .png)")]
    output_image: PathBuf,

    #[arg(long, default_value_t = 500, help = "Image width in pixels")]
    width: u32,

    #[arg(long, default_value_t = 500, help = "Image height in pixels")]
    height: u32,

    #[arg(long, help = "Seed for soft shadow jitter (reproducible output)")]
    seed: Option<u64>,

    #[arg(short = 't', long, help = "Worker threads (defaults to all cores)")]
    threads: Option<usize>,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            seed: self.seed,
            threads: self.threads,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    log::info!("Starting PRISM");

    let scene = load_scene(&args.scene_file)
        .with_context(|| format!("failed to load scene {}", args.scene_file.display()))?;
    let render_scene = RenderScene::from_scene(&scene)
        .with_context(|| format!("invalid scene {}", args.scene_file.display()))?;

    let frame = render(&render_scene, &args.render_config())?;

    frame
        .save(&args.output_image)
        .with_context(|| format!("failed to write {}", args.output_image.display()))?;

    Ok(())
}
