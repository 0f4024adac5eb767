use std::path::PathBuf;

use arcglow_config::defaults::MAX_SURFACE_DIM;
use clap::{Parser, Subcommand};

/// arcglow: an animated radial arc gradient rendered to PNG frames.
#[derive(Parser, Debug)]
#[command(name = "arcglow", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Surface width in pixels.
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..=MAX_SURFACE_DIM as i64))]
    pub width: Option<u32>,

    /// Surface height in pixels.
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..=MAX_SURFACE_DIM as i64))]
    pub height: Option<u32>,

    /// Cycle duration in milliseconds.
    #[arg(long, global = true)]
    pub speed: Option<String>,

    /// Comma-separated palette, e.g. "#ff0000, #00ff00".
    #[arg(long, global = true)]
    pub colors: Option<String>,

    /// Hue rotation in degrees.
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub hue: Option<String>,

    /// Saturation scale in percent.
    #[arg(long, global = true)]
    pub saturation: Option<String>,

    /// Lightness scale in percent.
    #[arg(long, global = true)]
    pub lightness: Option<String>,

    /// Image to pick a palette color from.
    #[arg(long, global = true)]
    pub pick_image: Option<PathBuf>,

    /// Pixel to sample from --pick-image, as X,Y.
    #[arg(long, global = true, value_parser = parse_point, default_value = "0,0")]
    pub pick_at: (u32, u32),

    /// Palette slot (0-based) that receives the picked color.
    #[arg(long, global = true, default_value_t = 0)]
    pub pick_slot: usize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a single frame at a fixed progress.
    Render {
        /// Position in the cycle, 0.0 to 1.0.
        #[arg(long, default_value_t = 0.0)]
        progress: f64,
        /// Output PNG file.
        #[arg(long, default_value = "arcglow.png")]
        out: PathBuf,
    },
    /// Run the animation and write numbered PNG frames.
    Animate {
        /// Stop after this many frames (default: until Ctrl-C).
        #[arg(long)]
        frames: Option<u64>,
        /// Frame rate (default: from config).
        #[arg(long)]
        fps: Option<u32>,
        /// Output directory (default: from config).
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Print the color stops for one frame as JSON.
    Stops {
        #[arg(long, default_value_t = 0.0)]
        progress: f64,
    },
    /// Write the default config file if none exists.
    Init,
}

fn parse_point(s: &str) -> Result<(u32, u32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse().map_err(|e| format!("bad X in {s:?}: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad Y in {s:?}: {e}"))?;
    Ok((x, y))
}

pub fn parse() -> Args {
    Args::parse()
}
