use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use gridpoly::prelude::*;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod player;
mod provenance;
mod table;

use player::PlayCfg;
use table::OutputFormat;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Enumerate simple lattice polygons and play them back")]
struct Cmd {
    /// Free-form label; propagated to provenance and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Copy, Debug)]
struct EnumerationArgs {
    /// Grid side length S
    #[arg(long, default_value_t = EnumerationCfg::DEFAULT_SIZE)]
    size: usize,
    /// Interior removal depth D (0 keeps the full grid)
    #[arg(long, default_value_t = EnumerationCfg::DEFAULT_DEPTH)]
    depth: usize,
    /// Vertices per polygon k
    #[arg(long, default_value_t = EnumerationCfg::DEFAULT_VERTICES)]
    vertices: usize,
}

impl EnumerationArgs {
    fn cfg(&self) -> EnumerationCfg {
        EnumerationCfg::new(self.size, self.depth, self.vertices)
    }
}

#[derive(Subcommand)]
enum Action {
    /// Enumerate polygons and write one row per polygon plus a provenance sidecar
    Run {
        #[command(flatten)]
        grid: EnumerationArgs,
        #[arg(long)]
        out: PathBuf,
        /// Defaults to the output extension, else json
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Print the sequence to the console one polygon per tick
    Play {
        #[command(flatten)]
        grid: EnumerationArgs,
        #[arg(long, default_value_t = 20.0)]
        fps: f64,
        /// Stop after this many frames
        #[arg(long)]
        limit: Option<usize>,
        /// Start over after the last polygon
        #[arg(long)]
        repeat: bool,
    },
    /// Print a provenance JSON block for this build
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { grid, out, format } => run(grid.cfg(), out, format, cmd.tag),
        Action::Play {
            grid,
            fps,
            limit,
            repeat,
        } => play(
            grid.cfg(),
            PlayCfg {
                fps,
                limit,
                repeat,
            },
            cmd.tag,
        ),
        Action::Report => report(cmd.tag),
    }
}

fn enumerate(cfg: EnumerationCfg) -> Result<(PolygonSequence, RunStats)> {
    try_enumerate_polygons(cfg).map_err(|e| anyhow!("invalid configuration: {e}"))
}

fn run(
    cfg: EnumerationCfg,
    out: PathBuf,
    format: Option<OutputFormat>,
    tag: Option<String>,
) -> Result<()> {
    let format = format
        .or_else(|| OutputFormat::from_path(&out))
        .unwrap_or(OutputFormat::Json);
    tracing::info!(?cfg, out = %out.display(), ?format, tag = ?tag, "run");
    let (seq, stats) = enumerate(cfg)?;
    let rows = table::rows(&seq);
    table::write(&rows, &out, format)?;

    let params = json!({
        "size": cfg.size,
        "depth": cfg.depth,
        "vertices": cfg.vertices,
        "format": format!("{format:?}").to_lowercase(),
        "stats": {
            "admissible_points": stats.admissible_points,
            "candidates": stats.candidates,
            "valid": stats.valid,
            "distinct": stats.distinct,
            "emitted": stats.emitted,
            "orbits": stats.orbits
        }
    });
    let prov = provenance::write_sidecar(&out, tag, params)?;
    tracing::info!(
        rows = rows.len(),
        orbits = stats.orbits,
        provenance = %prov.display(),
        "wrote polygons"
    );
    Ok(())
}

fn play(cfg: EnumerationCfg, play_cfg: PlayCfg, tag: Option<String>) -> Result<()> {
    tracing::info!(?cfg, fps = play_cfg.fps, tag = ?tag, "play");
    let (seq, _) = enumerate(cfg)?;
    player::play(&seq, play_cfg)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let doc = provenance::Provenance::for_build(tag);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
