//! groundtrack CLI - Debug tool for trail segmentation and track colors
//!
//! Usage:
//!   groundtrack-cli segments <tracks.json> [--output <file>] [--config <file>]
//!   groundtrack-cli color <id>...
//!
//! `segments` reads a JSON array of satellite tracks and prints the
//! geometry each visible track would be drawn with, so wraparound issues
//! can be inspected without a browser.

use clap::{Parser, Subcommand};
use groundtrack::{
    MapConfig, MapGeometry, Result, SatelliteTrack, StatusSummary, TrackId, build_map_geometry,
    color_for, geo_utils::max_longitude_step,
};
use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "groundtrack-cli")]
#[command(about = "Debug tool for satellite trail geometry", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Map configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Segment the trails of every visible track
    Segments {
        /// JSON file holding an array of satellite tracks
        file: PathBuf,

        /// Write the geometry JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the trail color of each id (numbers are treated as indices)
    Color {
        /// Track ids
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(path) = &cli.config {
        MapConfig::from_path(path)?.install()?;
    }

    match cli.command {
        Commands::Segments { file, output } => run_segments(&file, output.as_deref()),
        Commands::Color { ids } => {
            for raw in ids {
                let id = parse_track_id(&raw);
                println!("{}\t{}", raw, color_for(&id));
            }
            Ok(())
        }
    }
}

/// Integers become indices, anything else is a key.
fn parse_track_id(raw: &str) -> TrackId {
    raw.parse::<i64>()
        .map(TrackId::Index)
        .unwrap_or_else(|_| TrackId::from(raw))
}

fn load_tracks(path: &Path) -> Result<Vec<SatelliteTrack>> {
    let content = fs::read_to_string(path)?;
    debug!("Parsing tracks from {}", path.display());
    Ok(serde_json::from_str(&content)?)
}

fn run_segments(file: &Path, output: Option<&Path>) -> Result<()> {
    let tracks = load_tracks(file)?;
    let summary = StatusSummary::from_tracks(&tracks);
    info!(
        "Loaded {} tracks ({} active, {} decayed) from {}",
        tracks.len(),
        summary.active.len(),
        summary.decayed.len(),
        file.display()
    );

    let geometry = build_map_geometry(&tracks, &MapConfig::global().palette);
    report(&geometry);

    let json = serde_json::to_string_pretty(&geometry)?;
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            writeln!(writer, "{}", json)?;
            info!("Wrote geometry to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn report(geometry: &MapGeometry) {
    for track in &geometry.tracks {
        info!(
            "  [OK] {} ({}) - {} segments, {} markers, color {}",
            track.name,
            track.id,
            track.segments.len(),
            track.markers.len(),
            track.color
        );
        for (i, segment) in track.segments.iter().enumerate() {
            debug!(
                "       segment {}: {} points, max lon step {:.3}",
                i,
                segment.len(),
                max_longitude_step(segment)
            );
        }
    }
    for skipped in &geometry.skipped {
        info!("  [SKIP] {} - {}", skipped.id, skipped.reason);
    }
}
