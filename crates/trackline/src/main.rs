//! trackline: batch CLI for generating minimap outlines from track maps.
//!
//! Scans a directory of raster track-map images (`.png`, `.jpg`,
//! `.jpeg`), extracts the dominant closed boundary from each, and writes
//! one `<stem>.json` outline per image: 200 points (configurable),
//! evenly spaced by arc length, in normalized unit-square coordinates.
//!
//! # Usage
//!
//! ```text
//! trackline [OPTIONS] <MAPS_DIR> <OUTLINES_DIR>
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod batch;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use trackline_pipeline::OutlineConfig;

/// Generate normalized minimap outline polygons from raster track maps.
///
/// Each image is processed independently; images without a usable
/// boundary are reported and skipped without failing the batch.
#[derive(Parser)]
#[command(name = "trackline", version)]
struct Cli {
    /// Directory of raster track-map images (.png, .jpg, .jpeg).
    maps_dir: PathBuf,

    /// Output directory for outline JSON files (created if absent).
    outlines_dir: PathBuf,

    /// Number of evenly spaced points per outline.
    #[arg(long, default_value_t = OutlineConfig::DEFAULT_RESAMPLE_POINTS)]
    points: usize,

    /// Gaussian blur sigma.
    #[arg(long, default_value_t = OutlineConfig::DEFAULT_BLUR_SIGMA)]
    blur_sigma: f32,

    /// Canny low threshold.
    #[arg(long, default_value_t = OutlineConfig::DEFAULT_CANNY_LOW)]
    canny_low: f32,

    /// Canny high threshold.
    #[arg(long, default_value_t = OutlineConfig::DEFAULT_CANNY_HIGH)]
    canny_high: f32,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = OutlineConfig {
        blur_sigma: cli.blur_sigma,
        canny_low: cli.canny_low,
        canny_high: cli.canny_high,
        resample_points: cli.points,
        ..OutlineConfig::default()
    };

    match batch::process_directory(&cli.maps_dir, &cli.outlines_dir, &config) {
        Ok(summary) => {
            eprintln!(
                "Done: {} outline(s) written, {} image(s) skipped",
                summary.written, summary.skipped,
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
