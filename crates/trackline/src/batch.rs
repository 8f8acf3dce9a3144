//! Directory batch driver: scan a maps directory, extract one outline
//! per image, and persist each as `<stem>.json`.
//!
//! Per-image failures (unreadable file, decode error, no usable
//! boundary) are reported and skipped; the batch keeps going. Only
//! directory-level failures -- an unreadable input directory or an
//! output directory that cannot be created or written -- abort the run.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use trackline_pipeline::{OutlineConfig, extract};

/// Accepted raster file extensions, compared case-insensitively.
const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Per-image outcome counts across one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Outline files successfully written.
    pub written: usize,
    /// Images skipped (unreadable, undecodable, or no boundary found).
    pub skipped: usize,
}

/// Process every accepted image in `maps_dir`, writing one outline JSON
/// per success into `outlines_dir` (created if absent).
///
/// Files are processed in file-name order so output and reporting are
/// deterministic regardless of directory enumeration order. Each image
/// is attempted exactly once; there is no retry.
///
/// Prints one line per skipped image and one line per written outline.
///
/// # Errors
///
/// Returns an [`io::Error`] for directory-level failures only: the
/// output directory cannot be created, the input directory cannot be
/// read, or an outline file cannot be written.
pub fn process_directory(
    maps_dir: &Path,
    outlines_dir: &Path,
    config: &OutlineConfig,
) -> io::Result<BatchSummary> {
    fs::create_dir_all(outlines_dir)?;

    let mut image_paths: Vec<PathBuf> = fs::read_dir(maps_dir)?
        .collect::<io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| has_accepted_extension(path))
        .collect();
    image_paths.sort();

    let mut summary = BatchSummary::default();
    for path in image_paths {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), display_name);

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                println!("Skipping {name}: {e}");
                summary.skipped += 1;
                continue;
            }
        };

        let outline = match extract(&bytes, config) {
            Ok(outline) => outline,
            Err(e) => {
                println!("Skipping {name}: {e}");
                summary.skipped += 1;
                continue;
            }
        };

        let json = match trackline_export::to_json(&outline.points) {
            Ok(json) => json,
            Err(e) => {
                println!("Skipping {name}: {e}");
                summary.skipped += 1;
                continue;
            }
        };

        let mut output_path = outlines_dir.join(path.file_stem().unwrap_or(OsStr::new("outline")));
        output_path.set_extension("json");
        fs::write(&output_path, &json)?;

        println!(
            "Wrote {} ({} points)",
            output_path.display(),
            outline.points.len(),
        );
        summary.written += 1;
    }

    Ok(summary)
}

/// Whether the path carries one of the accepted raster extensions
/// (case-insensitive).
fn has_accepted_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}

/// Lossy display form of a file name for diagnostics.
fn display_name(name: &OsStr) -> String {
    name.to_string_lossy().into_owned()
}
