//! trackline-pipeline: Pure track-outline extraction pipeline (sans-IO).
//!
//! Converts raster track-map images into fixed-size normalized boundary
//! polygons through: grayscale -> blur -> Canny edge detection ->
//! dilation -> external contour tracing -> largest-boundary selection ->
//! arc-length resampling -> coordinate normalization.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and returns structured data. Directory scanning and file
//! writing live in the `trackline` CLI crate.

pub mod blur;
pub mod contour;
pub mod edge;
pub mod grayscale;
pub mod normalize;
pub mod resample;
pub mod types;

pub use types::{Dimensions, OutlineConfig, OutlineError, Point, Polyline, TrackOutline};

/// Run the full outline extraction pipeline on one image.
///
/// Takes raw image bytes (PNG, JPEG) and a configuration, and produces a
/// [`TrackOutline`]: exactly `config.resample_points` boundary points,
/// evenly spaced by arc length, in normalized unit-square coordinates
/// with +y up.
///
/// Each call is independent and holds no state: every intermediate
/// buffer is dropped when the call returns, so a batch driver may
/// process images in any order (or in parallel) without interference.
///
/// # Pipeline steps
///
/// 1. Decode image and convert to grayscale
/// 2. Gaussian blur (noise reduction)
/// 3. Canny edge detection
/// 4. Morphological dilation (close micro-gaps in the edge map)
/// 5. External contour tracing
/// 6. Largest-enclosed-area boundary selection
/// 7. Arc-length resampling to a fixed point count
/// 8. Normalization to unit-square coordinates, Y flipped
///
/// # Errors
///
/// Returns [`OutlineError::EmptyInput`] if `image_bytes` is empty.
/// Returns [`OutlineError::ImageDecode`] if the image cannot be decoded.
/// Returns [`OutlineError::NoBoundary`] if no external contour is found,
/// or the best candidate has fewer than `config.min_boundary_points`
/// points. `NoBoundary` is an expected outcome for images without a
/// usable closed boundary; batch drivers should skip and continue.
pub fn extract(
    image_bytes: &[u8],
    config: &OutlineConfig,
) -> Result<TrackOutline, OutlineError> {
    // 1. Decode and convert to grayscale.
    let gray = grayscale::decode_and_grayscale(image_bytes)?;
    let dimensions = Dimensions {
        width: gray.width(),
        height: gray.height(),
    };

    // 2. Gaussian blur.
    let blurred = blur::gaussian_blur(&gray, config.blur_sigma);

    // 3. Canny edge detection.
    let edges = edge::canny(&blurred, config.canny_low, config.canny_high);

    // 4. Dilate so broken edge fragments merge into one closed loop.
    let edges = edge::dilate(&edges, config.dilate_radius);

    // 5 + 6. External contours, keep the one enclosing the most area.
    let contours = contour::trace_external(&edges);
    let boundary = contour::largest_by_area(&contours).ok_or(OutlineError::NoBoundary)?;
    if boundary.len() < config.min_boundary_points {
        return Err(OutlineError::NoBoundary);
    }

    // 7. Evenly spaced fixed-size polygon.
    let resampled = resample::resample_closed(boundary, config.resample_points);

    // 8. Unit-square coordinates, +y up.
    let points = normalize::normalize(&resampled, dimensions);

    Ok(TrackOutline { points, dimensions })
}
