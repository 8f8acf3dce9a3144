//! Shared types for the track-outline extraction pipeline.

use serde::{Deserialize, Serialize};

/// Re-export `GrayImage` so downstream crates can reference
/// intermediate raster data without depending on `image` directly.
pub use image::GrayImage;

/// A 2D point in either pixel coordinates (origin top-left, +y down)
/// or normalized coordinates (origin bottom-left, +y up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    ///
    /// Avoids the square root for comparison purposes.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

/// An ordered sequence of points forming a curve.
///
/// Boundary curves are implicitly closed: the segment from the last
/// point back to the first is part of the curve even when the two
/// differ at the data level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline(Vec<Point>);

impl Polyline {
    /// Create a new polyline from a vector of points.
    #[must_use]
    pub const fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Returns `true` if the polyline has no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of points in the polyline.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the first point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Point> {
        self.0.first()
    }

    /// Returns the last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Point> {
        self.0.last()
    }

    /// Returns a slice of all points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Consumes the polyline and returns the underlying vector of points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }
}

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Configuration for the outline extraction pipeline.
///
/// All parameters have defaults matching the reference track-map
/// processing chain. The struct is passed into [`crate::extract`]
/// explicitly so callers (and tests) can override any knob per call.
///
/// # Canny threshold invariants
///
/// Both `canny_low` and `canny_high` must be at least
/// [`edge::MIN_THRESHOLD`](crate::edge::MIN_THRESHOLD) (1.0), and
/// `canny_low` must not exceed `canny_high`. These are enforced as
/// clamps inside [`edge::canny`](crate::edge::canny).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineConfig {
    /// Gaussian blur sigma applied before edge detection. Higher values
    /// produce more smoothing.
    pub blur_sigma: f32,

    /// Canny edge detector low threshold. Pixels with gradient magnitude
    /// between `canny_low` and `canny_high` are edges only if connected
    /// to a strong edge.
    pub canny_low: f32,

    /// Canny edge detector high threshold. Pixels with gradient magnitude
    /// above this value are definite edges.
    pub canny_high: f32,

    /// Chebyshev radius of the post-Canny dilation. A radius of 1 is a
    /// 3x3 structuring element; 0 disables dilation entirely.
    pub dilate_radius: u8,

    /// Number of evenly arc-length-spaced points in the resampled outline.
    pub resample_points: usize,

    /// Minimum point count for the selected boundary contour. Smaller
    /// candidates are treated as "no boundary found".
    pub min_boundary_points: usize,
}

impl OutlineConfig {
    /// Default blur sigma.
    ///
    /// Matches the sigma OpenCV derives for a 5x5 Gaussian kernel
    /// (`0.3 * ((5 - 1) * 0.5 - 1) + 0.8`), which the reference track-map
    /// tooling used.
    pub const DEFAULT_BLUR_SIGMA: f32 = 1.1;
    /// Default Canny low threshold.
    pub const DEFAULT_CANNY_LOW: f32 = 50.0;
    /// Default Canny high threshold.
    pub const DEFAULT_CANNY_HIGH: f32 = 150.0;
    /// Default dilation radius (3x3 structuring element).
    pub const DEFAULT_DILATE_RADIUS: u8 = 1;
    /// Default resample point count.
    pub const DEFAULT_RESAMPLE_POINTS: usize = 200;
    /// Default minimum boundary point count.
    pub const DEFAULT_MIN_BOUNDARY_POINTS: usize = 10;
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            blur_sigma: Self::DEFAULT_BLUR_SIGMA,
            canny_low: Self::DEFAULT_CANNY_LOW,
            canny_high: Self::DEFAULT_CANNY_HIGH,
            dilate_radius: Self::DEFAULT_DILATE_RADIUS,
            resample_points: Self::DEFAULT_RESAMPLE_POINTS,
            min_boundary_points: Self::DEFAULT_MIN_BOUNDARY_POINTS,
        }
    }
}

/// Result of running the full outline extraction pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackOutline {
    /// The normalized, resampled boundary. Coordinates are fractions of
    /// the image extent with +y up; values may fall slightly outside
    /// [0, 1] when the boundary touches the image border.
    pub points: Polyline,

    /// Dimensions of the source image in pixels.
    pub dimensions: Dimensions,
}

/// Errors that can occur during outline extraction.
///
/// `NoBoundary` is an expected per-image outcome, not a batch failure:
/// the driver reports it and moves on to the next image.
#[derive(Debug, thiserror::Error)]
pub enum OutlineError {
    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// Edge detection produced no usable closed boundary.
    #[error("no contour found")]
    NoBoundary,
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Point tests ---

    #[test]
    fn point_new() {
        let p = Point::new(3.0, 4.0);
        assert!((p.x - 3.0).abs() < f64::EPSILON);
        assert!((p.y - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn point_distance_squared() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_squared(b) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn point_distance_to_self_is_zero() {
        let p = Point::new(7.0, 11.0);
        assert!((p.distance(p)).abs() < f64::EPSILON);
    }

    // --- Polyline tests ---

    #[test]
    fn polyline_new_and_len() {
        let pl = Polyline::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        assert_eq!(pl.len(), 2);
        assert!(!pl.is_empty());
    }

    #[test]
    fn polyline_empty() {
        let pl = Polyline::new(vec![]);
        assert!(pl.is_empty());
        assert_eq!(pl.len(), 0);
        assert!(pl.first().is_none());
        assert!(pl.last().is_none());
    }

    #[test]
    fn polyline_first_and_last() {
        let pl = Polyline::new(vec![
            Point::new(1.0, 2.0),
            Point::new(3.0, 4.0),
            Point::new(5.0, 6.0),
        ]);
        assert_eq!(pl.first(), Some(&Point::new(1.0, 2.0)));
        assert_eq!(pl.last(), Some(&Point::new(5.0, 6.0)));
    }

    #[test]
    fn polyline_into_points_returns_owned_vec() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let pl = Polyline::new(points.clone());
        assert_eq!(pl.into_points(), points);
    }

    // --- OutlineConfig tests ---

    #[test]
    fn config_defaults_match_reference_pipeline() {
        let config = OutlineConfig::default();
        assert!((config.blur_sigma - 1.1).abs() < f32::EPSILON);
        assert!((config.canny_low - 50.0).abs() < f32::EPSILON);
        assert!((config.canny_high - 150.0).abs() < f32::EPSILON);
        assert_eq!(config.dilate_radius, 1);
        assert_eq!(config.resample_points, 200);
        assert_eq!(config.min_boundary_points, 10);
    }

    // --- OutlineError tests ---

    #[test]
    fn error_empty_input_display() {
        let err = OutlineError::EmptyInput;
        assert_eq!(err.to_string(), "input image data is empty");
    }

    #[test]
    fn error_no_boundary_display() {
        let err = OutlineError::NoBoundary;
        assert_eq!(err.to_string(), "no contour found");
    }

    // --- Serde round-trip tests ---

    #[test]
    #[allow(clippy::unwrap_used)]
    fn point_serde_round_trip() {
        let p = Point::new(3.14, -2.71);
        let json = serde_json::to_string(&p).unwrap();
        let deserialized: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn config_serde_round_trip() {
        let config = OutlineConfig {
            blur_sigma: 2.0,
            canny_low: 30.0,
            canny_high: 120.0,
            dilate_radius: 2,
            resample_points: 100,
            min_boundary_points: 5,
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: OutlineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn outline_serde_round_trip() {
        let outline = TrackOutline {
            points: Polyline::new(vec![Point::new(0.25, 0.75), Point::new(0.5, 0.5)]),
            dimensions: Dimensions {
                width: 100,
                height: 200,
            },
        };
        let json = serde_json::to_string(&outline).unwrap();
        let deserialized: TrackOutline = serde_json::from_str(&json).unwrap();
        assert_eq!(outline, deserialized);
    }
}
