//! Pixel-to-normalized coordinate transform.
//!
//! Maps pixel-space boundary points into a unit-square coordinate system
//! independent of source image resolution:
//!
//! ```text
//! norm_x = pixel_x / max(1, width - 1)
//! norm_y = 1 - pixel_y / max(1, height - 1)
//! ```
//!
//! The Y-axis is **flipped**: image row 0 is the top of the picture, but
//! downstream minimap renderers treat larger Y as "up". The divisor floor
//! of 1 guards against division by zero on 1-pixel-wide or 1-pixel-tall
//! images. No clamping is applied — a boundary touching the image border
//! may land exactly on 0.0 or 1.0, or fractionally outside under rounding.

use crate::types::{Dimensions, Point, Polyline};

/// Normalize a pixel-space curve into unit-square coordinates with +y up.
#[must_use]
pub fn normalize(curve: &Polyline, dimensions: Dimensions) -> Polyline {
    let span_x = f64::from(dimensions.width.saturating_sub(1)).max(1.0);
    let span_y = f64::from(dimensions.height.saturating_sub(1)).max(1.0);

    Polyline::new(
        curve
            .points()
            .iter()
            .map(|p| Point::new(p.x / span_x, 1.0 - p.y / span_y))
            .collect(),
    )
}
