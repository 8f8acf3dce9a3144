//! Arc-length resampling: reduce an arbitrary-length closed boundary to a
//! fixed number of evenly spaced points.
//!
//! Contour tracing emits one point per boundary pixel, so point count
//! varies with image resolution. Downstream renderers want a fixed-size
//! polygon, spaced evenly by distance travelled along the loop rather
//! than by pixel index (pixel spacing over-weights jagged regions).

use crate::types::{Point, Polyline};

/// Resample a closed curve to exactly `count` points, evenly spaced by
/// cumulative arc length around the loop.
///
/// The input may be open at the data level (first != last); the closing
/// segment back to the first point is included in the measured length.
/// Output starts at the input's first point and proceeds in the input's
/// winding direction. Every output point lies on the original curve.
///
/// Degenerate inputs propagate rather than fail:
///
/// - an empty curve (or `count == 0`) yields an empty polyline, and
/// - a zero-length loop (all points coincident) is returned unresampled,
///   since no arc-length parameterization exists for it.
///
/// # Examples
///
/// ```
/// use trackline_pipeline::{Point, Polyline};
/// use trackline_pipeline::resample::resample_closed;
///
/// let square = Polyline::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ]);
/// // Perimeter 40, 8 samples -> one every 5 units: corners + midpoints.
/// let resampled = resample_closed(&square, 8);
/// assert_eq!(resampled.len(), 8);
/// assert_eq!(resampled.points()[1], Point::new(5.0, 0.0));
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn resample_closed(curve: &Polyline, count: usize) -> Polyline {
    if curve.is_empty() || count == 0 {
        return Polyline::new(vec![]);
    }

    // Close the loop explicitly before measuring.
    let mut points: Vec<Point> = curve.points().to_vec();
    if points[0] != points[points.len() - 1] {
        points.push(points[0]);
    }

    // Cumulative arc length at each vertex along the closed walk.
    let mut cumulative = Vec::with_capacity(points.len());
    cumulative.push(0.0_f64);
    for window in points.windows(2) {
        let last = cumulative[cumulative.len() - 1];
        cumulative.push(last + window[0].distance(window[1]));
    }

    let total = cumulative[cumulative.len() - 1];
    if total <= 0.0 {
        // Zero-length loop: no meaningful parameterization.
        return curve.clone();
    }

    let mut sampled = Vec::with_capacity(count);
    // Targets are non-decreasing, so the scan index only moves forward.
    let mut idx = 1;
    for i in 0..count {
        let target = i as f64 * total / count as f64;
        while idx < cumulative.len() && cumulative[idx] < target {
            idx += 1;
        }
        if idx >= cumulative.len() {
            // Float rounding pushed the final target(s) past the end of
            // the cumulative array; the closing point is the answer.
            sampled.push(points[points.len() - 1]);
            continue;
        }

        let seg_start = cumulative[idx - 1];
        let seg_end = cumulative[idx];
        if seg_end - seg_start <= 0.0 {
            // Duplicate consecutive vertices: no direction to interpolate.
            sampled.push(points[idx - 1]);
            continue;
        }

        let ratio = (target - seg_start) / (seg_end - seg_start);
        let a = points[idx - 1];
        let b = points[idx];
        sampled.push(Point::new(
            (b.x - a.x).mul_add(ratio, a.x),
            (b.y - a.y).mul_add(ratio, a.y),
        ));
    }

    Polyline::new(sampled)
}
