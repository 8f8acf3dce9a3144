//! Contour extraction: trace external boundaries from a binary edge map
//! and select the best closed-boundary candidate.
//!
//! Track-map images produce one dominant closed loop (the track) plus
//! assorted small noise contours (text labels, legends, dust). Only
//! external (outermost) borders are traced, and the candidate enclosing
//! the largest area is selected — the track's outer boundary always
//! encloses more area than any noise contour.

use geo::{Area, LineString, Polygon};
use image::GrayImage;
use imageproc::contours::BorderType;

use crate::types::{Point, Polyline};

/// Trace external contours in a binary edge map.
///
/// Uses Suzuki-Abe border following via
/// [`imageproc::contours::find_contours`], keeping only outer borders
/// (holes are discarded). Every boundary pixel is preserved in its
/// natural walk order — no polygon approximation is applied, so the
/// arc-length resampler downstream sees the full-resolution curve.
///
/// Contours with fewer than 2 points are dropped (a single pixel cannot
/// form a curve).
#[must_use = "returns the traced external contours"]
pub fn trace_external(edges: &GrayImage) -> Vec<Polyline> {
    let contours: Vec<imageproc::contours::Contour<u32>> =
        imageproc::contours::find_contours(edges);

    contours
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.points.len() >= 2)
        .map(|c| {
            let points = c
                .points
                .into_iter()
                .map(|p| Point::new(f64::from(p.x), f64::from(p.y)))
                .collect();
            Polyline::new(points)
        })
        .collect()
}

/// Select the contour enclosing the largest area.
///
/// Area (not perimeter or point count) is the selection criterion:
/// a long, wiggly noise contour can out-count the track boundary in
/// points, but never out-enclose it.
///
/// Ties are broken first-encountered-wins (strict `>` comparison), so
/// selection is deterministic for identical input.
#[must_use]
pub fn largest_by_area(contours: &[Polyline]) -> Option<&Polyline> {
    let mut best: Option<(&Polyline, f64)> = None;
    for contour in contours {
        let area = enclosed_area(contour);
        match best {
            Some((_, best_area)) if area <= best_area => {}
            _ => best = Some((contour, area)),
        }
    }
    best.map(|(contour, _)| contour)
}

/// Shoelace area of the implicitly-closed contour.
///
/// Returns 0.0 for contours with fewer than 3 points.
fn enclosed_area(contour: &Polyline) -> f64 {
    if contour.len() < 3 {
        return 0.0;
    }
    let ring: LineString<f64> =
        LineString::from(contour.points().iter().map(|p| (p.x, p.y)).collect::<Vec<_>>());
    Polygon::new(ring, vec![]).unsigned_area()
}
