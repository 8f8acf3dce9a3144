//! JSON outline serializer.
//!
//! Converts a normalized outline into a compact JSON array of
//! `{"x": ..., "y": ...}` objects, each coordinate rounded to 4 decimal
//! digits. Four digits keep the artifact small while exceeding the
//! on-screen precision any minimap can use.
//!
//! This is a pure function with no I/O -- it returns a `String`; the
//! caller owns file writing.

use serde::Serialize;

use trackline_pipeline::Polyline;

/// Decimal precision of emitted coordinates.
const ROUND_SCALE: f64 = 10_000.0;

/// Errors that can occur during outline serialization.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// JSON encoding failed.
    #[error("failed to encode outline as JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A single serialized outline vertex.
#[derive(Serialize)]
struct OutlinePoint {
    x: f64,
    y: f64,
}

/// Serialize an outline as a compact JSON array of `{x, y}` objects.
///
/// Coordinates are rounded to 4 decimal digits and encoded with no
/// extraneous whitespace. An empty outline serializes to `[]`.
///
/// # Errors
///
/// Returns [`ExportError::Serialize`] if JSON encoding fails.
///
/// # Examples
///
/// ```
/// use trackline_pipeline::{Point, Polyline};
/// use trackline_export::to_json;
///
/// let outline = Polyline::new(vec![Point::new(0.5, 0.25)]);
/// assert_eq!(to_json(&outline).unwrap(), r#"[{"x":0.5,"y":0.25}]"#);
/// ```
pub fn to_json(outline: &Polyline) -> Result<String, ExportError> {
    let rounded: Vec<OutlinePoint> = outline
        .points()
        .iter()
        .map(|p| OutlinePoint {
            x: round4(p.x),
            y: round4(p.y),
        })
        .collect();
    Ok(serde_json::to_string(&rounded)?)
}

/// Round to 4 decimal digits.
fn round4(value: f64) -> f64 {
    (value * ROUND_SCALE).round() / ROUND_SCALE
}
