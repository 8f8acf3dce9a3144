//! trackline-export: Pure outline serializers (sans-IO).
//!
//! Converts normalized outlines into persisted artifact formats.
//! Currently supports compact JSON.

pub mod json;

pub use json::{ExportError, to_json};
