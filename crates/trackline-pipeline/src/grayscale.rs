//! Image decoding and grayscale conversion.
//!
//! Accepts raw image bytes (PNG, JPEG) and produces a single-channel
//! grayscale image suitable for the processing pipeline.
//!
//! This is the first step in the pipeline: raw bytes in, `GrayImage` out.

use image::GrayImage;

use crate::types::OutlineError;

/// Decode raw image bytes and convert to grayscale.
///
/// Supports whatever formats the `image` crate has enabled (PNG and
/// JPEG here). The standard luminance formula is used for RGB-to-gray
/// conversion: `0.299*R + 0.587*G + 0.114*B`.
///
/// # Errors
///
/// Returns [`OutlineError::EmptyInput`] if `bytes` is empty.
/// Returns [`OutlineError::ImageDecode`] if the image format is
/// unrecognized or the data is corrupt.
#[must_use = "returns the decoded grayscale image"]
pub fn decode_and_grayscale(bytes: &[u8]) -> Result<GrayImage, OutlineError> {
    if bytes.is_empty() {
        return Err(OutlineError::EmptyInput);
    }

    let img = image::load_from_memory(bytes)?;
    Ok(img.to_luma8())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Helper: encode an RGBA image as a PNG byte buffer.
    fn encode_png(img: &image::RgbaImage) -> Vec<u8> {
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgba8,
        )
        .unwrap();
        buf
    }

    #[test]
    fn empty_input_returns_error() {
        let result = decode_and_grayscale(&[]);
        assert!(matches!(result, Err(OutlineError::EmptyInput)));
    }

    #[test]
    fn corrupt_bytes_returns_image_decode_error() {
        let result = decode_and_grayscale(&[0xFF, 0xFE, 0x00, 0x01]);
        assert!(matches!(result, Err(OutlineError::ImageDecode(_))));
    }

    #[test]
    fn valid_png_decodes_to_grayscale() {
        let img = image::RgbaImage::from_fn(2, 2, |_, _| image::Rgba([255, 255, 255, 255]));
        let gray = decode_and_grayscale(&encode_png(&img)).unwrap();
        for pixel in gray.pixels() {
            assert_eq!(pixel.0[0], 255);
        }
    }

    #[test]
    fn output_dimensions_match_input() {
        let img = image::RgbaImage::from_fn(17, 31, |_, _| image::Rgba([128, 64, 32, 255]));
        let gray = decode_and_grayscale(&encode_png(&img)).unwrap();
        assert_eq!(gray.width(), 17);
        assert_eq!(gray.height(), 31);
    }

    #[test]
    fn grayscale_conversion_is_weighted_luminance() {
        // Different RGB channels should produce different grayscale
        // values, confirming a weighted conversion (not a simple average).
        let pixel = |r, g, b| {
            let img = image::RgbaImage::from_fn(1, 1, |_, _| image::Rgba([r, g, b, 255]));
            decode_and_grayscale(&encode_png(&img)).unwrap().get_pixel(0, 0).0[0]
        };

        let r_val = pixel(255, 0, 0);
        let g_val = pixel(0, 255, 0);
        let b_val = pixel(0, 0, 255);
        assert!(
            g_val > r_val && r_val > b_val,
            "expected green > red > blue luminance, got R={r_val} G={g_val} B={b_val}",
        );
    }
}
