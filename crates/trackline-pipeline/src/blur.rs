//! Gaussian blur for noise reduction before edge detection.
//!
//! Wraps [`imageproc::filter::gaussian_blur_f32`] to smooth images,
//! reducing high-frequency noise (anti-aliasing artifacts in line-art
//! track maps) that would produce spurious edges in the Canny detector.

use image::GrayImage;

/// Apply Gaussian blur to a grayscale image.
///
/// Higher `sigma` values produce more smoothing. Non-positive sigma values
/// (zero or negative) return the image unchanged, since `imageproc`'s
/// underlying function panics on `sigma <= 0.0`.
#[must_use = "returns the blurred image"]
pub fn gaussian_blur(image: &GrayImage, sigma: f32) -> GrayImage {
    if sigma <= 0.0 {
        return image.clone();
    }

    imageproc::filter::gaussian_blur_f32(image, sigma)
}
