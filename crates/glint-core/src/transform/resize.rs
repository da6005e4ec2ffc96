//! Exact-size resampling.
//!
//! Uses the `image` crate's triangle (bilinear) filter. The aspect ratio is
//! not preserved: the output is exactly the requested size.

use image::imageops::FilterType;

use super::TransformError;
use crate::decode::{PhotoImage, PixelLayout};

/// Resize an image to exact dimensions.
///
/// # Arguments
///
/// * `image` - The source image to resize
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
///
/// # Returns
///
/// A new `PhotoImage` of `width x height` with the source's layout.
///
/// # Errors
///
/// Returns `TransformError::InvalidDimensions` if either target dimension is
/// zero, and `TransformError::BufferSize` if the source buffer doesn't match
/// its own dimensions.
pub fn resize(image: &PhotoImage, width: u32, height: u32) -> Result<PhotoImage, TransformError> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidDimensions { width, height });
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let resized = match image.layout {
        PixelLayout::Rgb => {
            let src = image::RgbImage::from_raw(image.width, image.height, image.pixels.clone())
                .ok_or(TransformError::BufferSize)?;
            PhotoImage::from_rgb_image(image::imageops::resize(
                &src,
                width,
                height,
                FilterType::Triangle,
            ))
        }
        PixelLayout::Gray => {
            let src = image::GrayImage::from_raw(image.width, image.height, image.pixels.clone())
                .ok_or(TransformError::BufferSize)?;
            PhotoImage::from_gray_image(image::imageops::resize(
                &src,
                width,
                height,
                FilterType::Triangle,
            ))
        }
    };

    Ok(resized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> PhotoImage {
        // Create a simple gradient image for testing
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8); // R
                pixels.push(((y * 255) / height.max(1)) as u8); // G
                pixels.push(128); // B
            }
        }
        PhotoImage::new(width, height, PixelLayout::Rgb, pixels).unwrap()
    }

    #[test]
    fn test_resize_basic() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 50, 25).unwrap();

        assert_eq!(resized.width, 50);
        assert_eq!(resized.height, 25);
        assert_eq!(resized.pixels.len(), 50 * 25 * 3);
    }

    #[test]
    fn test_resize_same_dimensions() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 100, 50).unwrap();
        assert_eq!(resized, img);
    }

    #[test]
    fn test_resize_upscale() {
        let img = create_test_image(50, 25);
        let resized = resize(&img, 100, 50).unwrap();

        assert_eq!(resized.width, 100);
        assert_eq!(resized.height, 50);
    }

    #[test]
    fn test_resize_ignores_aspect_ratio() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 60, 300).unwrap();
        assert_eq!((resized.width, resized.height), (60, 300));
    }

    #[test]
    fn test_resize_gray_layout() {
        let img = PhotoImage::new(10, 10, PixelLayout::Gray, vec![77u8; 100]).unwrap();
        let resized = resize(&img, 5, 20).unwrap();

        assert_eq!(resized.layout, PixelLayout::Gray);
        assert_eq!(resized.pixels.len(), 5 * 20);
        assert!(resized.pixels.iter().all(|&v| v == 77));
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let img = create_test_image(100, 50);

        assert!(matches!(
            resize(&img, 0, 50),
            Err(TransformError::InvalidDimensions { .. })
        ));
        assert!(resize(&img, 50, 0).is_err());
    }

    #[test]
    fn test_resize_mismatched_buffer() {
        let img = PhotoImage {
            width: 10,
            height: 10,
            layout: PixelLayout::Rgb,
            pixels: vec![0u8; 12],
        };
        assert!(matches!(resize(&img, 5, 5), Err(TransformError::BufferSize)));
    }
}
