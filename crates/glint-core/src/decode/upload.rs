//! Upload decoding: accept a file by extension and decode it to RGB.

use std::io::Cursor;
use std::path::Path;

use image::ImageReader;

use super::{DecodeError, PhotoImage};

/// File extensions accepted by the uploader (compared case-insensitively).
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Check whether a file name carries one of the accepted extensions.
pub fn is_supported_upload(file_name: &str) -> bool {
    upload_extension(file_name).is_some()
}

/// Decode an uploaded file into an RGB image.
///
/// The file is accepted or rejected by its extension; the decoder itself
/// sniffs the actual container from the bytes. Whatever the source colour
/// type (palette, gray, RGBA, 16-bit), the result is 8-bit RGB.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedType` for any extension outside
/// [`ACCEPTED_EXTENSIONS`] and `DecodeError::CorruptedFile` when the bytes
/// cannot be decoded.
pub fn decode_upload(bytes: &[u8], file_name: &str) -> Result<PhotoImage, DecodeError> {
    if upload_extension(file_name).is_none() {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        return Err(DecodeError::UnsupportedType(ext.to_string()));
    }
    decode_bytes(bytes)
}

/// Decode image bytes of any supported container to RGB.
pub fn decode_bytes(bytes: &[u8]) -> Result<PhotoImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    Ok(PhotoImage::from_rgb_image(img.into_rgb8()))
}

fn upload_extension(file_name: &str) -> Option<&'static str> {
    let ext = Path::new(file_name).extension()?.to_str()?;
    ACCEPTED_EXTENSIONS
        .iter()
        .copied()
        .find(|accepted| accepted.eq_ignore_ascii_case(ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::PixelLayout;
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    fn png_bytes(img: image::DynamicImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_upload("photo.jpg"));
        assert!(is_supported_upload("photo.JPEG"));
        assert!(is_supported_upload("dir/shot.Png"));
        assert!(!is_supported_upload("anim.gif"));
        assert!(!is_supported_upload("no_extension"));
        assert!(!is_supported_upload("archive.png.zip"));
    }

    #[test]
    fn test_decode_png_upload() {
        let bytes = png_bytes(image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            4,
            3,
            image::Rgb([10, 20, 30]),
        )));
        let img = decode_upload(&bytes, "upload.png").unwrap();
        assert_eq!((img.width, img.height), (4, 3));
        assert_eq!(img.layout, PixelLayout::Rgb);
        assert_eq!(&img.pixels[0..3], &[10, 20, 30]);
    }

    #[test]
    fn test_decode_drops_alpha() {
        let bytes = png_bytes(image::DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            2,
            2,
            Rgba([200, 100, 50, 0]),
        )));
        let img = decode_upload(&bytes, "alpha.png").unwrap();
        assert_eq!(img.pixels.len(), 2 * 2 * 3);
        assert_eq!(&img.pixels[0..3], &[200, 100, 50]);
    }

    #[test]
    fn test_decode_gray_source_becomes_rgb() {
        let bytes = png_bytes(image::DynamicImage::ImageLuma8(GrayImage::from_pixel(
            2,
            1,
            Luma([90]),
        )));
        let img = decode_upload(&bytes, "gray.png").unwrap();
        assert_eq!(img.layout, PixelLayout::Rgb);
        assert_eq!(img.pixels, vec![90, 90, 90, 90, 90, 90]);
    }

    #[test]
    fn test_jpeg_extension_sniffs_content() {
        // Content is PNG; the extension only gates acceptance.
        let bytes = png_bytes(image::DynamicImage::ImageRgb8(image::RgbImage::new(2, 2)));
        assert!(decode_upload(&bytes, "mislabelled.jpg").is_ok());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = decode_upload(&[0u8; 8], "clip.gif").unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedType(ref e) if e == "gif"));
    }

    #[test]
    fn test_corrupted_bytes() {
        let err = decode_upload(&[0x89, 0x50, 0x4E, 0x47, 0x00], "broken.png").unwrap_err();
        assert!(matches!(err, DecodeError::CorruptedFile(_)));
    }
}
