//! Global tonal transforms: brightness and the linear scale-abs recipe.

use crate::decode::{PhotoImage, PixelLayout};
use crate::luminance::{rgb_to_ycbcr, saturate_u8, ycbcr_to_rgb};

/// Gain used by [`highlight`].
pub const HIGHLIGHT_GAIN: f32 = 1.2;

/// Offset used by [`highlight`].
pub const HIGHLIGHT_OFFSET: f32 = 10.0;

/// Shift image brightness by `delta` on the luma axis.
///
/// Each pixel is converted to BT.601 luma/chroma, `delta` is added to luma,
/// luma is clamped to `[0, 255]` and the pixel is converted back. Chroma is
/// untouched, so hue and saturation change only where a channel clips.
///
/// Gray images add `delta` to their single channel.
///
/// # Example
///
/// ```ignore
/// use glint_core::decode::PhotoImage;
/// use glint_core::transform::brightness;
///
/// let red = PhotoImage::filled(1, 1, [255, 0, 0]);
/// let brighter = brightness(&red, 50);
/// assert_eq!(brighter.pixels, vec![255, 50, 50]);
/// ```
pub fn brightness(image: &PhotoImage, delta: i32) -> PhotoImage {
    // Early exit: zero shift is an exact copy
    if delta == 0 {
        return image.clone();
    }
    let delta = delta as f32;

    match image.layout {
        PixelLayout::Gray => image.map_samples(|v| saturate_u8(v as f32 + delta)),
        PixelLayout::Rgb => {
            let mut pixels = image.pixels.clone();
            for chunk in pixels.chunks_exact_mut(3) {
                let (y, cb, cr) =
                    rgb_to_ycbcr(chunk[0] as f32, chunk[1] as f32, chunk[2] as f32);
                let y = (y + delta).clamp(0.0, 255.0);
                let (r, g, b) = ycbcr_to_rgb(y, cb, cr);
                chunk[0] = saturate_u8(r);
                chunk[1] = saturate_u8(g);
                chunk[2] = saturate_u8(b);
            }
            PhotoImage {
                width: image.width,
                height: image.height,
                layout: image.layout,
                pixels,
            }
        }
    }
}

/// Boost contrast and brightness with a fixed gain of 1.2 and offset of +10.
pub fn highlight(image: &PhotoImage) -> PhotoImage {
    linear_scale_abs(image, HIGHLIGHT_GAIN, HIGHLIGHT_OFFSET)
}

/// Apply `|v * gain + offset|` to every sample, rounded and saturated.
///
/// The absolute value means a negative offset folds dark samples back up
/// instead of crushing them to black.
pub fn linear_scale_abs(image: &PhotoImage, gain: f32, offset: f32) -> PhotoImage {
    image.map_samples(|v| saturate_u8((v as f32 * gain + offset).abs()))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn rgb_image_strategy() -> impl Strategy<Value = PhotoImage> {
        (1u32..=12, 1u32..=12).prop_flat_map(|(w, h)| {
            let len = (w * h * 3) as usize;
            prop::collection::vec(any::<u8>(), len..=len)
                .prop_map(move |pixels| PhotoImage::new(w, h, PixelLayout::Rgb, pixels).unwrap())
        })
    }

    proptest! {
        /// Property: Brightness keeps shape and layout for any delta.
        #[test]
        fn prop_brightness_preserves_shape(img in rgb_image_strategy(), delta in -100i32..=100) {
            let result = brightness(&img, delta);
            prop_assert_eq!((result.width, result.height), (img.width, img.height));
            prop_assert_eq!(result.layout, img.layout);
            prop_assert_eq!(result.pixels.len(), img.pixels.len());
        }

        /// Property: Positive deltas never darken a channel.
        #[test]
        fn prop_positive_delta_is_monotonic(img in rgb_image_strategy(), delta in 1i32..=100) {
            let result = brightness(&img, delta);
            for (before, after) in img.pixels.iter().zip(&result.pixels) {
                prop_assert!(after >= before);
            }
        }

        /// Property: Highlight never darkens a sample.
        #[test]
        fn prop_highlight_never_darkens(img in rgb_image_strategy()) {
            let result = highlight(&img);
            for (before, after) in img.pixels.iter().zip(&result.pixels) {
                prop_assert!(after >= before);
            }
        }
    }
}
