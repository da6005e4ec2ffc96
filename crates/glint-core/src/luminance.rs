//! Luma and luma/chroma conversions using ITU-R BT.601 coefficients.
//!
//! These are the weights behind both the grayscale conversion and the
//! brightness transform, which shifts luma while holding chroma fixed.

/// ITU-R BT.601 coefficient for red channel in luma calculation.
pub const LUMA_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green channel in luma calculation.
pub const LUMA_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue channel in luma calculation.
pub const LUMA_B: f32 = 0.114;

/// Red-difference scale: `Cr = (R - Y) / CR_SCALE`.
const CR_SCALE: f32 = 2.0 * (1.0 - LUMA_R);

/// Blue-difference scale: `Cb = (B - Y) / CB_SCALE`.
const CB_SCALE: f32 = 2.0 * (1.0 - LUMA_B);

/// Calculate luma from RGB values on the 0-255 scale.
#[inline]
pub fn calculate_luma(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

/// Calculate luma from u8 RGB values, rounded to the nearest sample.
///
/// # Arguments
/// * `r` - Red channel value (0-255)
/// * `g` - Green channel value (0-255)
/// * `b` - Blue channel value (0-255)
///
/// # Returns
/// Luma value (0-255)
#[inline]
pub fn calculate_luma_u8(r: u8, g: u8, b: u8) -> u8 {
    calculate_luma(r as f32, g as f32, b as f32)
        .clamp(0.0, 255.0)
        .round() as u8
}

/// Convert RGB (0-255) to luma plus zero-centred blue/red difference.
#[inline]
pub fn rgb_to_ycbcr(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let y = calculate_luma(r, g, b);
    (y, (b - y) / CB_SCALE, (r - y) / CR_SCALE)
}

/// Inverse of [`rgb_to_ycbcr`]. The result is not clamped.
#[inline]
pub fn ycbcr_to_rgb(y: f32, cb: f32, cr: f32) -> (f32, f32, f32) {
    let r = y + CR_SCALE * cr;
    let b = y + CB_SCALE * cb;
    let g = (y - LUMA_R * r - LUMA_B * b) / LUMA_G;
    (r, g, b)
}

/// Round and saturate a float sample into `[0, 255]`.
#[inline]
pub fn saturate_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
