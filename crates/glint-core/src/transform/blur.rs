//! Separable Gaussian blur and weighted blending.
//!
//! Borders are handled by reflect-101 (`gfedcb|abcdefgh|gfedcba`), so edge
//! pixels are never mixed with a constant fill colour.

use crate::decode::PhotoImage;
use crate::luminance::saturate_u8;

/// Build a normalized 1-D Gaussian kernel of odd length `size`.
fn gaussian_kernel(size: usize, sigma: f32) -> Vec<f32> {
    let size = size.max(1) | 1;
    let radius = (size / 2) as f32;
    let denom = 2.0 * sigma * sigma;

    let mut kernel: Vec<f32> = (0..size)
        .map(|i| {
            let x = i as f32 - radius;
            (-(x * x) / denom).exp()
        })
        .collect();

    let sum: f32 = kernel.iter().sum();
    for k in &mut kernel {
        *k /= sum;
    }
    kernel
}

/// Blur an image with a `size x size` Gaussian of standard deviation `sigma`.
///
/// The kernel is applied horizontally then vertically. Works on any layout;
/// each channel is filtered independently.
pub fn gaussian_blur(image: &PhotoImage, size: usize, sigma: f32) -> PhotoImage {
    if image.is_empty() {
        return image.clone();
    }

    let kernel = gaussian_kernel(size, sigma);
    let radius = (kernel.len() / 2) as isize;
    let width = image.width as usize;
    let height = image.height as usize;
    let channels = image.channels();
    let stride = width * channels;

    // Horizontal pass
    let mut horizontal = vec![0.0f32; image.pixels.len()];
    for y in 0..height {
        let row = &image.pixels[y * stride..(y + 1) * stride];
        for x in 0..width {
            for c in 0..channels {
                let mut acc = 0.0;
                for (k, weight) in kernel.iter().enumerate() {
                    let sx = reflect_101(x as isize + k as isize - radius, width);
                    acc += weight * row[sx * channels + c] as f32;
                }
                horizontal[y * stride + x * channels + c] = acc;
            }
        }
    }

    // Vertical pass
    let mut pixels = vec![0u8; image.pixels.len()];
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut acc = 0.0;
                for (k, weight) in kernel.iter().enumerate() {
                    let sy = reflect_101(y as isize + k as isize - radius, height);
                    acc += weight * horizontal[sy * stride + x * channels + c];
                }
                pixels[y * stride + x * channels + c] = saturate_u8(acc);
            }
        }
    }

    PhotoImage {
        width: image.width,
        height: image.height,
        layout: image.layout,
        pixels,
    }
}

/// Weighted sum `a * alpha + b * beta`, rounded and saturated.
///
/// Both images must share dimensions and layout.
pub fn blend(a: &PhotoImage, alpha: f32, b: &PhotoImage, beta: f32) -> PhotoImage {
    debug_assert_eq!(a.pixels.len(), b.pixels.len(), "Blend size mismatch");
    PhotoImage {
        width: a.width,
        height: a.height,
        layout: a.layout,
        pixels: a
            .pixels
            .iter()
            .zip(&b.pixels)
            .map(|(&pa, &pb)| saturate_u8(pa as f32 * alpha + pb as f32 * beta))
            .collect(),
    }
}

/// Mirror an out-of-range index back into `0..len` without repeating the edge.
#[inline]
fn reflect_101(mut i: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let last = len as isize - 1;
    loop {
        if i < 0 {
            i = -i;
        } else if i > last {
            i = 2 * last - i;
        } else {
            return i as usize;
        }
    }
}
