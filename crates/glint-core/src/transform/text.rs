//! White text overlay.
//!
//! Text is drawn with a caller-supplied TrueType/OpenType font when one is
//! given and parses; otherwise the built-in 8x8 bitmap font is scaled up to
//! roughly the requested size. Both paths anchor the text at its top-left
//! corner and clip anything that falls outside the image.

use ab_glyph::{point, Font, FontRef, PxScale, ScaleFont};
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use serde::{Deserialize, Serialize};

use crate::decode::PhotoImage;

/// Side length of a bitmap fallback glyph, in font pixels.
const BITMAP_CELL: u32 = 8;

/// Largest em size actually rendered; bigger requests draw at this size.
const MAX_TEXT_PX: u32 = 4096;

/// Parameters of a text overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextOverlay {
    /// Text to draw. `\n` starts a new line.
    pub text: String,
    /// Left edge of the text, in pixels.
    pub x: u32,
    /// Top edge of the text, in pixels.
    pub y: u32,
    /// Requested font size (em height) in pixels.
    pub font_size: u32,
}

impl Default for TextOverlay {
    fn default() -> Self {
        Self {
            text: "Hello World!".to_string(),
            x: 10,
            y: 10,
            font_size: 32,
        }
    }
}

/// Draw `overlay.text` in white on a copy of `image`.
///
/// # Arguments
///
/// * `image` - Source image (left untouched)
/// * `overlay` - Text, top-left position and font size
/// * `font` - Raw font file bytes; `None` or unparsable bytes select the
///   built-in bitmap font
pub fn text_overlay(image: &PhotoImage, overlay: &TextOverlay, font: Option<&[u8]>) -> PhotoImage {
    let mut canvas = image.clone();
    if overlay.text.is_empty() || image.is_empty() {
        return canvas;
    }

    match font.and_then(|bytes| FontRef::try_from_slice(bytes).ok()) {
        Some(font) => draw_outline_text(&mut canvas, overlay, &font),
        None => draw_bitmap_text(&mut canvas, overlay),
    }
    canvas
}

fn draw_outline_text(canvas: &mut PhotoImage, overlay: &TextOverlay, font: &FontRef<'_>) {
    let size = overlay.font_size.clamp(1, MAX_TEXT_PX) as f32;
    // Scale so that one em spans `size` pixels.
    let scale = match font.units_per_em() {
        Some(units_per_em) => PxScale::from(size * font.height_unscaled() / units_per_em),
        None => PxScale::from(size),
    };
    let scaled = font.as_scaled(scale);
    let line_height = scaled.ascent() - scaled.descent() + scaled.line_gap();
    let (width, height) = (canvas.width as f32, canvas.height as f32);

    let origin_x = overlay.x as f32;
    let mut caret_x = origin_x;
    let mut baseline = overlay.y as f32 + scaled.ascent();
    let mut previous = None;

    for c in overlay.text.chars() {
        if c == '\n' {
            caret_x = origin_x;
            baseline += line_height;
            previous = None;
            continue;
        }

        let id = font.glyph_id(c);
        if let Some(prev) = previous {
            caret_x += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret_x, baseline));
        caret_x += scaled.h_advance(id);
        previous = Some(id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            if bounds.min.x >= width
                || bounds.min.y >= height
                || bounds.max.x <= 0.0
                || bounds.max.y <= 0.0
            {
                continue;
            }
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i64 + gx as i64;
                let py = bounds.min.y as i64 + gy as i64;
                paint_white(canvas, px, py, coverage);
            });
        }
    }
}

fn draw_bitmap_text(canvas: &mut PhotoImage, overlay: &TextOverlay) {
    let cell = bitmap_cell(overlay.font_size);
    let advance = BITMAP_CELL as i64 * cell;
    let (width, height) = (canvas.width as i64, canvas.height as i64);

    let mut origin_x = overlay.x as i64;
    let mut origin_y = overlay.y as i64;

    for c in overlay.text.chars() {
        if c == '\n' {
            origin_x = overlay.x as i64;
            origin_y += advance;
            continue;
        }

        if origin_x < width && origin_y < height {
            if let Some(rows) = BASIC_FONTS.get(c).or_else(|| LATIN_FONTS.get(c)) {
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..BITMAP_CELL {
                        if bits & (1 << col) == 0 {
                            continue;
                        }
                        let left = origin_x + col as i64 * cell;
                        let top = origin_y + row as i64 * cell;
                        fill_white(canvas, left, top, cell);
                    }
                }
            }
        }
        origin_x += advance;
    }
}

/// Side of one bitmap font pixel, in image pixels.
fn bitmap_cell(font_size: u32) -> i64 {
    let size = font_size.min(MAX_TEXT_PX) as f32;
    (size / BITMAP_CELL as f32).round().max(1.0) as i64
}

/// Paint an opaque white square, clipped to the canvas.
fn fill_white(canvas: &mut PhotoImage, left: i64, top: i64, side: i64) {
    let x_end = left.saturating_add(side).min(canvas.width as i64);
    let y_end = top.saturating_add(side).min(canvas.height as i64);
    for y in top.max(0)..y_end {
        for x in left.max(0)..x_end {
            paint_white(canvas, x, y, 1.0);
        }
    }
}

/// Blend white into one pixel with the given coverage; out-of-bounds is a no-op.
#[inline]
fn paint_white(canvas: &mut PhotoImage, x: i64, y: i64, coverage: f32) {
    if x < 0 || y < 0 || x >= canvas.width as i64 || y >= canvas.height as i64 {
        return;
    }
    let coverage = coverage.clamp(0.0, 1.0);
    if coverage <= 0.0 {
        return;
    }

    let channels = canvas.channels();
    let start = (y as usize * canvas.width as usize + x as usize) * channels;
    for sample in &mut canvas.pixels[start..start + channels] {
        let blended = *sample as f32 + (255.0 - *sample as f32) * coverage;
        *sample = blended.round().min(255.0) as u8;
    }
}
