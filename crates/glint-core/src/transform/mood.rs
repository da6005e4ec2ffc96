//! Mood filters: fixed, whole-image pixel recipes selected by name.
//!
//! | Filter  | Recipe                                                  |
//! |---------|---------------------------------------------------------|
//! | Sunny   | `abs(v * 1.1 + 30)`                                     |
//! | Cool    | blue channel +30                                        |
//! | Warm    | red channel +30                                         |
//! | Dreamy  | 50/50 blend with a 15x15, sigma 10 Gaussian blur        |
//! | Moody   | `abs(v * 0.8 - 30)`                                     |
//! | None    | identity                                                |
//!
//! All arithmetic saturates to `[0, 255]`.

use serde::{Deserialize, Serialize};

use super::blur::{blend, gaussian_blur};
use super::tone::linear_scale_abs;
use crate::decode::{PhotoImage, PixelLayout};

/// Channel shift applied by the Cool and Warm filters.
pub const TINT_SHIFT: u8 = 30;

/// Kernel size of the Dreamy filter's blur.
pub const DREAMY_KERNEL_SIZE: usize = 15;

/// Standard deviation of the Dreamy filter's blur.
pub const DREAMY_SIGMA: f32 = 10.0;

/// One of the fixed mood recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoodFilter {
    /// Identity.
    #[default]
    None,
    Sunny,
    Cool,
    Warm,
    Dreamy,
    Moody,
}

impl MoodFilter {
    /// All filters in the order the picker lists them.
    pub const ALL: [MoodFilter; 6] = [
        MoodFilter::None,
        MoodFilter::Sunny,
        MoodFilter::Cool,
        MoodFilter::Warm,
        MoodFilter::Dreamy,
        MoodFilter::Moody,
    ];

    /// Look a filter up by its picker label.
    ///
    /// Unknown names map to `MoodFilter::None`, which is the identity.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Sunny" => MoodFilter::Sunny,
            "Cool" => MoodFilter::Cool,
            "Warm" => MoodFilter::Warm,
            "Dreamy" => MoodFilter::Dreamy,
            "Moody" => MoodFilter::Moody,
            _ => MoodFilter::None,
        }
    }

    /// Picker label for this filter.
    pub fn name(self) -> &'static str {
        match self {
            MoodFilter::None => "None",
            MoodFilter::Sunny => "Sunny",
            MoodFilter::Cool => "Cool",
            MoodFilter::Warm => "Warm",
            MoodFilter::Dreamy => "Dreamy",
            MoodFilter::Moody => "Moody",
        }
    }
}

/// Apply a mood filter, returning a new image.
///
/// Cool and Warm need a colour channel to tint, so they leave gray images
/// unchanged.
pub fn mood_filter(image: &PhotoImage, kind: MoodFilter) -> PhotoImage {
    match kind {
        MoodFilter::None => image.clone(),
        MoodFilter::Sunny => linear_scale_abs(image, 1.1, 30.0),
        MoodFilter::Moody => linear_scale_abs(image, 0.8, -30.0),
        MoodFilter::Cool => shift_channel(image, 2, TINT_SHIFT),
        MoodFilter::Warm => shift_channel(image, 0, TINT_SHIFT),
        MoodFilter::Dreamy => {
            let blurred = gaussian_blur(image, DREAMY_KERNEL_SIZE, DREAMY_SIGMA);
            blend(image, 0.5, &blurred, 0.5)
        }
    }
}

/// Add `amount` to one RGB channel, saturating.
fn shift_channel(image: &PhotoImage, channel: usize, amount: u8) -> PhotoImage {
    if image.layout != PixelLayout::Rgb {
        return image.clone();
    }
    let mut pixels = image.pixels.clone();
    for chunk in pixels.chunks_exact_mut(3) {
        chunk[channel] = chunk[channel].saturating_add(amount);
    }
    PhotoImage {
        width: image.width,
        height: image.height,
        layout: image.layout,
        pixels,
    }
}
