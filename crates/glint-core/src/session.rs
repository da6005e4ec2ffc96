//! Interactive editing session.
//!
//! A session exists only once an image has been uploaded. It owns the
//! original upload and an explicit working image, and applies user actions
//! as [`Command`] values.
//!
//! ## Mode semantics
//!
//! Commands belong to one of four edit modes. Switching to a different mode
//! starts again from a copy of the original: edits never compound across
//! modes.
//!
//! Brightness and mood are settings rather than actions. Changing either
//! re-renders `mood(brightness(original))` from the stored values, so moving
//! the slider back to 0 or picking `None` restores the original. The one-shot
//! actions (grayscale, resize, highlight, text) apply to the last rendered
//! result and chain.
//!
//! Export and the remote assistant act on whatever the working image is at
//! the time; they do not switch modes.

use serde::{Deserialize, Serialize};

use crate::assist::{request_text, AssistKind, AssistReply, ContentGenerator};
use crate::decode::{decode_upload, DecodeError, PhotoImage};
use crate::encode::{encode_png, EncodeError};
use crate::transform::{
    brightness, grayscale, highlight, mood_filter, resize, text_overlay, MoodFilter, TextOverlay,
    TransformError,
};

/// Control ranges imposed by the editor UI.
pub mod limits {
    use std::ops::RangeInclusive;

    /// Brightness slider.
    pub const BRIGHTNESS: RangeInclusive<i32> = -100..=100;

    /// Resize width and height sliders.
    pub const RESIZE: RangeInclusive<u32> = 50..=1000;

    /// Font size slider.
    pub const FONT_SIZE: RangeInclusive<u32> = 10..=100;
}

/// The editor's tool groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditMode {
    /// Grayscale and resize.
    #[default]
    BasicEdits,
    /// Brightness and mood filters.
    ColorAndLighting,
    /// Highlight.
    AdvancedTools,
    /// Text overlay.
    TextAndOverlay,
}

impl EditMode {
    /// All modes in menu order.
    pub const ALL: [EditMode; 4] = [
        EditMode::BasicEdits,
        EditMode::ColorAndLighting,
        EditMode::AdvancedTools,
        EditMode::TextAndOverlay,
    ];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            EditMode::BasicEdits => "Basic Edits",
            EditMode::ColorAndLighting => "Color & Lighting",
            EditMode::AdvancedTools => "Advanced Tools",
            EditMode::TextAndOverlay => "Text & Overlay",
        }
    }

    /// Mode at a menu position, if any.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Grayscale,
    Resize { width: u32, height: u32 },
    Brightness(i32),
    Mood(MoodFilter),
    Highlight,
    Text(TextOverlay),
}

impl Command {
    /// The mode whose controls issue this command.
    pub fn mode(&self) -> EditMode {
        match self {
            Command::Grayscale | Command::Resize { .. } => EditMode::BasicEdits,
            Command::Brightness(_) | Command::Mood(_) => EditMode::ColorAndLighting,
            Command::Highlight => EditMode::AdvancedTools,
            Command::Text(_) => EditMode::TextAndOverlay,
        }
    }

    /// Clamp parameters into the UI ranges for an image of the given size.
    ///
    /// Text position is bounded by the image itself.
    pub fn clamped(self, width: u32, height: u32) -> Self {
        match self {
            Command::Brightness(delta) => Command::Brightness(delta.clamp(
                *limits::BRIGHTNESS.start(),
                *limits::BRIGHTNESS.end(),
            )),
            Command::Resize { width: w, height: h } => Command::Resize {
                width: w.clamp(*limits::RESIZE.start(), *limits::RESIZE.end()),
                height: h.clamp(*limits::RESIZE.start(), *limits::RESIZE.end()),
            },
            Command::Text(overlay) => Command::Text(TextOverlay {
                x: overlay.x.min(width),
                y: overlay.y.min(height),
                font_size: overlay
                    .font_size
                    .clamp(*limits::FONT_SIZE.start(), *limits::FONT_SIZE.end()),
                text: overlay.text,
            }),
            other => other,
        }
    }

    /// Apply this command to `image`, returning the new image.
    pub fn apply(&self, image: &PhotoImage, font: Option<&[u8]>) -> Result<PhotoImage, TransformError> {
        Ok(match self {
            Command::Grayscale => grayscale(image),
            Command::Resize { width, height } => resize(image, *width, *height)?,
            Command::Brightness(delta) => brightness(image, *delta),
            Command::Mood(kind) => mood_filter(image, *kind),
            Command::Highlight => highlight(image),
            Command::Text(overlay) => text_overlay(image, overlay, font),
        })
    }
}

/// Current Color & Lighting control values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorSettings {
    /// Brightness delta, 0 = unchanged.
    pub brightness: i32,
    /// Selected mood filter.
    pub mood: MoodFilter,
}

impl ColorSettings {
    /// Render these settings onto `original`: brightness first, then mood.
    pub fn render(&self, original: &PhotoImage) -> PhotoImage {
        mood_filter(&brightness(original, self.brightness), self.mood)
    }
}

/// An editing session over one uploaded image.
#[derive(Debug, Clone)]
pub struct Session {
    original: PhotoImage,
    working: PhotoImage,
    mode: EditMode,
    color: ColorSettings,
    font: Option<Vec<u8>>,
}

impl Session {
    /// Start a session on an already decoded image.
    pub fn new(original: PhotoImage) -> Self {
        Self {
            working: original.clone(),
            original,
            mode: EditMode::default(),
            color: ColorSettings::default(),
            font: None,
        }
    }

    /// Start a session from an uploaded file.
    pub fn from_upload(bytes: &[u8], file_name: &str) -> Result<Self, DecodeError> {
        decode_upload(bytes, file_name).map(Self::new)
    }

    /// The image as uploaded.
    pub fn original(&self) -> &PhotoImage {
        &self.original
    }

    /// The image as currently rendered.
    pub fn working(&self) -> &PhotoImage {
        &self.working
    }

    /// The active edit mode.
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// The Color & Lighting values behind the working image.
    pub fn color(&self) -> ColorSettings {
        self.color
    }

    /// Set the font used by text overlays (`None` selects the built-in font).
    pub fn set_font(&mut self, font: Option<Vec<u8>>) {
        self.font = font;
    }

    /// Switch modes. Returns `true` if the mode changed, in which case the
    /// working image is reset to the original.
    pub fn select_mode(&mut self, mode: EditMode) -> bool {
        if mode == self.mode {
            return false;
        }
        self.mode = mode;
        self.reset();
        true
    }

    /// Discard edits, rebinding the working image to a copy of the original
    /// and clearing the color settings.
    pub fn reset(&mut self) {
        self.working = self.original.clone();
        self.color = ColorSettings::default();
    }

    /// Apply a command, switching to its mode first if needed.
    ///
    /// Brightness and mood update the stored setting and re-render from the
    /// original; other commands act on the working image. On error the
    /// working image is left as it was.
    pub fn apply(&mut self, command: &Command) -> Result<&PhotoImage, TransformError> {
        self.select_mode(command.mode());
        self.working = match command {
            Command::Brightness(delta) => {
                self.color.brightness = *delta;
                self.color.render(&self.original)
            }
            Command::Mood(kind) => {
                self.color.mood = *kind;
                self.color.render(&self.original)
            }
            other => other.apply(&self.working, self.font.as_deref())?,
        };
        Ok(&self.working)
    }

    /// Encode the working image as PNG for download.
    pub fn export_png(&self) -> Result<Vec<u8>, EncodeError> {
        encode_png(&self.working)
    }

    /// Ask the remote assistant about the working image.
    ///
    /// Never fails: errors are folded into the reply's message.
    pub async fn assist<G: ContentGenerator + ?Sized>(
        &self,
        generator: &G,
        kind: AssistKind,
    ) -> AssistReply {
        AssistReply::from_result(kind, request_text(generator, kind, &self.working).await)
    }
}
