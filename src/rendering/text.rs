//! # Text Rendering
//!
//! Font styles, text measurement and pre-measured multi-line text blocks.

use crate::config::{FONT_SIZE_BIG, FONT_SIZE_SMALL, LINE_SPACING};
use log::{info, warn};
use macroquad::prelude::*;
use std::path::Path;

/// A font together with the size and color it is drawn with.
#[derive(Clone)]
pub struct FontStyle {
    /// Loaded TrueType font, or `None` for macroquad's built-in font
    pub font: Option<Font>,
    /// Font size in pixels
    pub size: u16,
    /// Text color
    pub color: Color,
}

impl FontStyle {
    /// Creates a style using the built-in font.
    pub fn builtin(size: u16, color: Color) -> Self {
        Self {
            font: None,
            size,
            color,
        }
    }

    /// Height of one line of text in this style.
    pub fn line_height(&self) -> f32 {
        self.size as f32 * LINE_SPACING
    }
}

impl std::fmt::Debug for FontStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontStyle")
            .field("custom_font", &self.font.is_some())
            .field("size", &self.size)
            .field("color", &self.color)
            .finish()
    }
}

/// The fonts shared by every screen.
#[derive(Debug, Clone)]
pub struct Fonts {
    /// Large font for titles
    pub big: FontStyle,
    /// Small black font for informational text
    pub small_black: FontStyle,
}

impl Default for Fonts {
    fn default() -> Self {
        Self {
            big: FontStyle::builtin(FONT_SIZE_BIG, DARKGRAY),
            small_black: FontStyle::builtin(FONT_SIZE_SMALL, BLACK),
        }
    }
}

impl Fonts {
    /// Loads `fonts/main.ttf` from the assets directory.
    ///
    /// Falls back to the built-in font when the file does not exist.
    pub async fn load(assets_dir: &Path) -> Self {
        let mut fonts = Self::default();
        let path = assets_dir.join("fonts").join("main.ttf");

        if !path.exists() {
            info!("No font at {}, using built-in font", path.display());
            return fonts;
        }

        match load_ttf_font(&path.to_string_lossy()).await {
            Ok(font) => {
                info!("Loaded font {}", path.display());
                fonts.big.font = Some(font.clone());
                fonts.small_black.font = Some(font);
            }
            Err(e) => warn!("Failed to load font {}: {}", path.display(), e),
        }

        fonts
    }
}

/// Measured extent of a single line of text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextSize {
    pub width: f32,
    pub height: f32,
    /// Distance from the top of the glyphs to the baseline
    pub ascent: f32,
}

/// Measures single lines of text in a given style.
pub trait TextMeasure {
    fn measure(&self, line: &str, style: &FontStyle) -> TextSize;
}

/// Measurement backed by macroquad's font rasterizer.
///
/// Requires a live graphics context.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacroquadMeasure;

impl TextMeasure for MacroquadMeasure {
    fn measure(&self, line: &str, style: &FontStyle) -> TextSize {
        let dims = measure_text(line, style.font.as_ref(), style.size, 1.0);
        TextSize {
            width: dims.width,
            height: dims.height,
            ascent: dims.offset_y,
        }
    }
}

/// Fixed-advance approximation that works without a graphics context.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMeasure {
    /// Glyph advance as a fraction of the font size
    pub advance: f32,
    /// Glyph height as a fraction of the font size
    pub cap_height: f32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            advance: 0.5,
            cap_height: 0.75,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, line: &str, style: &FontStyle) -> TextSize {
        let size = style.size as f32;
        let height = if line.is_empty() {
            0.0
        } else {
            size * self.cap_height
        };
        TextSize {
            width: line.chars().count() as f32 * size * self.advance,
            height,
            ascent: height,
        }
    }
}

/// A block of text measured once and drawn every frame.
///
/// `width` is the widest line; `height` spans from the top of the first line
/// to the bottom of the last.
#[derive(Debug, Clone)]
pub struct TextLayout {
    pub text: String,
    pub style: FontStyle,
    pub lines: Vec<String>,
    pub width: f32,
    pub height: f32,
    ascent: f32,
}

impl TextLayout {
    /// Measures `text` in `style`. Lines are separated by `\n`.
    pub fn new(measure: &dyn TextMeasure, style: &FontStyle, text: impl Into<String>) -> Self {
        let text = text.into();
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();

        let sizes: Vec<TextSize> = lines.iter().map(|l| measure.measure(l, style)).collect();
        let width = sizes.iter().map(|s| s.width).fold(0.0, f32::max);
        let first = sizes.first().copied().unwrap_or_default();
        let height = first.height + (lines.len().saturating_sub(1)) as f32 * style.line_height();

        Self {
            text,
            style: style.clone(),
            lines,
            width,
            height,
            ascent: first.ascent,
        }
    }

    /// Draws the block with its top-left corner at stage coordinates (`x`, `y`).
    pub fn draw(&self, x: f32, y: f32, stage_height: f32) {
        let top = stage_height - y;
        let line_height = self.style.line_height();

        for (i, line) in self.lines.iter().enumerate() {
            draw_text_ex(
                line,
                x,
                top + self.ascent + i as f32 * line_height,
                TextParams {
                    font: self.style.font.as_ref(),
                    font_size: self.style.size,
                    color: self.style.color,
                    ..Default::default()
                },
            );
        }
    }
}
