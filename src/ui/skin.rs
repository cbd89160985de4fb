//! # Skins
//!
//! Visual styling bundles applied to buttons.

use crate::config::{FONT_SIZE_BUTTON, FONT_SIZE_BUTTON_SMALL};
use crate::rendering::FontStyle;
use macroquad::prelude::*;

/// Colors and font for one button style.
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    pub font: FontStyle,
    pub up: Color,
    pub over: Color,
    pub down: Color,
    pub border: Color,
    pub border_thickness: f32,
}

impl ButtonStyle {
    /// Fill color for the given interaction state.
    pub fn fill(&self, pressed: bool, hovered: bool) -> Color {
        if pressed {
            self.down
        } else if hovered {
            self.over
        } else {
            self.up
        }
    }
}

/// The skins shared by every screen.
#[derive(Debug, Clone)]
pub struct Skins {
    /// Large buttons
    pub default: ButtonStyle,
    /// Small buttons such as the info toggle
    pub small: ButtonStyle,
}

impl Default for Skins {
    fn default() -> Self {
        let base = ButtonStyle {
            font: FontStyle::builtin(FONT_SIZE_BUTTON, WHITE),
            up: Color::from_rgba(52, 73, 94, 230),
            over: Color::from_rgba(70, 98, 125, 240),
            down: Color::from_rgba(33, 47, 61, 255),
            border: Color::from_rgba(236, 240, 241, 255),
            border_thickness: 4.0,
        };

        Self {
            small: ButtonStyle {
                font: FontStyle::builtin(FONT_SIZE_BUTTON_SMALL, WHITE),
                border_thickness: 2.0,
                ..base.clone()
            },
            default: base,
        }
    }
}

impl Skins {
    /// Uses `font` for every button style, keeping sizes and colors.
    pub fn with_font(mut self, font: Option<Font>) -> Self {
        self.default.font.font = font.clone();
        self.small.font.font = font;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_prefers_pressed_over_hover() {
        let skins = Skins::default();
        let style = &skins.default;
        assert_eq!(style.fill(true, true), style.down);
        assert_eq!(style.fill(false, true), style.over);
        assert_eq!(style.fill(false, false), style.up);
    }

    #[test]
    fn test_small_skin_is_smaller() {
        let skins = Skins::default();
        assert!(skins.small.font.size < skins.default.font.size);
    }
}
