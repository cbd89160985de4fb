//! # Text Buttons
//!
//! Rectangular buttons with a centered label.

use crate::rendering::{to_screen_rect, MacroquadMeasure, TextMeasure};
use crate::ui::ButtonStyle;
use macroquad::prelude::*;

/// Identity of every button the screens create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    /// Start the survival game mode
    Survival,
    /// Start the custom game mode
    Custom,
    /// Quit the application
    Exit,
    /// Toggle the statistics panel
    Info,
    /// Return to the main menu
    Back,
}

/// A button with a text label, positioned in stage coordinates.
#[derive(Debug, Clone)]
pub struct TextButton {
    pub id: ButtonId,
    pub label: String,
    pub style: ButtonStyle,
    bounds: Rect,
    pressed: bool,
    hovered: bool,
}

impl TextButton {
    /// Creates a zero-sized button at the origin.
    pub fn new(id: ButtonId, label: impl Into<String>, style: &ButtonStyle) -> Self {
        Self {
            id,
            label: label.into(),
            style: style.clone(),
            bounds: Rect::new(0.0, 0.0, 0.0, 0.0),
            pressed: false,
            hovered: false,
        }
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.bounds.w = width;
        self.bounds.h = height;
    }

    /// Moves the bottom-left corner to (`x`, `y`).
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;
    }

    pub fn x(&self) -> f32 {
        self.bounds.x
    }

    pub fn y(&self) -> f32 {
        self.bounds.y
    }

    pub fn width(&self) -> f32 {
        self.bounds.w
    }

    pub fn height(&self) -> f32 {
        self.bounds.h
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub(crate) fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Whether the stage point lies inside the button.
    pub fn hit(&self, point: Vec2) -> bool {
        point.x >= self.bounds.x
            && point.x <= self.bounds.x + self.bounds.w
            && point.y >= self.bounds.y
            && point.y <= self.bounds.y + self.bounds.h
    }

    /// Draws the button body and its centered label.
    pub fn draw(&self, stage_height: f32) {
        let rect = to_screen_rect(self.bounds, stage_height);
        let style = &self.style;

        draw_rectangle(rect.x, rect.y, rect.w, rect.h, style.fill(self.pressed, self.hovered));
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, style.border_thickness, style.border);

        let size = MacroquadMeasure.measure(&self.label, &style.font);
        draw_text_ex(
            &self.label,
            rect.x + (rect.w - size.width) / 2.0,
            rect.y + (rect.h - size.height) / 2.0 + size.ascent,
            TextParams {
                font: style.font.font.as_ref(),
                font_size: style.font.size,
                color: style.font.color,
                ..Default::default()
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Skins;

    #[test]
    fn test_hit_includes_edges() {
        let mut button = TextButton::new(ButtonId::Exit, "Exit", &Skins::default().default);
        button.set_size(600.0, 200.0);
        button.set_position(60.0, 100.0);

        assert!(button.hit(vec2(60.0, 100.0)));
        assert!(button.hit(vec2(660.0, 300.0)));
        assert!(button.hit(vec2(300.0, 200.0)));
        assert!(!button.hit(vec2(59.0, 200.0)));
        assert!(!button.hit(vec2(300.0, 301.0)));
    }
}
