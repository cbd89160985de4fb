//! # Rendering Module
//!
//! Fonts, measured text layouts and the texture cache used by the screens.

pub mod assets;
pub mod text;

pub use assets::*;
pub use text::*;

use macroquad::math::Rect;

/// Converts a y-up stage rectangle to macroquad's y-down screen space.
pub fn to_screen_rect(bounds: Rect, stage_height: f32) -> Rect {
    Rect::new(bounds.x, stage_height - bounds.y - bounds.h, bounds.w, bounds.h)
}
