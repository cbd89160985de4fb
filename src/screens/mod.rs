//! # Screens
//!
//! The concrete screens of the game.

pub mod menu;
pub mod mode;

pub use menu::*;
pub use mode::*;

use crate::app::{AppContext, Screen, ScreenId};

/// Builds the screen for `id` sized to the context's viewport.
pub fn create_screen(id: ScreenId, ctx: &AppContext) -> Box<dyn Screen> {
    let (width, height) = (ctx.viewport_width, ctx.viewport_height);
    match id {
        ScreenId::Menu => Box::new(MenuScreen::new(width, height)),
        ScreenId::MatchSounds | ScreenId::CustomMode => {
            Box::new(GameModeScreen::new(id, width, height))
        }
    }
}
