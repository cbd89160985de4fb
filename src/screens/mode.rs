//! # Game Mode Screens
//!
//! Landing screens for the two game modes. They show which mode was chosen
//! and offer a way back to the menu.

use crate::app::{AppContext, GameMode, Screen, ScreenId};
use crate::config::{BACKGROUND_TEXTURE, CLEAR_COLOR};
use crate::input::PointerEvent;
use crate::rendering::TextLayout;
use crate::ui::{Actor, ButtonId, Stage, StageEvent, TextButton};
use log::warn;
use macroquad::prelude::*;

const BACK_BUTTON_WIDTH: f32 = 300.0;
const BACK_BUTTON_HEIGHT: f32 = 120.0;
const BACK_BUTTON_MARGIN: f32 = 50.0;

/// Screen shown after choosing Survival or Custom from the menu.
pub struct GameModeScreen {
    id: ScreenId,
    stage: Stage,
    heading: Option<TextLayout>,
}

impl GameModeScreen {
    pub fn new(id: ScreenId, width: f32, height: f32) -> Self {
        Self {
            id,
            stage: Stage::new(width, height),
            heading: None,
        }
    }

    /// Heading for the active mode, falling back to this screen's own mode.
    pub fn heading_for(&self, mode: Option<GameMode>) -> &'static str {
        let mode = mode.unwrap_or(match self.id {
            ScreenId::CustomMode => GameMode::Custom,
            _ => GameMode::Survival,
        });
        match mode {
            GameMode::Survival => "Survival mode",
            GameMode::Custom => "Custom mode",
        }
    }

    pub fn heading(&self) -> Option<&TextLayout> {
        self.heading.as_ref()
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }
}

impl Screen for GameModeScreen {
    fn id(&self) -> ScreenId {
        self.id
    }

    fn show(&mut self, ctx: &mut AppContext) {
        self.stage.clear();

        if ctx.game_mode().is_none() {
            warn!("{} screen shown without a game mode", self.id);
        }
        let heading = self.heading_for(ctx.game_mode());
        self.heading = Some(TextLayout::new(ctx.measure.as_ref(), &ctx.fonts.big, heading));

        self.stage.add_actor(Actor::Image {
            texture: BACKGROUND_TEXTURE.to_string(),
            bounds: Rect::new(0.0, 0.0, self.stage.width(), self.stage.height()),
        });

        let mut back = TextButton::new(ButtonId::Back, "Back", &ctx.skins.small);
        back.set_size(BACK_BUTTON_WIDTH, BACK_BUTTON_HEIGHT);
        back.set_position(BACK_BUTTON_MARGIN, BACK_BUTTON_MARGIN);
        self.stage.add_actor(Actor::Button(back));
    }

    fn handle_input(&mut self, event: PointerEvent, ctx: &mut AppContext) {
        if let StageEvent::Released(ButtonId::Back) = self.stage.handle_pointer(event) {
            ctx.set_screen(ScreenId::Menu);
        }
    }

    fn render(&mut self, ctx: &mut AppContext, delta: f32) {
        clear_background(CLEAR_COLOR);

        self.stage.act(delta);
        self.stage.draw(&ctx.assets);

        if let Some(heading) = &self.heading {
            let (width, height) = (self.stage.width(), self.stage.height());
            heading.draw(
                width / 2.0 - heading.width / 2.0,
                height / 2.0 + heading.height / 2.0,
                height,
            );
        }
    }

    fn dispose(&mut self) {
        self.stage.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_follows_game_mode() {
        let screen = GameModeScreen::new(ScreenId::MatchSounds, 720.0, 1280.0);
        assert_eq!(screen.heading_for(Some(GameMode::Survival)), "Survival mode");
        assert_eq!(screen.heading_for(Some(GameMode::Custom)), "Custom mode");
        assert_eq!(screen.heading_for(None), "Survival mode");

        let custom = GameModeScreen::new(ScreenId::CustomMode, 720.0, 1280.0);
        assert_eq!(custom.heading_for(None), "Custom mode");
    }

    #[test]
    fn test_back_returns_to_menu() {
        let mut ctx = AppContext::headless();
        ctx.set_game_mode(GameMode::Custom);

        let mut screen = GameModeScreen::new(ScreenId::CustomMode, 720.0, 1280.0);
        screen.show(&mut ctx);
        assert_eq!(screen.heading().unwrap().text, "Custom mode");

        // back button spans stage y 50..170, i.e. screen y 1110..1230
        screen.handle_input(PointerEvent::down(100.0, 1200.0), &mut ctx);
        assert_eq!(ctx.pending_screen(), None);
        screen.handle_input(PointerEvent::up(100.0, 1200.0), &mut ctx);
        assert_eq!(ctx.take_pending_screen(), Some(ScreenId::Menu));
    }
}
