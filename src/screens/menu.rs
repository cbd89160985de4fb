//! # Main Menu
//!
//! Title, Survival/Custom/Exit buttons and an info toggle revealing the
//! player's survival statistics.

use crate::app::{AppContext, GameMode, Screen, ScreenId};
use crate::config::*;
use crate::input::PointerEvent;
use crate::rendering::TextLayout;
use crate::storage::Preferences;
use crate::ui::{Actor, ButtonId, Stage, StageEvent, TextButton};
use log::{debug, info};
use macroquad::prelude::*;

/// The main menu screen.
///
/// Widgets are rebuilt on every [`show`](Screen::show); the info panel is
/// hidden again each time.
pub struct MenuScreen {
    stage: Stage,
    info_visible: bool,
    title_text: Option<TextLayout>,
    info_text: Option<TextLayout>,
}

impl MenuScreen {
    /// Creates the menu with a stage of the given viewport size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            stage: Stage::new(width, height),
            info_visible: false,
            title_text: None,
            info_text: None,
        }
    }

    /// Formats the statistics shown in the info panel.
    ///
    /// # Examples
    ///
    /// ```
    /// use match_sounds::{MenuScreen, Preferences};
    ///
    /// let mut prefs = Preferences::in_memory();
    /// prefs.put_integer("survivalBest", 42);
    /// prefs.put_integer("survivalGamesPlayed", 3);
    /// prefs.put_integer("roundsPlayed", 10);
    ///
    /// assert_eq!(
    ///     MenuScreen::format_info(&prefs),
    ///     "Survival - best score: 42\nSurvival games played: 3\nTotal rounds played: 10"
    /// );
    /// ```
    pub fn format_info(prefs: &Preferences) -> String {
        format!(
            "Survival - best score: {}\nSurvival games played: {}\nTotal rounds played: {}",
            prefs.get_integer(PREF_SURVIVAL_BEST),
            prefs.get_integer_or(PREF_SURVIVAL_GAMES_PLAYED, 0),
            prefs.get_integer_or(PREF_ROUNDS_PLAYED, 0),
        )
    }

    pub fn info_visible(&self) -> bool {
        self.info_visible
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn button(&self, id: ButtonId) -> Option<&TextButton> {
        self.stage.button(id)
    }

    pub fn title_text(&self) -> Option<&TextLayout> {
        self.title_text.as_ref()
    }

    pub fn info_text(&self) -> Option<&TextLayout> {
        self.info_text.as_ref()
    }

    /// Top-left corner of the title in stage coordinates.
    pub fn title_position(&self) -> Option<Vec2> {
        let title = self.title_text.as_ref()?;
        let survival = self.stage.button(ButtonId::Survival)?;
        let (width, height) = (self.stage.width(), self.stage.height());

        Some(vec2(
            width / 2.0 - title.width / 2.0,
            survival.y() / 2.0 + survival.height() / 2.0 + height / 2.0 + title.height / 2.0,
        ))
    }

    /// Top-left corner of the info panel in stage coordinates.
    pub fn info_position(&self) -> Option<Vec2> {
        let info = self.info_text.as_ref()?;
        Some(vec2(
            self.stage.width() - info.width - INFO_TEXT_RIGHT_MARGIN,
            self.stage.height() - INFO_TEXT_TOP_MARGIN - info.height,
        ))
    }

    /// Every button accepts a press.
    pub fn on_press(&mut self, _id: ButtonId) -> bool {
        true
    }

    /// Runs the action bound to a released button.
    pub fn on_release(&mut self, id: ButtonId, ctx: &mut AppContext) {
        match id {
            ButtonId::Survival => {
                ctx.set_game_mode(GameMode::Survival);
                ctx.set_screen(ScreenId::MatchSounds);
            }
            ButtonId::Custom => {
                ctx.set_game_mode(GameMode::Custom);
                ctx.set_screen(ScreenId::CustomMode);
            }
            ButtonId::Exit => {
                info!("Exit selected from menu");
                ctx.request_exit();
            }
            ButtonId::Info => {
                self.info_visible = !self.info_visible;
                debug!("Info panel visible: {}", self.info_visible);
            }
            ButtonId::Back => {}
        }
    }

    fn init_buttons(&mut self, ctx: &AppContext) {
        let (width, height) = (self.stage.width(), self.stage.height());

        let mut survival = TextButton::new(ButtonId::Survival, "Survival", &ctx.skins.default);
        survival.set_size(MENU_BUTTON_WIDTH, MENU_BUTTON_HEIGHT);
        survival.set_position(width / 2.0 - survival.width() / 2.0, height / 2.0);

        let mut custom = TextButton::new(ButtonId::Custom, "Custom", &ctx.skins.default);
        custom.set_size(MENU_BUTTON_WIDTH, MENU_BUTTON_HEIGHT);
        custom.set_position(
            width / 2.0 - custom.width() / 2.0,
            survival.y() - MENU_BUTTON_SPACING - custom.height(),
        );

        let mut exit = TextButton::new(ButtonId::Exit, "Exit", &ctx.skins.default);
        exit.set_size(MENU_BUTTON_WIDTH, MENU_BUTTON_HEIGHT);
        exit.set_position(
            width / 2.0 - exit.width() / 2.0,
            custom.y() - MENU_BUTTON_SPACING - exit.height(),
        );

        let mut info = TextButton::new(ButtonId::Info, "info", &ctx.skins.small);
        info.set_size(INFO_BUTTON_WIDTH, INFO_BUTTON_HEIGHT);
        info.set_position(
            width - info.width() - INFO_BUTTON_RIGHT_MARGIN,
            height - info.height() - INFO_BUTTON_TOP_MARGIN,
        );

        for button in [survival, custom, exit, info] {
            self.stage.add_actor(Actor::Button(button));
        }
    }

    /// Text blocks drawn this frame with their stage positions, in draw order.
    ///
    /// The info panel comes first and only while it is visible.
    pub fn visible_text(&self) -> Vec<(&TextLayout, Vec2)> {
        let mut visible = Vec::with_capacity(2);

        if self.info_visible {
            if let (Some(info), Some(pos)) = (&self.info_text, self.info_position()) {
                visible.push((info, pos));
            }
        }
        if let (Some(title), Some(pos)) = (&self.title_text, self.title_position()) {
            visible.push((title, pos));
        }
        visible
    }

    fn display_text(&self) {
        let height = self.stage.height();
        for (layout, pos) in self.visible_text() {
            layout.draw(pos.x, pos.y, height);
        }
    }
}

impl Screen for MenuScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Menu
    }

    fn show(&mut self, ctx: &mut AppContext) {
        self.stage.clear();
        self.info_visible = false;

        self.title_text = Some(TextLayout::new(ctx.measure.as_ref(), &ctx.fonts.big, TITLE));
        self.info_text = Some(TextLayout::new(
            ctx.measure.as_ref(),
            &ctx.fonts.small_black,
            Self::format_info(&ctx.preferences),
        ));

        self.stage.add_actor(Actor::Image {
            texture: BACKGROUND_TEXTURE.to_string(),
            bounds: Rect::new(0.0, 0.0, self.stage.width(), self.stage.height()),
        });

        self.init_buttons(ctx);
    }

    fn handle_input(&mut self, event: PointerEvent, ctx: &mut AppContext) {
        match self.stage.handle_pointer(event) {
            StageEvent::Pressed(id) => {
                self.on_press(id);
            }
            StageEvent::Released(id) => self.on_release(id, ctx),
            StageEvent::Ignored => {}
        }
    }

    fn render(&mut self, ctx: &mut AppContext, delta: f32) {
        clear_background(CLEAR_COLOR);

        self.display_text();

        self.stage.act(delta);
        self.stage.draw(&ctx.assets);
    }

    fn dispose(&mut self) {
        self.stage.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown_menu(ctx: &mut AppContext) -> MenuScreen {
        let mut menu = MenuScreen::new(ctx.viewport_width, ctx.viewport_height);
        menu.show(ctx);
        menu
    }

    #[test]
    fn test_show_builds_background_and_buttons() {
        let mut ctx = AppContext::headless();
        let menu = shown_menu(&mut ctx);

        assert_eq!(menu.stage().actors().len(), 5);
        assert!(matches!(
            &menu.stage().actors()[0],
            Actor::Image { texture, bounds }
                if texture == BACKGROUND_TEXTURE && bounds.w == 720.0 && bounds.h == 1280.0
        ));
        for id in [ButtonId::Survival, ButtonId::Custom, ButtonId::Exit, ButtonId::Info] {
            assert!(menu.button(id).is_some());
        }
    }

    #[test]
    fn test_reshow_does_not_duplicate_widgets() {
        let mut ctx = AppContext::headless();
        let mut menu = shown_menu(&mut ctx);
        menu.show(&mut ctx);
        assert_eq!(menu.stage().actors().len(), 5);
    }

    #[test]
    fn test_layout_for_default_viewport() {
        let mut ctx = AppContext::headless();
        let menu = shown_menu(&mut ctx);

        let survival = menu.button(ButtonId::Survival).unwrap().bounds();
        assert_eq!(survival, Rect::new(60.0, 640.0, 600.0, 200.0));

        let custom = menu.button(ButtonId::Custom).unwrap().bounds();
        assert_eq!(custom, Rect::new(60.0, 415.0, 600.0, 200.0));

        let exit = menu.button(ButtonId::Exit).unwrap().bounds();
        assert_eq!(exit, Rect::new(60.0, 190.0, 600.0, 200.0));

        let info = menu.button(ButtonId::Info).unwrap().bounds();
        assert_eq!(info, Rect::new(370.0, 1130.0, 250.0, 100.0));
    }

    #[test]
    fn test_title_position_formula() {
        let mut ctx = AppContext::headless();
        let menu = shown_menu(&mut ctx);
        let title = menu.title_text().unwrap();
        let pos = menu.title_position().unwrap();

        assert_eq!(pos.x, 360.0 - title.width / 2.0);
        assert_eq!(pos.y, 640.0 / 2.0 + 200.0 / 2.0 + 1280.0 / 2.0 + title.height / 2.0);
    }

    #[test]
    fn test_info_position_is_right_aligned() {
        let mut ctx = AppContext::headless();
        let menu = shown_menu(&mut ctx);
        let info = menu.info_text().unwrap();
        let pos = menu.info_position().unwrap();

        assert_eq!(pos.x, 720.0 - info.width - 50.0);
        assert_eq!(pos.y, 1280.0 - 100.0 - info.height);
    }

    #[test]
    fn test_positions_unknown_before_show() {
        let menu = MenuScreen::new(720.0, 1280.0);
        assert!(menu.title_position().is_none());
        assert!(menu.info_position().is_none());
    }

    #[test]
    fn test_press_is_always_handled() {
        let mut menu = MenuScreen::new(720.0, 1280.0);
        for id in [ButtonId::Survival, ButtonId::Custom, ButtonId::Exit, ButtonId::Info] {
            assert!(menu.on_press(id));
        }
    }

    #[test]
    fn test_visible_text_follows_info_toggle() {
        let mut ctx = AppContext::headless();
        let mut menu = shown_menu(&mut ctx);

        let visible = menu.visible_text();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0.text, TITLE);
        assert_eq!(Some(visible[0].1), menu.title_position());

        menu.on_release(ButtonId::Info, &mut ctx);

        let visible = menu.visible_text();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].0.text, MenuScreen::format_info(&ctx.preferences));
        assert_eq!(Some(visible[0].1), menu.info_position());
        assert_eq!(visible[1].0.text, TITLE);
    }

    #[test]
    fn test_visible_text_empty_before_show() {
        let menu = MenuScreen::new(720.0, 1280.0);
        assert!(menu.visible_text().is_empty());
    }

    #[test]
    fn test_dispose_releases_actors() {
        let mut ctx = AppContext::headless();
        let mut menu = shown_menu(&mut ctx);
        menu.dispose();
        assert!(menu.stage().actors().is_empty());
    }
}
