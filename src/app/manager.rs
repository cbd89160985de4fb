//! # Screen Management System
//!
//! Owns the application context and every constructed screen, routes input to
//! the active screen and applies navigation requests between frames.

use crate::app::{AppContext, Screen, ScreenId};
use crate::input::{InputHandler, PointerEvent};
use crate::screens::create_screen;
use crate::{MatchSoundsError, MatchSoundsResult};
use log::{error, info};
use macroquad::prelude::*;
use std::collections::HashMap;

/// Builds the screen for an id the first time it is navigated to.
pub type ScreenFactory = Box<dyn Fn(ScreenId, &AppContext) -> Box<dyn Screen>>;

/// The main screen manager that coordinates all screens.
pub struct ScreenManager {
    ctx: AppContext,
    screens: HashMap<ScreenId, Box<dyn Screen>>,
    active: Option<ScreenId>,
    factory: ScreenFactory,
}

impl ScreenManager {
    /// Creates a manager building the game's own screens.
    pub fn new(ctx: AppContext) -> Self {
        Self::with_factory(ctx, Box::new(create_screen))
    }

    /// Creates a manager with a custom screen factory.
    pub fn with_factory(ctx: AppContext, factory: ScreenFactory) -> Self {
        Self {
            ctx,
            screens: HashMap::new(),
            active: None,
            factory,
        }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut AppContext {
        &mut self.ctx
    }

    /// The screen currently receiving input and rendering.
    pub fn active(&self) -> Option<ScreenId> {
        self.active
    }

    /// Whether the screen for `id` has been constructed.
    pub fn is_constructed(&self, id: ScreenId) -> bool {
        self.screens.contains_key(&id)
    }

    /// Shows the first screen.
    pub fn start(&mut self, initial: ScreenId) {
        info!("Starting on {} screen", initial);
        self.switch_to(initial);
    }

    /// Hides the active screen and shows `id`, constructing it on first use.
    pub fn switch_to(&mut self, id: ScreenId) {
        if let Some(current) = self.active.take() {
            if let Some(screen) = self.screens.get_mut(&current) {
                screen.hide(&mut self.ctx);
            }
        }

        let factory = &self.factory;
        let ctx = &self.ctx;
        let screen = self.screens.entry(id).or_insert_with(|| {
            info!("Creating {} screen", id);
            factory(id, ctx)
        });

        debug_assert_eq!(screen.id(), id);

        info!("Showing {} screen", id);
        screen.show(&mut self.ctx);
        self.active = Some(id);
    }

    /// Applies a pending navigation request. Returns whether one was applied.
    pub fn apply_navigation(&mut self) -> bool {
        match self.ctx.take_pending_screen() {
            Some(id) => {
                self.switch_to(id);
                true
            }
            None => false,
        }
    }

    /// Handles the back key: leaves a game mode for the menu, or exits from
    /// the menu itself.
    pub fn handle_back(&mut self) {
        match self.active {
            Some(ScreenId::Menu) => {
                info!("Back pressed on menu, exiting");
                self.ctx.request_exit();
            }
            Some(id) => {
                info!("Back pressed on {} screen", id);
                self.ctx.set_screen(ScreenId::Menu);
            }
            None => {}
        }
    }

    /// The active screen, or an error if [`start`](Self::start) was never called.
    pub fn ensure_started(&self) -> MatchSoundsResult<ScreenId> {
        self.active.ok_or_else(|| {
            MatchSoundsError::InvalidState("screen loop run before a screen was started".into())
        })
    }

    /// Delivers pointer events to the active screen.
    ///
    /// Navigation requested by an event takes effect before the next event,
    /// so later events of the same frame reach the new screen. Stops early
    /// when exit is requested.
    pub fn dispatch(&mut self, events: impl IntoIterator<Item = PointerEvent>) {
        for event in events {
            if self.ctx.exit_requested() {
                break;
            }
            if let Some(screen) = self.active.and_then(|id| self.screens.get_mut(&id)) {
                screen.handle_input(event, &mut self.ctx);
            }
            self.apply_navigation();
        }
        self.apply_navigation();
    }

    /// Whether the frame loop should keep running.
    pub fn is_running(&self) -> bool {
        !self.ctx.exit_requested()
    }

    /// Renders the active screen.
    pub fn render(&mut self, delta: f32) {
        if let Some(screen) = self.active.and_then(|id| self.screens.get_mut(&id)) {
            screen.render(&mut self.ctx, delta);
        }
    }

    /// Runs the frame loop until exit is requested.
    ///
    /// Fails with [`MatchSoundsError::InvalidState`] when no screen was started.
    pub async fn run(&mut self, input: &mut InputHandler) -> MatchSoundsResult<()> {
        self.ensure_started()?;

        loop {
            let events = input.poll();

            if input.back_pressed() {
                self.handle_back();
            }

            self.dispatch(events);
            if !self.is_running() {
                break;
            }

            self.render(get_frame_time());
            next_frame().await;
        }

        self.shutdown()
    }

    /// Hides the active screen, disposes every screen and saves preferences.
    pub fn shutdown(&mut self) -> MatchSoundsResult<()> {
        info!("Shutting down");

        if let Some(current) = self.active.take() {
            if let Some(screen) = self.screens.get_mut(&current) {
                screen.hide(&mut self.ctx);
            }
        }

        for (id, mut screen) in self.screens.drain() {
            info!("Disposing {} screen", id);
            screen.dispose();
        }

        if let Err(e) = self.ctx.preferences.flush() {
            error!("Failed to save preferences: {}", e);
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ButtonId;

    fn click_center(manager: &ScreenManager, id: ButtonId) -> [PointerEvent; 2] {
        let screen_height = manager.context().viewport_height;
        let menu_button = match id {
            // values from the menu layout for a 720x1280 viewport
            ButtonId::Survival => (360.0, screen_height - 740.0),
            ButtonId::Custom => (360.0, screen_height - 515.0),
            ButtonId::Exit => (360.0, screen_height - 290.0),
            _ => unreachable!(),
        };
        [
            PointerEvent::down(menu_button.0, menu_button.1),
            PointerEvent::up(menu_button.0, menu_button.1),
        ]
    }

    #[test]
    fn test_screens_are_created_lazily() {
        let mut manager = ScreenManager::new(AppContext::headless());
        assert!(!manager.is_constructed(ScreenId::Menu));

        manager.start(ScreenId::Menu);
        assert_eq!(manager.active(), Some(ScreenId::Menu));
        assert!(manager.is_constructed(ScreenId::Menu));
        assert!(!manager.is_constructed(ScreenId::MatchSounds));
    }

    #[test]
    fn test_survival_click_navigates() {
        let mut manager = ScreenManager::new(AppContext::headless());
        manager.start(ScreenId::Menu);

        let events = click_center(&manager, ButtonId::Survival);
        manager.dispatch(events);

        assert_eq!(manager.active(), Some(ScreenId::MatchSounds));
        assert!(manager.is_running());
    }

    #[test]
    fn test_exit_click_stops() {
        let mut manager = ScreenManager::new(AppContext::headless());
        manager.start(ScreenId::Menu);

        let events = click_center(&manager, ButtonId::Exit);
        manager.dispatch(events);

        assert!(!manager.is_running());
        assert!(manager.shutdown().is_ok());
        assert_eq!(manager.active(), None);
        assert!(!manager.is_constructed(ScreenId::Menu));
    }

    #[test]
    fn test_back_on_menu_requests_exit() {
        let mut manager = ScreenManager::new(AppContext::headless());
        manager.start(ScreenId::Menu);

        manager.handle_back();

        assert!(manager.context().exit_requested());
        assert!(!manager.is_running());
    }

    #[test]
    fn test_back_on_game_mode_returns_to_menu() {
        let mut manager = ScreenManager::new(AppContext::headless());
        manager.start(ScreenId::CustomMode);

        manager.handle_back();
        assert_eq!(manager.context().pending_screen(), Some(ScreenId::Menu));
        assert!(manager.apply_navigation());

        assert_eq!(manager.active(), Some(ScreenId::Menu));
        assert!(manager.is_running());
    }

    #[test]
    fn test_back_before_start_does_nothing() {
        let mut manager = ScreenManager::new(AppContext::headless());
        manager.handle_back();
        assert!(manager.is_running());
        assert!(!manager.apply_navigation());
    }

    #[test]
    fn test_run_requires_started_screen() {
        let mut manager = ScreenManager::new(AppContext::headless());
        assert!(matches!(
            manager.ensure_started(),
            Err(MatchSoundsError::InvalidState(_))
        ));

        manager.start(ScreenId::Menu);
        assert_eq!(manager.ensure_started().unwrap(), ScreenId::Menu);
    }
}
