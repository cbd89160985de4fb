//! # Application Context
//!
//! Resources and navigation state shared by every screen. Screens receive the
//! context as an explicit `&mut` argument on each lifecycle call.

use crate::app::{GameMode, ScreenId};
use crate::config::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::rendering::{AssetCache, Fonts, MonospaceMeasure, TextMeasure};
use crate::storage::Preferences;
use crate::ui::Skins;
use log::{debug, warn};

/// Application-wide state owned by the [`ScreenManager`](crate::ScreenManager).
pub struct AppContext {
    /// Fonts used for free-standing text
    pub fonts: Fonts,
    /// Button styles
    pub skins: Skins,
    /// Text measurement backend
    pub measure: Box<dyn TextMeasure>,
    /// Loaded textures
    pub assets: AssetCache,
    /// Persistent counters
    pub preferences: Preferences,
    /// Viewport width in pixels, fixed at startup
    pub viewport_width: f32,
    /// Viewport height in pixels, fixed at startup
    pub viewport_height: f32,
    game_mode: Option<GameMode>,
    pending_screen: Option<ScreenId>,
    exit_requested: bool,
}

impl AppContext {
    /// Creates a context from loaded resources.
    pub fn new(
        fonts: Fonts,
        skins: Skins,
        measure: Box<dyn TextMeasure>,
        assets: AssetCache,
        preferences: Preferences,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Self {
        Self {
            fonts,
            skins,
            measure,
            assets,
            preferences,
            viewport_width,
            viewport_height,
            game_mode: None,
            pending_screen: None,
            exit_requested: false,
        }
    }

    /// A context that needs no graphics context or files.
    ///
    /// Uses approximate text metrics, in-memory preferences, an empty asset
    /// cache and the default window size.
    pub fn headless() -> Self {
        Self::new(
            Fonts::default(),
            Skins::default(),
            Box::new(MonospaceMeasure::default()),
            AssetCache::default(),
            Preferences::in_memory(),
            DEFAULT_WINDOW_WIDTH,
            DEFAULT_WINDOW_HEIGHT,
        )
    }

    /// Overrides the viewport size.
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Replaces the preferences store.
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = preferences;
        self
    }

    /// The game mode chosen most recently, if any.
    pub fn game_mode(&self) -> Option<GameMode> {
        self.game_mode
    }

    pub fn set_game_mode(&mut self, mode: GameMode) {
        debug!("Game mode set to {:?}", mode);
        self.game_mode = Some(mode);
    }

    /// Requests a switch to `screen` once the current input phase ends.
    pub fn set_screen(&mut self, screen: ScreenId) {
        if let Some(previous) = self.pending_screen.replace(screen) {
            warn!("Navigation to {} superseded by {}", previous, screen);
        } else {
            debug!("Navigation to {} requested", screen);
        }
    }

    /// The screen requested by [`set_screen`](Self::set_screen), if any.
    pub fn pending_screen(&self) -> Option<ScreenId> {
        self.pending_screen
    }

    /// Takes the pending navigation request, leaving none behind.
    pub fn take_pending_screen(&mut self) -> Option<ScreenId> {
        self.pending_screen.take()
    }

    /// Asks the application to shut down after the current frame.
    pub fn request_exit(&mut self) {
        debug!("Exit requested");
        self.exit_requested = true;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_defaults() {
        let ctx = AppContext::headless();
        assert_eq!(ctx.game_mode(), None);
        assert_eq!(ctx.pending_screen(), None);
        assert!(!ctx.exit_requested());
        assert_eq!(ctx.viewport_width, DEFAULT_WINDOW_WIDTH);
    }

    #[test]
    fn test_navigation_request_is_taken_once() {
        let mut ctx = AppContext::headless();
        ctx.set_screen(ScreenId::CustomMode);
        assert_eq!(ctx.take_pending_screen(), Some(ScreenId::CustomMode));
        assert_eq!(ctx.take_pending_screen(), None);
    }

    #[test]
    fn test_later_request_wins() {
        let mut ctx = AppContext::headless();
        ctx.set_screen(ScreenId::CustomMode);
        ctx.set_screen(ScreenId::Menu);
        assert_eq!(ctx.take_pending_screen(), Some(ScreenId::Menu));
    }
}
