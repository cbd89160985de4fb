//! # Match Sounds
//!
//! A casual ear-training game for desktop and mobile built on macroquad.
//!
//! ## Architecture Overview
//!
//! The crate is organised around a small screen system:
//!
//! - **App**: the shared [`AppContext`], the [`Screen`] lifecycle trait and the
//!   [`ScreenManager`] that drives screens from the frame loop
//! - **Screens**: the main [`MenuScreen`] and the game mode screens it navigates to
//! - **UI**: a minimal scene graph ([`Stage`]) with text buttons and pointer routing
//! - **Rendering**: fonts, measured text layouts, skins and the texture cache
//! - **Storage**: the persistent key/value [`Preferences`] store
//! - **Input**: translation of mouse and touch state into pointer events
//!
//! Layout happens in a y-up stage coordinate space with the origin at the
//! bottom-left corner of the viewport. Conversion to macroquad's y-down screen
//! space happens only when drawing or when pointer events enter a stage.

pub mod app;
pub mod input;
pub mod rendering;
pub mod screens;
pub mod storage;
pub mod ui;

pub use app::{AppContext, GameMode, Screen, ScreenId, ScreenManager};
pub use input::{InputHandler, PointerEvent, PointerKind};
pub use rendering::{AssetCache, FontStyle, Fonts, MonospaceMeasure, TextLayout, TextMeasure};
pub use screens::{GameModeScreen, MenuScreen};
pub use storage::Preferences;
pub use ui::{Actor, ButtonId, ButtonStyle, Skins, Stage, StageEvent, TextButton};

/// Core error type for the Match Sounds game.
#[derive(thiserror::Error, Debug)]
pub enum MatchSoundsError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// An asset could not be loaded from disk
    #[error("Failed to load asset '{name}': {reason}")]
    AssetLoad { name: String, reason: String },

    /// An asset was requested before it was loaded
    #[error("Asset not loaded: {0}")]
    AssetMissing(String),

    /// Application state is invalid
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the Match Sounds codebase.
pub type MatchSoundsResult<T> = Result<T, MatchSoundsError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    use macroquad::color::Color;

    /// Default window width in pixels
    pub const DEFAULT_WINDOW_WIDTH: f32 = 720.0;

    /// Default window height in pixels
    pub const DEFAULT_WINDOW_HEIGHT: f32 = 1280.0;

    /// Logical name of the menu background texture
    pub const BACKGROUND_TEXTURE: &str = "img/background.png";

    /// Title shown above the menu buttons
    pub const TITLE: &str = "Match sounds";

    /// Preference key for the best survival score
    pub const PREF_SURVIVAL_BEST: &str = "survivalBest";

    /// Preference key for the number of survival games played
    pub const PREF_SURVIVAL_GAMES_PLAYED: &str = "survivalGamesPlayed";

    /// Preference key for the total number of rounds played
    pub const PREF_ROUNDS_PLAYED: &str = "roundsPlayed";

    /// Width of the three large menu buttons
    pub const MENU_BUTTON_WIDTH: f32 = 600.0;

    /// Height of the three large menu buttons
    pub const MENU_BUTTON_HEIGHT: f32 = 200.0;

    /// Vertical gap between stacked menu buttons
    pub const MENU_BUTTON_SPACING: f32 = 25.0;

    /// Width of the info toggle button
    pub const INFO_BUTTON_WIDTH: f32 = 250.0;

    /// Height of the info toggle button
    pub const INFO_BUTTON_HEIGHT: f32 = 100.0;

    /// Info button offset from the right edge
    pub const INFO_BUTTON_RIGHT_MARGIN: f32 = 100.0;

    /// Info button offset from the top edge
    pub const INFO_BUTTON_TOP_MARGIN: f32 = 50.0;

    /// Info text offset from the right edge
    pub const INFO_TEXT_RIGHT_MARGIN: f32 = 50.0;

    /// Info text offset from the top edge
    pub const INFO_TEXT_TOP_MARGIN: f32 = 100.0;

    /// Title font size in pixels
    pub const FONT_SIZE_BIG: u16 = 96;

    /// Info text font size in pixels
    pub const FONT_SIZE_SMALL: u16 = 36;

    /// Large button label size in pixels
    pub const FONT_SIZE_BUTTON: u16 = 72;

    /// Small button label size in pixels
    pub const FONT_SIZE_BUTTON_SMALL: u16 = 40;

    /// Line height as a multiple of the font size
    pub const LINE_SPACING: f32 = 1.2;

    /// Frame clear color
    pub const CLEAR_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
}
