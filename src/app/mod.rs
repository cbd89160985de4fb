//! # App Module
//!
//! Shared application context, the screen lifecycle trait and the manager
//! that drives screens from the frame loop.

pub mod context;
pub mod manager;
pub mod screen;

pub use context::*;
pub use manager::*;
pub use screen::*;

/// The gameplay variant chosen from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Endless rounds until the first mistake
    Survival,
    /// Player-configured rounds
    Custom,
}

/// Every screen the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    /// Main menu
    Menu,
    /// Sound matching gameplay
    MatchSounds,
    /// Custom mode setup
    CustomMode,
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ScreenId::Menu => "menu",
            ScreenId::MatchSounds => "match sounds",
            ScreenId::CustomMode => "custom mode",
        };
        f.write_str(name)
    }
}
