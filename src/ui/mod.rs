//! # UI Module
//!
//! A minimal scene graph: a viewport-sized stage holding a background and
//! text buttons, with pointer routing from screen space to widgets.

pub mod button;
pub mod skin;
pub mod stage;

pub use button::*;
pub use skin::*;
pub use stage::*;
