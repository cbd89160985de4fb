//! # Screen Lifecycle
//!
//! The callbacks the [`ScreenManager`](crate::ScreenManager) invokes on screens.

use crate::app::{AppContext, ScreenId};
use crate::input::PointerEvent;

/// A full-window screen driven by the frame loop.
///
/// All callbacks run on the frame loop's thread. Input callbacks for a frame
/// always run before that frame's [`render`](Screen::render).
pub trait Screen {
    /// Which screen this is.
    fn id(&self) -> ScreenId;

    /// Called every time the screen becomes active. Rebuilds widgets.
    fn show(&mut self, ctx: &mut AppContext);

    /// Called for each pointer event while the screen is active.
    fn handle_input(&mut self, event: PointerEvent, ctx: &mut AppContext);

    /// Draws one frame. Requires a graphics context.
    fn render(&mut self, ctx: &mut AppContext, delta: f32);

    /// Called when another screen replaces this one.
    fn hide(&mut self, _ctx: &mut AppContext) {}

    /// Called once at shutdown.
    fn dispose(&mut self) {}
}
