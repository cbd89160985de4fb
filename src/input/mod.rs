//! # Input Module
//!
//! Translates mouse and touch state into pointer events for the active screen.

use macroquad::prelude::*;

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse button or finger went down
    Down,
    /// Mouse button or finger was lifted
    Up,
    /// Pointer moved without a phase change
    Moved,
}

/// A pointer event in screen coordinates (y-down, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, x: f32, y: f32) -> Self {
        Self { kind, x, y }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Down, x, y)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Up, x, y)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerKind::Moved, x, y)
    }
}

/// Input handler for collecting pointer events each frame.
///
/// Touches are reported by macroquad as simulated left mouse button events,
/// so polling the mouse covers both desktop and mobile.
pub struct InputHandler {
    last_position: Option<(f32, f32)>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use match_sounds::InputHandler;
    ///
    /// let input_handler = InputHandler::new();
    /// // Ready to poll input
    /// ```
    pub fn new() -> Self {
        Self {
            last_position: None,
        }
    }

    /// Collects the pointer events of the current frame, in order.
    pub fn poll(&mut self) -> Vec<PointerEvent> {
        let (x, y) = mouse_position();
        let mut events = Vec::new();

        if self.last_position != Some((x, y)) {
            if self.last_position.is_some() {
                events.push(PointerEvent::moved(x, y));
            }
            self.last_position = Some((x, y));
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            events.push(PointerEvent::down(x, y));
        }
        if is_mouse_button_released(MouseButton::Left) {
            events.push(PointerEvent::up(x, y));
        }

        events
    }

    /// Whether the platform back/escape key was pressed this frame.
    pub fn back_pressed(&self) -> bool {
        is_key_pressed(KeyCode::Escape)
    }
}
