//! # Stage
//!
//! Viewport-sized container of actors. Pointer events enter in screen space
//! and are routed to buttons in stage space (y-up).

use crate::input::{PointerEvent, PointerKind};
use crate::rendering::{to_screen_rect, AssetCache};
use crate::ui::{ButtonId, TextButton};
use log::{debug, warn};
use macroquad::prelude::*;

/// Something the stage holds and draws.
#[derive(Debug, Clone)]
pub enum Actor {
    /// A texture from the asset cache stretched over `bounds`
    Image { texture: String, bounds: Rect },
    /// An interactive text button
    Button(TextButton),
}

/// Outcome of routing one pointer event through the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageEvent {
    /// A button accepted the press and captured the pointer
    Pressed(ButtonId),
    /// The captured button was released
    Released(ButtonId),
    /// No button was involved
    Ignored,
}

/// A container of actors sized to the viewport.
#[derive(Debug, Clone)]
pub struct Stage {
    width: f32,
    height: f32,
    actors: Vec<Actor>,
    captured: Option<ButtonId>,
    elapsed: f32,
}

impl Stage {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            actors: Vec::new(),
            captured: None,
            elapsed: 0.0,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    /// Seconds the stage has been advanced since it was last cleared.
    #[cfg(test)]
    pub(crate) fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Removes every actor and drops any captured pointer.
    pub fn clear(&mut self) {
        self.actors.clear();
        self.captured = None;
        self.elapsed = 0.0;
    }

    pub fn add_actor(&mut self, actor: Actor) {
        self.actors.push(actor);
    }

    /// Returns the button with `id`, if present.
    pub fn button(&self, id: ButtonId) -> Option<&TextButton> {
        self.actors.iter().find_map(|actor| match actor {
            Actor::Button(button) if button.id == id => Some(button),
            _ => None,
        })
    }

    fn button_mut(&mut self, id: ButtonId) -> Option<&mut TextButton> {
        self.actors.iter_mut().find_map(|actor| match actor {
            Actor::Button(button) if button.id == id => Some(button),
            _ => None,
        })
    }

    /// Converts a screen-space point to stage space.
    pub fn screen_to_stage(&self, x: f32, y: f32) -> Vec2 {
        vec2(x, self.height - y)
    }

    /// Topmost button under the stage point.
    fn hit(&self, point: Vec2) -> Option<ButtonId> {
        self.actors.iter().rev().find_map(|actor| match actor {
            Actor::Button(button) if button.hit(point) => Some(button.id),
            _ => None,
        })
    }

    /// Routes a pointer event to the stage's buttons.
    ///
    /// A press on a button is always accepted and captures the pointer; the
    /// following release goes to that button wherever it happens.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> StageEvent {
        let point = self.screen_to_stage(event.x, event.y);

        match event.kind {
            PointerKind::Down => match self.hit(point) {
                Some(id) => {
                    self.captured = Some(id);
                    if let Some(button) = self.button_mut(id) {
                        button.set_pressed(true);
                    }
                    debug!("Button {:?} pressed", id);
                    StageEvent::Pressed(id)
                }
                None => StageEvent::Ignored,
            },
            PointerKind::Up => match self.captured.take() {
                Some(id) => {
                    if let Some(button) = self.button_mut(id) {
                        button.set_pressed(false);
                    }
                    debug!("Button {:?} released", id);
                    StageEvent::Released(id)
                }
                None => StageEvent::Ignored,
            },
            PointerKind::Moved => {
                let hovered = self.hit(point);
                for actor in &mut self.actors {
                    if let Actor::Button(button) = actor {
                        button.set_hovered(Some(button.id) == hovered);
                    }
                }
                StageEvent::Ignored
            }
        }
    }

    /// Advances the stage clock.
    pub fn act(&mut self, delta: f32) {
        self.elapsed += delta.max(0.0);
    }

    /// Draws every actor in insertion order.
    pub fn draw(&self, assets: &AssetCache) {
        for actor in &self.actors {
            match actor {
                Actor::Image { texture, bounds } => {
                    let rect = to_screen_rect(*bounds, self.height);
                    match assets.texture(texture) {
                        Ok(tex) => draw_texture_ex(
                            tex,
                            rect.x,
                            rect.y,
                            WHITE,
                            DrawTextureParams {
                                dest_size: Some(vec2(rect.w, rect.h)),
                                ..Default::default()
                            },
                        ),
                        Err(e) => warn!("Skipping image actor: {}", e),
                    }
                }
                Actor::Button(button) => button.draw(self.height),
            }
        }
    }

    /// Releases every actor.
    pub fn dispose(&mut self) {
        self.clear();
    }
}
