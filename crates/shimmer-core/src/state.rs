//! Shared pointer state, platform-free so it can be tested on the host.

use glam::Vec2;

/// Last known pointer position in viewport pixels.
///
/// `None` once the pointer has left the window; the particle field skips
/// repulsion entirely in that case and particles just drift.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Option<Vec2>,
}

impl PointerState {
    pub fn set(&mut self, x: f32, y: f32) {
        self.position = Some(Vec2::new(x, y));
    }

    pub fn clear(&mut self) {
        self.position = None;
    }
}
