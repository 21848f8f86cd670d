//! Pointer-offset tilt math for card elements.

use glam::Vec2;

use crate::constants::{TILT_HOVER_SCALE, TILT_MAX_DEG, TILT_PERSPECTIVE_PX};

/// Rotation applied to a card while the pointer is over it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
}

/// Tilt for a pointer at `local` (px, relative to the card's top-left
/// corner) inside a `width` x `height` card.
///
/// The offset from the card center, normalized by the half-extents, maps
/// linearly onto the rotation axes: vertical offset tips around X (inverted,
/// so the card leans toward the pointer), horizontal offset around Y. While
/// the pointer stays inside the card both ratios stay within [-1, 1], so
/// rotations never exceed [`TILT_MAX_DEG`].
pub fn tilt_for_offset(local: Vec2, width: f32, height: f32) -> Tilt {
    let half = Vec2::new(width, height) * 0.5;
    Tilt {
        rotate_x_deg: ((local.y - half.y) / half.y) * -TILT_MAX_DEG,
        rotate_y_deg: ((local.x - half.x) / half.x) * TILT_MAX_DEG,
    }
}

impl Tilt {
    /// CSS transform carrying the rotation plus the slight hover scale-up.
    pub fn transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) scale3d({s}, {s}, {s})",
            TILT_PERSPECTIVE_PX,
            self.rotate_x_deg,
            self.rotate_y_deg,
            s = TILT_HOVER_SCALE,
        )
    }
}

/// Transform that puts a card back flat at normal scale.
pub fn rest_transform() -> String {
    format!(
        "perspective({}px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)",
        TILT_PERSPECTIVE_PX
    )
}
