//! Point-particle field with wall bounce and pointer repulsion.
//!
//! The field owns its particles and its RNG; it is sized from the viewport
//! area and rebuilt wholesale whenever the viewport changes. Each frame the
//! frontend calls [`ParticleField::step`] with the current pointer position
//! and then draws the particles as filled circles.

use glam::Vec2;
use rand::prelude::*;

use crate::color::Rgba;
use crate::constants::{
    DRIFT_SPEED_MAX, PARTICLE_AREA_PER, PARTICLE_COLORS, PARTICLE_SIZE_MIN, PARTICLE_SIZE_SPAN,
    POINTER_RADIUS, PUSH_STRENGTH,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Constant drift applied whenever the pointer is not pushing.
    pub velocity: Vec2,
    /// Draw radius in px.
    pub size: f32,
    pub color: Rgba,
    /// Spawn point.
    // TODO: ease pushed particles back toward `origin` once the pointer moves away
    pub origin: Vec2,
}

impl Particle {
    /// Advance one frame within a `width` x `height` viewport.
    ///
    /// Order matters: the wall bounce flips drift direction first, then the
    /// pointer either pushes the particle (inside [`POINTER_RADIUS`]) or the
    /// particle drifts by its own velocity. The push writes position
    /// directly rather than accumulating into velocity, so holding the
    /// pointer near a particle keeps shoving it further out.
    pub fn advance(&mut self, width: f32, height: f32, pointer: Option<Vec2>) {
        if self.position.x > width || self.position.x < 0.0 {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y > height || self.position.y < 0.0 {
            self.velocity.y = -self.velocity.y;
        }

        let pushed = pointer.is_some_and(|p| {
            let delta = p - self.position;
            let distance = delta.length();
            if distance < POINTER_RADIUS {
                let falloff = (POINTER_RADIUS - distance) / POINTER_RADIUS;
                self.position -= delta / distance * falloff * PUSH_STRENGTH;
                true
            } else {
                false
            }
        });
        if !pushed {
            self.position += self.velocity;
        }
    }
}

pub struct ParticleField {
    width: f32,
    height: f32,
    rng: StdRng,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            width,
            height,
            rng: StdRng::seed_from_u64(seed),
            particles: Vec::new(),
        };
        field.respawn();
        field
    }

    /// How many particles a viewport of the given size carries.
    pub fn target_count(width: f32, height: f32) -> usize {
        ((width * height) / PARTICLE_AREA_PER).floor() as usize
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Replace every particle with a freshly sized set for the new viewport.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.respawn();
    }

    /// One simulation pass over every particle.
    pub fn step(&mut self, pointer: Option<Vec2>) {
        for particle in &mut self.particles {
            particle.advance(self.width, self.height, pointer);
        }
    }

    fn respawn(&mut self) {
        self.particles.clear();
        let count = Self::target_count(self.width, self.height);
        for _ in 0..count {
            let particle = spawn(&mut self.rng, self.width, self.height);
            self.particles.push(particle);
        }
        log::debug!(
            "particle field: {}x{} -> {} particles",
            self.width,
            self.height,
            count
        );
    }
}

fn spawn(rng: &mut StdRng, width: f32, height: f32) -> Particle {
    let size = PARTICLE_SIZE_MIN + rng.gen::<f32>() * PARTICLE_SIZE_SPAN;
    // Spawn inset one diameter from each edge; the span collapses to zero on
    // viewports too small to hold it.
    let inset = size * 2.0;
    let x = rng.gen::<f32>() * (width - inset * 2.0).max(0.0) + inset;
    let y = rng.gen::<f32>() * (height - inset * 2.0).max(0.0) + inset;
    let velocity = Vec2::new(
        rng.gen::<f32>() * DRIFT_SPEED_MAX * 2.0 - DRIFT_SPEED_MAX,
        rng.gen::<f32>() * DRIFT_SPEED_MAX * 2.0 - DRIFT_SPEED_MAX,
    );
    let color = if rng.gen::<f32>() > 0.5 {
        PARTICLE_COLORS[0]
    } else {
        PARTICLE_COLORS[1]
    };
    let position = Vec2::new(x, y);
    Particle {
        position,
        velocity,
        size,
        color,
        origin: position,
    }
}
