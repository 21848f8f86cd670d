use crate::color::Rgba;

// Shared tuning constants used by the web frontend.

// Particle field
pub const PARTICLE_AREA_PER: f32 = 15_000.0; // viewport px^2 per particle
pub const POINTER_RADIUS: f32 = 150.0; // px within which the pointer pushes particles
pub const PUSH_STRENGTH: f32 = 5.0; // scales proximity falloff into displacement px
pub const PARTICLE_SIZE_MIN: f32 = 1.0; // radius range is [min, min + span)
pub const PARTICLE_SIZE_SPAN: f32 = 2.0;
pub const DRIFT_SPEED_MAX: f32 = 0.2; // per-axis drift in [-max, max), px per frame

// Half-opaque pink / purple, drawn straight onto the canvas
pub const PARTICLE_COLORS: [Rgba; 2] = [
    Rgba::new(255, 79, 216, 0.4),
    Rgba::new(138, 43, 226, 0.4),
];

// Cursor follower
pub const CURSOR_ACCENT: &str = "#00FF9D"; // dot fill and hover outline
pub const CURSOR_HOVER_SCALE: f32 = 3.0; // dot swell over interactive elements
pub const BLUR_TRAIL_MS: u32 = 500; // how long the blur halo lags behind

// Card tilt
pub const TILT_MAX_DEG: f32 = 10.0; // rotation at the card edge
pub const TILT_HOVER_SCALE: f32 = 1.02;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;

// Scroll spy
pub const SCROLL_ACTIVATE_OFFSET: f64 = 200.0; // px before a section top counts as entered
