pub mod color;
pub mod constants;
pub mod particle;
pub mod scroll;
pub mod state;
pub mod tilt;

pub use color::*;
pub use constants::*;
pub use particle::*;
pub use scroll::*;
pub use state::*;
pub use tilt::*;
