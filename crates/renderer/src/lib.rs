//! Backend-agnostic scene composition for the globe visualization.
//!
//! Produces an ordered draw list, GPU-ready point buffers, and an orbit
//! camera; the actual graphics backend (and its render loop) is supplied
//! by the host.

pub mod camera;
pub mod material;
pub mod scene;
pub mod vertex;

pub use camera::*;
pub use material::*;
pub use scene::*;
pub use vertex::*;
