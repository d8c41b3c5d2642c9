//! Geospatial globe generation: projection, connection arcs, starfield,
//! and the auto-rotation state machine.
//!
//! Everything here is pure and synchronous; the only mutable runtime state
//! is [`rotation::RotationController`], driven by an explicit per-frame
//! tick from whatever render loop the host provides.

pub mod arc;
pub mod catalog;
pub mod graph;
pub mod projection;
pub mod rotation;
pub mod starfield;

pub use arc::*;
pub use catalog::*;
pub use graph::*;
pub use projection::*;
pub use rotation::*;
pub use starfield::*;
