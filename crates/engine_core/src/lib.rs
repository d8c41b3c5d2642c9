//! Core engine types and utilities for the globe visualization.
//!
//! This crate provides the foundational types used across the engine:
//! - Frame timing for the animation loop
//! - Color parsing and conversion for materials and markers

pub mod color;
pub mod time;

pub use color::*;
pub use time::*;

// Re-export commonly used types
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
