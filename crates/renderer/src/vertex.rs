//! Vertex types for point and line buffers.

use bytemuck::{Pod, Zeroable};
use engine_core::Color;
use glam::Vec3;

/// Vertex for point clouds and polylines: position plus RGBA color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl PointVertex {
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

/// Flatten a point sequence into a vertex buffer with one shared color.
pub fn point_vertices(points: &[Vec3], color: Color, opacity: f32) -> Vec<PointVertex> {
    let rgba = color.to_rgba(opacity);
    points.iter().map(|p| PointVertex::new(*p, rgba)).collect()
}
