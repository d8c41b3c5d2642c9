//! Orbit camera locked on the globe center.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

/// Orbit camera with bounded zoom and free rotation.
///
/// The target is the globe center and is not exposed, so panning is
/// impossible by construction. Zoom distance stays clamped to
/// `[MIN_DISTANCE, MAX_DISTANCE]`.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    /// Distance from the globe center.
    distance: f32,
    /// Horizontal orbit angle in radians.
    yaw: f32,
    /// Vertical orbit angle in radians, clamped short of the poles.
    pitch: f32,
    /// Field of view in degrees.
    pub fov_degrees: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
    /// Orbit speed multiplier for pointer drags.
    pub rotate_speed: f32,
    /// Zoom speed multiplier for scroll input.
    pub zoom_speed: f32,
}

impl OrbitCamera {
    /// Closest allowed approach to the globe.
    pub const MIN_DISTANCE: f32 = 1.5;
    /// Farthest allowed zoom-out.
    pub const MAX_DISTANCE: f32 = 4.0;
    /// Radians of orbit per pixel of drag, before `rotate_speed`.
    const DRAG_SENSITIVITY: f32 = 0.005;

    /// Default view: straight down the +Z axis at distance 2.5.
    pub fn new() -> Self {
        Self {
            distance: 2.5,
            yaw: 0.0,
            pitch: 0.0,
            fov_degrees: 50.0,
            near: 0.1,
            far: 100.0,
            aspect: 16.0 / 9.0,
            rotate_speed: 0.8,
            zoom_speed: 0.6,
        }
    }

    /// Update aspect ratio (call on container resize).
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Orbit from a pointer drag delta in pixels.
    pub fn orbit(&mut self, drag: Vec2) {
        self.yaw -= drag.x * Self::DRAG_SENSITIVITY * self.rotate_speed;
        self.pitch += drag.y * Self::DRAG_SENSITIVITY * self.rotate_speed;

        // Clamp pitch to prevent flipping over the poles
        let max_pitch = std::f32::consts::FRAC_PI_2 - 0.01;
        self.pitch = self.pitch.clamp(-max_pitch, max_pitch);
    }

    /// Zoom by a scroll amount; positive zooms in. Distance stays within
    /// the clamp bounds.
    pub fn zoom(&mut self, amount: f32) {
        self.distance =
            (self.distance - amount * self.zoom_speed).clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE);
    }

    /// Current distance from the globe center.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Eye position in world space.
    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.distance * self.pitch.cos() * self.yaw.sin(),
            self.distance * self.pitch.sin(),
            self.distance * self.pitch.cos() * self.yaw.cos(),
        )
    }

    /// Get the view matrix (looking at the globe center).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    /// Get the projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    /// Get the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

/// Camera uniform data for GPU upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub proj: [[f32; 4]; 4],
    pub position: [f32; 4], // w unused, padding
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            view: Mat4::IDENTITY.to_cols_array_2d(),
            proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 4],
        }
    }

    pub fn update(&mut self, camera: &OrbitCamera) {
        self.view = camera.view_matrix().to_cols_array_2d();
        self.proj = camera.projection_matrix().to_cols_array_2d();
        self.view_proj = camera.view_projection_matrix().to_cols_array_2d();
        let eye = camera.eye();
        self.position = [eye.x, eye.y, eye.z, 1.0];
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn default_view_matches_the_mount_position() {
        let camera = OrbitCamera::new();
        assert!((camera.eye() - Vec3::new(0.0, 0.0, 2.5)).length() < EPS);
    }

    #[test]
    fn zoom_is_clamped_to_bounds() {
        let mut camera = OrbitCamera::new();
        camera.zoom(100.0);
        assert_eq!(camera.distance(), OrbitCamera::MIN_DISTANCE);
        camera.zoom(-100.0);
        assert_eq!(camera.distance(), OrbitCamera::MAX_DISTANCE);
    }

    #[test]
    fn orbit_keeps_the_eye_on_the_sphere_of_distance() {
        let mut camera = OrbitCamera::new();
        camera.orbit(Vec2::new(250.0, -120.0));
        assert!((camera.eye().length() - camera.distance()).abs() < EPS);
    }

    #[test]
    fn pitch_is_clamped_short_of_the_poles() {
        let mut camera = OrbitCamera::new();
        camera.orbit(Vec2::new(0.0, 1e6));
        let eye = camera.eye();
        // Never exactly on the Y axis, so look_at keeps a valid basis.
        assert!(eye.x.abs() + eye.z.abs() > 0.0);
        assert!(camera.view_matrix().is_finite());
    }

    #[test]
    fn uniform_tracks_the_camera() {
        let mut camera = OrbitCamera::new();
        camera.zoom(0.5);
        let mut uniform = CameraUniform::new();
        uniform.update(&camera);
        assert_eq!(
            uniform.view_proj,
            camera.view_projection_matrix().to_cols_array_2d()
        );
        assert_eq!(uniform.position[2], camera.distance());
    }
}
