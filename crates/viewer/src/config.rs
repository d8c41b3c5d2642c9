//! Viewer configuration. Loaded from viewer.ron at startup.

use globe::RotationController;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Viewer settings. Loaded from `viewer.ron` in the current directory;
/// missing file or invalid contents fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Number of background stars.
    #[serde(default = "default_star_count")]
    pub star_count: usize,
    /// Inner radius of the star shell.
    #[serde(default = "default_star_inner_radius")]
    pub star_inner_radius: f32,
    /// Outer radius of the star shell.
    #[serde(default = "default_star_outer_radius")]
    pub star_outer_radius: f32,
    /// Seed for the starfield; same seed, same sky.
    #[serde(default)]
    pub star_seed: u64,
    /// Globe body rotation per frame in radians.
    #[serde(default = "default_rotation_increment")]
    pub rotation_increment: f32,
    /// Idle delay before auto-rotation resumes, in seconds.
    #[serde(default = "default_cooldown_seconds")]
    pub cooldown_seconds: f64,
    /// Optional globe texture image; falls back to a flat material.
    #[serde(default)]
    pub texture_path: Option<PathBuf>,
    /// How long the demo loop runs, in seconds.
    #[serde(default = "default_simulation_seconds")]
    pub simulation_seconds: f64,
}

fn default_star_count() -> usize {
    200
}
fn default_star_inner_radius() -> f32 {
    5.0
}
fn default_star_outer_radius() -> f32 {
    15.0
}
fn default_rotation_increment() -> f32 {
    RotationController::DEFAULT_INCREMENT
}
fn default_cooldown_seconds() -> f64 {
    RotationController::DEFAULT_COOLDOWN_SECONDS
}
fn default_simulation_seconds() -> f64 {
    8.0
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            star_count: default_star_count(),
            star_inner_radius: default_star_inner_radius(),
            star_outer_radius: default_star_outer_radius(),
            star_seed: 0,
            rotation_increment: default_rotation_increment(),
            cooldown_seconds: default_cooldown_seconds(),
            texture_path: None,
            simulation_seconds: default_simulation_seconds(),
        }
    }
}

impl ViewerConfig {
    /// Load config from `viewer.ron`. If the file is missing or invalid,
    /// returns the default config.
    pub fn load() -> Self {
        Self::load_from(Path::new("viewer.ron"))
    }

    fn load_from(path: &Path) -> Self {
        if let Ok(data) = std::fs::read_to_string(path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }
}
