//! Scene composition: the ordered draw list for the globe view.
//!
//! Everything here is computed once at build time; the only per-frame
//! work is [`GlobeScene::tick`], which advances the rotation state machine
//! and copies the body/glow angles onto the rotating layers.

use std::path::PathBuf;

use engine_core::Color;
use glam::Vec3;

use globe::{
    generate_starfield, ConnectionGraph, Edge, Location, RotationController, RotationMode,
};

use crate::camera::OrbitCamera;
use crate::material::Material;
use crate::vertex::{point_vertices, PointVertex};

// Scene palette, shared by shells, lines, and lights.
const SKY_BLUE: Color = Color::rgb(0x60, 0xA5, 0xFA);
const EMERALD: Color = Color::rgb(0x34, 0xD3, 0x99);

/// The decorative star background.
#[derive(Debug, Clone)]
pub struct PointCloud {
    pub vertices: Vec<PointVertex>,
    pub point_size: f32,
    pub opacity: f32,
}

/// A translucent backface-rendered sphere layered around the globe.
#[derive(Debug, Clone)]
pub struct Shell {
    pub radius: f32,
    pub segments: u32,
    pub color: Color,
    pub opacity: f32,
    /// Y rotation in radians; only the outer glow shell animates.
    pub yaw: f32,
}

impl Shell {
    fn new(radius: f32, color: Color, opacity: f32) -> Self {
        Self {
            radius,
            segments: 32,
            color,
            opacity,
            yaw: 0.0,
        }
    }
}

/// The opaque globe sphere.
#[derive(Debug, Clone)]
pub struct GlobeBody {
    pub radius: f32,
    pub segments: u32,
    pub material: Material,
    /// Y rotation in radians, driven by the rotation controller.
    pub yaw: f32,
}

/// One connection line layer, flattened into a single polyline.
#[derive(Debug, Clone)]
pub struct Polyline {
    pub vertices: Vec<PointVertex>,
    pub width: f32,
    pub opacity: f32,
}

/// A location marker: a small emissive core inside concentric glow halos.
#[derive(Debug, Clone)]
pub struct Marker {
    pub position: Vec3,
    pub color: Color,
}

impl Marker {
    /// Radius at which markers sit above the surface.
    pub const SURFACE_RADIUS: f32 = 1.05;
    /// Concentric halo spheres, outermost first: (radius, opacity).
    pub const HALOS: [(f32, f32); 3] = [(0.08, 0.1), (0.05, 0.2), (0.03, 0.4)];
    /// Solid emissive core.
    pub const CORE_RADIUS: f32 = 0.02;
    pub const CORE_EMISSIVE_INTENSITY: f32 = 0.5;
}

/// A text label floating above its marker.
#[derive(Debug, Clone)]
pub struct Label {
    pub position: Vec3,
    pub text: String,
    pub color: Color,
    pub font_size: f32,
    /// White outline width for legibility against the globe.
    pub outline_width: f32,
}

impl Label {
    /// Vertical offset above the marker.
    pub const OFFSET: f32 = 0.15;
    pub const FONT_SIZE: f32 = 0.05;
    pub const OUTLINE_WIDTH: f32 = 0.01;
}

/// The light rig around the globe.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    Ambient { color: Color, intensity: f32 },
    Directional { position: Vec3, color: Color, intensity: f32 },
    Point { position: Vec3, color: Color, intensity: f32 },
}

fn default_light_rig() -> Vec<Light> {
    vec![
        Light::Ambient {
            color: Color::WHITE,
            intensity: 0.3,
        },
        Light::Directional {
            position: Vec3::new(2.0, 2.0, 2.0),
            color: Color::WHITE,
            intensity: 1.5,
        },
        Light::Point {
            position: Vec3::new(-2.0, -2.0, -2.0),
            color: SKY_BLUE,
            intensity: 0.8,
        },
        Light::Point {
            position: Vec3::new(0.0, 0.0, 3.0),
            color: EMERALD,
            intensity: 0.5,
        },
    ]
}

/// One entry of the back-to-front draw list.
#[derive(Debug)]
pub enum DrawNode<'a> {
    Stars(&'a PointCloud),
    Shell(&'a Shell),
    Body(&'a GlobeBody),
    Lines(&'a Polyline),
    Marker(&'a Marker),
    Label(&'a Label),
}

/// Build-time parameters for the scene.
#[derive(Debug, Clone)]
pub struct SceneParams {
    pub star_count: usize,
    pub star_inner_radius: f32,
    pub star_outer_radius: f32,
    pub star_seed: u64,
    /// Optional globe texture; any load failure falls back to a flat
    /// material without blocking the scene.
    pub texture_path: Option<PathBuf>,
    pub rotation_increment: f32,
    pub cooldown_seconds: f64,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            star_count: 200,
            star_inner_radius: 5.0,
            star_outer_radius: 15.0,
            star_seed: 0,
            texture_path: None,
            rotation_increment: RotationController::DEFAULT_INCREMENT,
            cooldown_seconds: RotationController::DEFAULT_COOLDOWN_SECONDS,
        }
    }
}

/// The fully composed globe scene.
///
/// Geometry is immutable after `build`; pointer handlers record intent on
/// the rotation controller and `tick` is the only mutator of the animated
/// angles.
#[derive(Debug, Clone)]
pub struct GlobeScene {
    pub starfield: PointCloud,
    pub outer_glow: Shell,
    pub middle_glow: Shell,
    pub body: GlobeBody,
    pub atmosphere: Shell,
    pub standard_lines: Polyline,
    pub glow_lines: Polyline,
    pub markers: Vec<Marker>,
    pub labels: Vec<Label>,
    pub lights: Vec<Light>,
    pub camera: OrbitCamera,
    rotation: RotationController,
}

impl GlobeScene {
    /// Compose the scene from a catalog and edge lists.
    pub fn build(
        catalog: &[Location],
        standard_edges: &[Edge],
        glow_edges: &[Edge],
        params: &SceneParams,
    ) -> Self {
        let stars = generate_starfield(
            params.star_count,
            params.star_inner_radius,
            params.star_outer_radius,
            params.star_seed,
        );
        let graph = ConnectionGraph::build(catalog, standard_edges, glow_edges);

        let markers: Vec<Marker> = catalog
            .iter()
            .map(|loc| Marker {
                position: globe::project(loc.lat, loc.lng, Marker::SURFACE_RADIUS),
                color: loc.color,
            })
            .collect();
        let labels: Vec<Label> = catalog
            .iter()
            .zip(&markers)
            .map(|(loc, marker)| Label {
                position: marker.position + Vec3::Y * Label::OFFSET,
                text: loc.name.clone(),
                color: loc.color,
                font_size: Label::FONT_SIZE,
                outline_width: Label::OUTLINE_WIDTH,
            })
            .collect();

        Self {
            starfield: PointCloud {
                vertices: point_vertices(&stars, Color::WHITE, 0.8),
                point_size: 0.02,
                opacity: 0.8,
            },
            outer_glow: Shell::new(1.08, SKY_BLUE, 0.15),
            middle_glow: Shell::new(1.04, EMERALD, 0.10),
            body: GlobeBody {
                radius: 1.0,
                segments: 64,
                material: Material::globe_or_fallback(params.texture_path.as_deref()),
                yaw: 0.0,
            },
            atmosphere: Shell::new(1.01, SKY_BLUE, 0.20),
            standard_lines: Polyline {
                vertices: point_vertices(graph.standard_points(), Color::WHITE, 0.9),
                width: 3.0,
                opacity: 0.9,
            },
            glow_lines: Polyline {
                vertices: point_vertices(graph.glow_points(), SKY_BLUE, 0.6),
                width: 5.0,
                opacity: 0.6,
            },
            markers,
            labels,
            lights: default_light_rig(),
            camera: OrbitCamera::new(),
            rotation: RotationController::new(
                params.rotation_increment,
                params.cooldown_seconds,
            ),
        }
    }

    /// The draw list, back-to-front for correct alpha blending.
    pub fn draw_list(&self) -> Vec<DrawNode<'_>> {
        let mut nodes = Vec::with_capacity(7 + self.markers.len() + self.labels.len());
        nodes.push(DrawNode::Stars(&self.starfield));
        nodes.push(DrawNode::Shell(&self.outer_glow));
        nodes.push(DrawNode::Shell(&self.middle_glow));
        nodes.push(DrawNode::Body(&self.body));
        nodes.push(DrawNode::Shell(&self.atmosphere));
        nodes.push(DrawNode::Lines(&self.standard_lines));
        nodes.push(DrawNode::Lines(&self.glow_lines));
        for marker in &self.markers {
            nodes.push(DrawNode::Marker(marker));
        }
        for label in &self.labels {
            nodes.push(DrawNode::Label(label));
        }
        nodes
    }

    /// Pointer pressed on the visualization region.
    pub fn pointer_down(&mut self) {
        self.rotation.pointer_down();
    }

    /// Pointer released or left the region at time `now` (seconds).
    pub fn pointer_released(&mut self, now: f64) {
        self.rotation.pointer_released(now);
    }

    /// Advance one animation frame at time `now` (seconds). Sole mutator
    /// of the rotating layers.
    pub fn tick(&mut self, now: f64) {
        self.rotation.tick(now);
        self.body.yaw = self.rotation.angle();
        self.outer_glow.yaw = self.rotation.glow_angle();
    }

    /// Current rotation mode, for hosts that want to surface it.
    pub fn rotation_mode(&self) -> RotationMode {
        self.rotation.mode()
    }

    /// Total points across the star and line buffers.
    pub fn point_count(&self) -> usize {
        self.starfield.vertices.len()
            + self.standard_lines.vertices.len()
            + self.glow_lines.vertices.len()
    }
}
