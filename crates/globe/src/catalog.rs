//! The static location catalog and hand-curated connection lists.
//!
//! Locations and edges are authored once at startup and never mutated.
//! Edge lists may reference names missing from the catalog (stale entries
//! survive hand editing); resolution happens in [`crate::graph`] and is
//! never fatal.

use engine_core::Color;

/// A named geographic location on the globe.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    /// Latitude in degrees, in [-90, 90].
    pub lat: f32,
    /// Longitude in degrees, in [-180, 180].
    pub lng: f32,
    /// Marker and label color.
    pub color: Color,
}

impl Location {
    pub fn new(name: &str, lat: f32, lng: f32, color: Color) -> Self {
        Self {
            name: name.to_string(),
            lat,
            lng,
            color,
        }
    }
}

/// A hand-authored connection between two catalog locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Visual style of a connection arc.
///
/// Glow arcs are drawn wider and more translucent on a slightly larger
/// sphere, with more samples for a smoother, more luminous curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcStyle {
    Standard,
    Glow,
}

impl ArcStyle {
    /// Radius at which arc endpoints are projected. Keeps the two line
    /// layers visually separated above the globe surface.
    pub fn endpoint_radius(&self) -> f32 {
        match self {
            ArcStyle::Standard => 1.02,
            ArcStyle::Glow => 1.03,
        }
    }

    /// Outward bulge of the arc's Bezier control point.
    pub fn height_multiplier(&self) -> f32 {
        match self {
            ArcStyle::Standard => 1.3,
            ArcStyle::Glow => 1.4,
        }
    }

    /// Bezier samples per arc (the sampled curve has one more point).
    pub fn sample_count(&self) -> usize {
        match self {
            ArcStyle::Standard => 20,
            ArcStyle::Glow => 30,
        }
    }
}

// Regional color tags.
const US_BLUE: Color = Color::rgb(0x60, 0xA5, 0xFA);
const GHANA_AMBER: Color = Color::rgb(0xF5, 0x9E, 0x0B);
const LIBERIA_GREEN: Color = Color::rgb(0x10, 0xB9, 0x81);
const GUYANA_RED: Color = Color::rgb(0xEF, 0x44, 0x44);
const LONDON_VIOLET: Color = Color::rgb(0x8B, 0x5C, 0xF6);
const TOKYO_CYAN: Color = Color::rgb(0x06, 0xB6, 0xD4);

/// The built-in connection-point catalog: US, Ghana, Liberia, and Guyana
/// hubs plus a couple of wider links.
pub fn default_locations() -> Vec<Location> {
    vec![
        Location::new("New York", 40.7128, -74.006, US_BLUE),
        Location::new("Los Angeles", 34.0522, -118.2437, US_BLUE),
        Location::new("Chicago", 41.8781, -87.6298, US_BLUE),
        Location::new("Miami", 25.7617, -80.1918, US_BLUE),
        Location::new("Accra", 5.6037, -0.187, GHANA_AMBER),
        Location::new("Kumasi", 6.6885, -1.6244, GHANA_AMBER),
        Location::new("Monrovia", 6.3004, -10.797, LIBERIA_GREEN),
        Location::new("Georgetown", 6.8013, -58.1551, GUYANA_RED),
        Location::new("London", 51.5074, -0.1278, LONDON_VIOLET),
        Location::new("Tokyo", 35.6762, 139.6503, TOKYO_CYAN),
    ]
}

/// The standard (thin white) connection list.
pub fn standard_edges() -> Vec<Edge> {
    vec![
        // US to Ghana
        Edge::new("New York", "Accra"),
        Edge::new("Los Angeles", "Kumasi"),
        Edge::new("Chicago", "Accra"),
        // US to Liberia
        Edge::new("New York", "Monrovia"),
        Edge::new("Miami", "Monrovia"),
        // US to Guyana
        Edge::new("New York", "Georgetown"),
        Edge::new("Miami", "Georgetown"),
        // West Africa and South America
        Edge::new("Accra", "Monrovia"),
        Edge::new("Accra", "Georgetown"),
        Edge::new("Monrovia", "Georgetown"),
        // Wider links
        Edge::new("New York", "London"),
        Edge::new("Los Angeles", "Tokyo"),
    ]
}

/// The glow (wide translucent) connection list.
pub fn glow_edges() -> Vec<Edge> {
    vec![
        Edge::new("New York", "Accra"),
        Edge::new("Los Angeles", "Monrovia"),
        Edge::new("Miami", "Georgetown"),
        Edge::new("Accra", "Monrovia"),
    ]
}
