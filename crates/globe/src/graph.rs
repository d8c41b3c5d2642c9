//! Resolves the edge lists against the catalog and builds the renderable
//! connection polylines.

use glam::Vec3;

use crate::arc::build_arc;
use crate::catalog::{ArcStyle, Edge, Location};
use crate::projection::project;

/// Flattened connection geometry for both line layers.
///
/// All arcs of one style are concatenated in edge-list order into a single
/// polyline. That joins the tail of each arc to the head of the next with
/// a seam segment; line width and opacity make the seams inconspicuous,
/// and the single-polyline look is part of the intended output. Do not
/// split per arc.
#[derive(Debug, Clone)]
pub struct ConnectionGraph {
    standard_points: Vec<Vec3>,
    glow_points: Vec<Vec3>,
    standard_arcs: usize,
    glow_arcs: usize,
}

impl ConnectionGraph {
    /// Resolve both edge lists and build their polylines.
    ///
    /// Edges referencing names missing from the catalog are skipped with a
    /// warning; the lists are hand-authored and may carry stale entries.
    pub fn build(catalog: &[Location], standard: &[Edge], glow: &[Edge]) -> Self {
        let (standard_points, standard_arcs) =
            build_style(catalog, standard, ArcStyle::Standard);
        let (glow_points, glow_arcs) = build_style(catalog, glow, ArcStyle::Glow);
        Self {
            standard_points,
            glow_points,
            standard_arcs,
            glow_arcs,
        }
    }

    /// Points of the standard (thin white) polyline.
    pub fn standard_points(&self) -> &[Vec3] {
        &self.standard_points
    }

    /// Points of the glow (wide translucent) polyline.
    pub fn glow_points(&self) -> &[Vec3] {
        &self.glow_points
    }

    /// Number of arcs that resolved for a style.
    pub fn arc_count(&self, style: ArcStyle) -> usize {
        match style {
            ArcStyle::Standard => self.standard_arcs,
            ArcStyle::Glow => self.glow_arcs,
        }
    }
}

fn build_style(catalog: &[Location], edges: &[Edge], style: ArcStyle) -> (Vec<Vec3>, usize) {
    let mut points = Vec::with_capacity(edges.len() * (style.sample_count() + 1));
    let mut arcs = 0;

    for edge in edges {
        let from = catalog.iter().find(|l| l.name == edge.from);
        let to = catalog.iter().find(|l| l.name == edge.to);
        let (Some(from), Some(to)) = (from, to) else {
            log::warn!(
                "skipping connection {} -> {}: endpoint not in catalog",
                edge.from,
                edge.to
            );
            continue;
        };

        let radius = style.endpoint_radius();
        let start = project(from.lat, from.lng, radius);
        let end = project(to.lat, to.lng, radius);
        points.extend(build_arc(
            start,
            end,
            style.height_multiplier(),
            style.sample_count(),
        ));
        arcs += 1;
    }

    (points, arcs)
}
