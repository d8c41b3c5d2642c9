//! Arched connection curves between points on the sphere.
//!
//! Connections are drawn as quadratic Bezier curves whose control point is
//! pushed outward along the bisector of the two endpoints, so lines arch
//! over the globe instead of tunneling through it.

use glam::Vec3;

/// Sample a bulging quadratic Bezier curve between `a` and `b`.
///
/// Returns exactly `sample_count + 1` points, inclusive of both endpoints.
/// The control point is `normalize(a + b) * (|a| * height_multiplier)`;
/// both endpoints are assumed to lie on the same sphere. Antipodal
/// endpoints (where `a + b` cannot be normalized) fall back to `Vec3::Y`
/// as the bulge direction rather than dividing by zero, and coincident
/// endpoints collapse the curve to repeated copies of `a`.
pub fn build_arc(a: Vec3, b: Vec3, height_multiplier: f32, sample_count: usize) -> Vec<Vec3> {
    let sample_count = sample_count.max(1);
    let direction = (a + b).try_normalize().unwrap_or(Vec3::Y);
    let mid = direction * (a.length() * height_multiplier);

    (0..=sample_count)
        .map(|i| {
            let t = i as f32 / sample_count as f32;
            quadratic_bezier(a, mid, b, t)
        })
        .collect()
}

/// Evaluate a quadratic Bezier at parameter `t ∈ [0, 1]`.
fn quadratic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;

    const EPS: f32 = 1e-5;

    #[test]
    fn arc_has_sample_count_plus_one_points() {
        let a = project(0.0, 0.0, 1.02);
        let b = project(0.0, 90.0, 1.02);
        for &n in &[1usize, 2, 20, 30, 100] {
            assert_eq!(build_arc(a, b, 1.3, n).len(), n + 1);
        }
    }

    #[test]
    fn arc_endpoints_are_exact() {
        let a = project(40.7128, -74.006, 1.02);
        let b = project(5.6037, -0.187, 1.02);
        let arc = build_arc(a, b, 1.3, 20);
        assert!((arc[0] - a).length() < EPS);
        assert!((arc[20] - b).length() < EPS);
    }

    #[test]
    fn arc_bulges_outward_at_the_midpoint() {
        let a = project(0.0, 0.0, 1.0);
        let b = project(0.0, 90.0, 1.0);
        let arc = build_arc(a, b, 1.3, 20);
        assert!(arc[10].length() > 1.0);
    }

    #[test]
    fn coincident_endpoints_collapse_without_panicking() {
        let a = project(6.3004, -10.797, 1.02);
        let arc = build_arc(a, a, 1.3, 20);
        assert_eq!(arc.len(), 21);
        for p in &arc {
            // Curve degenerates toward `a`; every sample stays finite and
            // within the bulge of the control point.
            assert!(p.is_finite());
            assert!((*p - a).length() < a.length() * 1.3);
        }
    }

    #[test]
    fn antipodal_endpoints_use_the_fallback_direction() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(-1.0, 0.0, 0.0);
        let arc = build_arc(a, b, 1.4, 30);
        assert_eq!(arc.len(), 31);
        for p in &arc {
            assert!(p.is_finite());
        }
        // The fallback pushes the control point up the Y axis.
        assert!(arc[15].y > 0.0);
    }

    #[test]
    fn larger_multiplier_bulges_higher() {
        let a = project(0.0, 0.0, 1.0);
        let b = project(0.0, 90.0, 1.0);
        let low = build_arc(a, b, 1.3, 20);
        let high = build_arc(a, b, 1.4, 20);
        assert!(high[10].length() > low[10].length());
    }
}
