//! Geographic coordinate projection onto the unit-ish sphere.

use glam::Vec3;

/// Project a latitude/longitude pair (degrees) onto a sphere of the given
/// radius.
///
/// Spherical-to-Cartesian with the longitude offset by 180° and X negated.
/// The convention is load-bearing: it lines the front-facing meridian up
/// with the globe texture, and markers and arc endpoints both go through
/// this function so they land on exactly the same surface points. Do not
/// re-derive it.
///
/// Inputs are expected in `lat ∈ [-90, 90]`, `lng ∈ [-180, 180]`,
/// `radius > 0`; the static catalog guarantees this, so out-of-range
/// values are not checked here.
pub fn project(lat_deg: f32, lng_deg: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - lat_deg).to_radians();
    let theta = (lng_deg + 180.0).to_radians();

    Vec3::new(
        -(radius * phi.sin() * theta.cos()),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn projected_points_lie_on_the_sphere() {
        for &(lat, lng) in &[
            (0.0f32, 0.0f32),
            (40.7128, -74.006),
            (-33.8688, 151.2093),
            (90.0, 0.0),
            (-90.0, 0.0),
            (51.5074, -0.1278),
            (35.6762, 139.6503),
        ] {
            for &r in &[1.0f32, 1.02, 1.05, 2.5] {
                let p = project(lat, lng, r);
                assert!(
                    (p.length() - r).abs() < EPS,
                    "|project({lat}, {lng}, {r})| = {}, expected {r}",
                    p.length()
                );
            }
        }
    }

    #[test]
    fn golden_anchor_for_the_sign_convention() {
        // Regression anchor for the axis-flip convention: lat 0, lng 0
        // maps to +X (theta = 180°, cos(theta) = -1, X negated back to +r).
        let p = project(0.0, 0.0, 1.0);
        assert!((p.x - 1.0).abs() < EPS);
        assert!(p.y.abs() < EPS);
        assert!(p.z.abs() < EPS);
    }

    #[test]
    fn poles_map_to_the_y_axis() {
        let north = project(90.0, 0.0, 1.0);
        assert!((north.y - 1.0).abs() < EPS);
        let south = project(-90.0, 0.0, 1.0);
        assert!((south.y + 1.0).abs() < EPS);
    }

    #[test]
    fn projection_is_deterministic() {
        let a = project(40.7128, -74.006, 1.05);
        let b = project(40.7128, -74.006, 1.05);
        assert_eq!(a, b);
    }
}
