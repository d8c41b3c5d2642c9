//! Starfield generation: background points in a spherical shell.

use glam::Vec3;
use rand::prelude::*;

/// Generate `count` star points uniformly distributed through a spherical
/// shell between `inner_radius` and `outer_radius`.
///
/// Directions are sampled with `phi = acos(2u - 1)`; sampling `phi`
/// uniformly in `[0, π]` instead would cluster stars at the poles.
/// Seeded so the field is stable for the scene's lifetime and across runs
/// with the same configuration.
pub fn generate_starfield(count: usize, inner_radius: f32, outer_radius: f32, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let r = inner_radius + rng.gen::<f32>() * (outer_radius - inner_radius);
            let theta = rng.gen::<f32>() * std::f32::consts::TAU;
            let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();

            Vec3::new(
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            )
        })
        .collect()
}
