//! Ambient particle field.

use std::sync::Arc;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::options::ParticleOptions;

/// Scatter `count` points uniformly in a cube of edge `extent` centered on
/// the origin. The same seed always yields the same field.
#[must_use]
pub fn generate(options: &ParticleOptions) -> Arc<[Vec3]> {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let extent = options.extent as f32;
    let mut coord = || (rng.random::<f32>() - 0.5) * extent;
    (0..options.count)
        .map(|_| Vec3::new(coord(), coord(), coord()))
        .collect()
}
