// Copyright @yucwang 2026

use crate::core::rng::Sampler;
use crate::math::ray::Ray3f;

pub trait Sensor: Send + Sync {
    /// Primary ray through a uniformly jittered point of pixel `(x, y)`.
    fn generate_ray(&self, x: usize, y: usize, width: usize, height: usize,
                    sampler: &mut dyn Sampler) -> Ray3f;
}
