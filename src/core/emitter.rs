// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::spectrum::RGBSpectrum;

/// A point on a light source together with what it emits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitterSampleRecord {
    pub p: Vector3f,
    pub normal: Vector3f,
    pub le: RGBSpectrum,
    // per-emitter density is left at 1; the scene normalizes by total area
    pub pdf: Float,
}

impl EmitterSampleRecord {
    pub fn new(p: Vector3f, normal: Vector3f, le: RGBSpectrum) -> Self {
        Self { p, normal, le, pdf: 1.0 }
    }
}

pub trait Emitter: Send + Sync {
    fn surface_area(&self) -> Float;
    fn sample_position(&self, u: &Vector2f) -> EmitterSampleRecord;
}
