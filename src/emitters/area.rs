// Copyright @yucwang 2026

use crate::core::emitter::{Emitter, EmitterSampleRecord};
use crate::core::shape::Shape;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::spectrum::RGBSpectrum;
use crate::shapes::quad::Quad;

/// Parallelogram light emitting `color * radiance` from every point.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaLight {
    shape: Quad,
    radiance: Float,
    color: RGBSpectrum,
}

impl AreaLight {
    pub fn new(origin: Vector3f, u: Vector3f, v: Vector3f, radiance: Float, color: RGBSpectrum) -> Self {
        Self { shape: Quad::new(origin, u, v), radiance, color }
    }

    pub fn shape(&self) -> &Quad {
        &self.shape
    }

    pub fn le(&self) -> RGBSpectrum {
        self.color * self.radiance
    }
}

impl Emitter for AreaLight {
    fn surface_area(&self) -> Float {
        self.shape.surface_area()
    }

    fn sample_position(&self, u: &Vector2f) -> EmitterSampleRecord {
        let sample = self.shape.sample(u);
        EmitterSampleRecord::new(sample.p, sample.normal, self.le())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_lie_on_the_quad() {
        let light = AreaLight::new(Vector3f::new(-0.5, 2.0, -0.5), Vector3f::new(1.0, 0.0, 0.0),
                                   Vector3f::new(0.0, 0.0, 1.0), 5.0, RGBSpectrum::new(1.0, 0.8, 0.6));
        assert!((light.surface_area() - 1.0).abs() < 1e-6);

        let rec = light.sample_position(&Vector2f::new(0.25, 0.75));
        assert!((rec.p - Vector3f::new(-0.25, 2.0, 0.25)).norm() < 1e-6);
        assert!((rec.normal.y.abs() - 1.0).abs() < 1e-6);
        assert_eq!(rec.le, RGBSpectrum::new(5.0, 4.0, 3.0));
        assert_eq!(rec.pdf, 1.0);
    }
}
