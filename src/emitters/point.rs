// Copyright @yucwang 2026

use log::warn;

use crate::core::emitter::{Emitter, EmitterSampleRecord};
use crate::core::shape::Shape;
use crate::math::constants::{Float, Vector2f, Vector3f, INV_FOUR_PI};
use crate::math::spectrum::RGBSpectrum;
use crate::shapes::sphere::Sphere;

/// Small spherical light. `power` is spread evenly over all directions.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    shape: Sphere,
    power: Float,
    color: RGBSpectrum,
}

impl PointLight {
    pub fn new(center: Vector3f, radius: Float, power: Float, color: RGBSpectrum) -> Self {
        if radius <= 0.0 {
            warn!("point light at {:?} has radius {}; it will never be sampled", center, radius);
        }
        Self { shape: Sphere::new(center, radius.max(0.0)), power, color }
    }

    pub fn center(&self) -> Vector3f {
        self.shape.center()
    }

    pub fn le(&self) -> RGBSpectrum {
        self.color * (self.power * INV_FOUR_PI)
    }
}

impl Emitter for PointLight {
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
    use crate::math::constants::PI;

    #[test]
    fn test_point_light_emission() {
        let light = PointLight::new(Vector3f::new(0.0, 3.0, 0.0), 0.1, 4.0 * PI, RGBSpectrum::new(1.0, 0.5, 0.0));
        assert!((light.le() - RGBSpectrum::new(1.0, 0.5, 0.0)).norm() < 1e-5);

        let rec = light.sample_position(&Vector2f::new(0.3, 0.6));
        assert!(((rec.p - light.center()).norm() - 0.1).abs() < 1e-5);
        assert!((rec.normal - (rec.p - light.center()) / 0.1).norm() < 1e-4);
    }

    #[test]
    fn test_zero_radius_has_no_area() {
        let light = PointLight::new(Vector3f::zeros(), 0.0, 1.0, RGBSpectrum::new(1.0, 1.0, 1.0));
        assert_eq!(light.surface_area(), 0.0);
    }
}
