// Copyright @yucwang 2026

use crate::core::bsdf::{BSDFEvalResult, BSDF};
use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::Sampler;
use crate::math::constants::{Float, Vector3f};
use crate::math::spectrum::{black, RGBSpectrum};

/// Light-emitting surface that terminates every path reaching it.
pub struct EmissiveBSDF {
    color: RGBSpectrum,
    emittance: Float,
}

impl EmissiveBSDF {
    pub fn new(color: RGBSpectrum, emittance: Float) -> Self {
        Self { color, emittance }
    }

    pub fn radiance(&self) -> RGBSpectrum {
        self.color * self.emittance
    }
}

impl BSDF for EmissiveBSDF {
    fn eval(&self, _its: &SurfaceIntersection, _wo: &Vector3f, _wi: &Vector3f) -> BSDFEvalResult {
        BSDFEvalResult::new(black(), 1.0)
    }

    fn sample(&self, _its: &SurfaceIntersection, _wo: &Vector3f,
              _sampler: &mut dyn Sampler) -> Option<Vector3f> {
        None
    }

    fn emitted(&self, _its: &SurfaceIntersection) -> RGBSpectrum {
        self.radiance()
    }

    fn finish_trace(&self) -> bool {
        true
    }
}
