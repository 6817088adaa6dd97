// Copyright @yucwang 2023

use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::Sampler;
use crate::math::constants::{ Float, Vector3f };
use crate::math::spectrum::{ black, RGBSpectrum };

// Definitions of types used in BSDF sampling and eval
// processes
pub type BSDFValue = RGBSpectrum;

/// Everything the integrator needs to know about one direction pair at a
/// surface point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BSDFEvalResult {
    pub value: BSDFValue,
    pub pdf: Float,
    pub is_btdf: bool,
}

/// Directions follow one convention everywhere: `wo` points from the surface
/// toward the previous path vertex (the viewer), `wi` from the surface toward
/// the next vertex (the light). Both are normalized world-space vectors.
pub trait BSDF: Send + Sync {
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// BSDF value and sampling density for an arbitrary direction pair.
    fn eval(&self, its: &SurfaceIntersection, wo: &Vector3f, wi: &Vector3f) -> BSDFEvalResult;

    /// Draw one `wi`. `None` when the material does not scatter or the
    /// sample is degenerate.
    fn sample(&self, its: &SurfaceIntersection, wo: &Vector3f,
              sampler: &mut dyn Sampler) -> Option<Vector3f>;

    fn sample_and_eval(&self, its: &SurfaceIntersection, wo: &Vector3f,
                       sampler: &mut dyn Sampler) -> Option<(Vector3f, BSDFEvalResult)> {
        let wi = self.sample(its, wo, sampler)?;
        let eval_result = self.eval(its, wo, &wi);
        Some((wi, eval_result))
    }

    fn emitted(&self, _its: &SurfaceIntersection) -> RGBSpectrum {
        black()
    }

    /// Terminal materials stop the path after their emission is added.
    fn finish_trace(&self) -> bool {
        false
    }

    /// Dirac lobes only; light sampling cannot hit them.
    fn is_delta(&self) -> bool {
        false
    }
}

impl Default for BSDFEvalResult {
    fn default() -> Self {
        Self {
            value: black(),
            pdf: 0.0,
            is_btdf: false,
        }
    }
}

impl BSDFEvalResult {
    pub fn new(value: BSDFValue, pdf: Float) -> Self {
        Self { value, pdf, ..Self::default() }
    }

    pub fn transmission(value: BSDFValue, pdf: Float) -> Self {
        Self { value, pdf, is_btdf: true, ..Self::default() }
    }
}
