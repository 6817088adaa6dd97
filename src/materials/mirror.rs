// Copyright @yucwang 2026

use crate::core::bsdf::{BSDFEvalResult, BSDF};
use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::Sampler;
use crate::core::texture::Texture;
use crate::math::constants::{Float, Vector3f};
use crate::math::vector::reflect;
use std::sync::Arc;

// Two unit vectors closer than this are treated as the same direction.
pub const DIRECTION_MATCH_COS: Float = 1.0 - 1e-4;

/// Perfect specular reflector.
pub struct MirrorBSDF {
    reflectance: Arc<dyn Texture>,
}

impl MirrorBSDF {
    pub fn new(reflectance: Arc<dyn Texture>) -> Self {
        Self { reflectance }
    }
}

impl BSDF for MirrorBSDF {
    fn eval(&self, its: &SurfaceIntersection, wo: &Vector3f, wi: &Vector3f) -> BSDFEvalResult {
        let n = its.normal();
        let cos_theta = n.dot(wi);
        if cos_theta <= 0.0 {
            return BSDFEvalResult::default();
        }
        let reflected = reflect(wo, &n);
        if reflected.dot(wi) < DIRECTION_MATCH_COS {
            return BSDFEvalResult::default();
        }

        // value cancels the cosine in the estimator
        let albedo = self.reflectance.eval(its.uv());
        BSDFEvalResult::new(albedo / cos_theta, 1.0)
    }

    fn sample(&self, its: &SurfaceIntersection, wo: &Vector3f,
              _sampler: &mut dyn Sampler) -> Option<Vector3f> {
        let n = its.normal();
        let wi = reflect(wo, &n);
        if wi.dot(&n) <= 0.0 {
            return None;
        }
        Some(wi)
    }

    fn is_delta(&self) -> bool {
        true
    }
}
