// Copyright @yucwang 2023

use crate::core::bsdf::{BSDFEvalResult, BSDF};
use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::Sampler;
use crate::core::texture::Texture;
use crate::math::constants::{ INV_PI, Vector3f };
use crate::math::warp::{ sample_cosine_hemisphere, sample_cosine_hemisphere_pdf };
use std::sync::Arc;

pub struct LambertianDiffuseBSDF {
    reflectance: Arc<dyn Texture>
}

impl BSDF for LambertianDiffuseBSDF {
    fn eval(&self, its: &SurfaceIntersection, _wo: &Vector3f, wi: &Vector3f) -> BSDFEvalResult {
        let cos_theta = its.normal().dot(wi);
        if cos_theta <= 0.0 {
            return BSDFEvalResult::default();
        }

        let albedo = self.reflectance.eval(its.uv());
        BSDFEvalResult::new(albedo * INV_PI, sample_cosine_hemisphere_pdf(cos_theta))
    }

    fn sample(&self,
              its: &SurfaceIntersection,
              _wo: &Vector3f,
              sampler: &mut dyn Sampler) -> Option<Vector3f> {
        let local = sample_cosine_hemisphere(&sampler.next_2d());
        if local.z <= 0.0 {
            return None;
        }

        Some(its.frame().from_local(&local))
    }
}

impl LambertianDiffuseBSDF {
    pub fn new(reflectance: Arc<dyn Texture>) -> Self {
        Self {
            reflectance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::LcgRng;
    use crate::math::constants::{Float, Vector2f};
    use crate::math::frame::Frame;
    use crate::math::spectrum::RGBSpectrum;
    use crate::textures::uniform::UniformColorTexture;

    fn intersection(normal: Vector3f) -> SurfaceIntersection {
        SurfaceIntersection::new(Vector3f::zeros(), Frame::from_normal(normal), Vector2f::zeros(), 1.0, false)
    }

    #[test]
    fn test_samples_stay_in_normal_hemisphere() {
        let bsdf = LambertianDiffuseBSDF::new(Arc::new(UniformColorTexture::new(RGBSpectrum::new(0.8, 0.8, 0.8))));
        let n = Vector3f::new(0.3, 0.9, -0.2).normalize();
        let its = intersection(n);
        let mut rng = LcgRng::new(5);
        for _ in 0..2000 {
            if let Some(wi) = bsdf.sample(&its, &n, &mut rng) {
                assert!(wi.dot(&n) >= 0.0);
            }
        }
    }

    #[test]
    fn test_importance_sampling_weight_averages_to_albedo() {
        let albedo = RGBSpectrum::new(0.8, 0.5, 0.2);
        let bsdf = LambertianDiffuseBSDF::new(Arc::new(UniformColorTexture::new(albedo)));
        let n = Vector3f::new(0.0, 0.0, 1.0);
        let its = intersection(n);
        let wo = Vector3f::new(0.6, 0.0, 0.8);
        let mut rng = LcgRng::new(17);

        let count = 20000;
        let mut acc = Vector3f::zeros();
        for _ in 0..count {
            if let Some((wi, eval)) = bsdf.sample_and_eval(&its, &wo, &mut rng) {
                if eval.pdf > 0.0 {
                    acc += eval.value * (wi.dot(&n) / eval.pdf);
                }
            }
        }
        let mean = acc / count as Float;
        assert!((mean - albedo).norm() < 1e-2);
    }

    #[test]
    fn test_below_surface_is_zero() {
        let bsdf = LambertianDiffuseBSDF::new(Arc::new(UniformColorTexture::new(RGBSpectrum::new(1.0, 1.0, 1.0))));
        let n = Vector3f::new(0.0, 1.0, 0.0);
        let its = intersection(n);
        let eval = bsdf.eval(&its, &n, &Vector3f::new(0.0, -1.0, 0.0));
        assert_eq!(eval.pdf, 0.0);
        assert_eq!(eval.value, Vector3f::zeros());
    }
}
