// Copyright @yucwang 2026

use crate::core::bsdf::{BSDFEvalResult, BSDF};
use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::Sampler;
use crate::core::texture::Texture;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::spectrum::RGBSpectrum;
use crate::math::vector::{reflect, safe_normalize};
use crate::math::warp::sample_ggx_half_vector;
use crate::materials::microfacet::{
    fresnel_schlick, ggx_d, roughness_to_alpha, smith_g_height_correlated, DENOM_EPSILON,
};
use std::sync::Arc;

/// GGX reflection lobe with a Schlick Fresnel term.
pub struct MicrofacetSpecularBSDF {
    alpha: Float,
    f0: Arc<dyn Texture>,
}

impl MicrofacetSpecularBSDF {
    pub fn new(f0: Arc<dyn Texture>, roughness: Float) -> Self {
        Self { alpha: roughness_to_alpha(roughness), f0 }
    }

    pub fn sample_half_vector(&self, its: &SurfaceIntersection, u: &Vector2f) -> Vector3f {
        its.frame().from_local(&sample_ggx_half_vector(u, self.alpha))
    }

    pub fn fresnel(&self, uv: Vector2f, cos_theta: Float) -> RGBSpectrum {
        fresnel_schlick(self.f0.eval(uv), cos_theta)
    }
}

impl BSDF for MicrofacetSpecularBSDF {
    fn eval(&self, its: &SurfaceIntersection, wo: &Vector3f, wi: &Vector3f) -> BSDFEvalResult {
        let n = its.normal();
        let cos_i = n.dot(wi);
        let cos_o = n.dot(wo);
        if cos_i <= 0.0 || cos_o <= 0.0 {
            return BSDFEvalResult::default();
        }
        let h = match safe_normalize(&(wo + wi)) {
            Some(h) => h,
            None => return BSDFEvalResult::default(),
        };

        let cos_h = n.dot(&h).max(0.0);
        let cos_ih = wi.dot(&h).max(0.0);
        let d = ggx_d(cos_h, self.alpha);
        let g = smith_g_height_correlated(cos_i, cos_o, self.alpha);
        let f = self.fresnel(its.uv(), cos_ih);

        let value = f * (d * g / (4.0 * cos_i * cos_o).max(DENOM_EPSILON));
        let pdf = d * cos_h / (4.0 * cos_ih).max(DENOM_EPSILON);
        BSDFEvalResult::new(value, pdf)
    }

    fn sample(&self, its: &SurfaceIntersection, wo: &Vector3f,
              sampler: &mut dyn Sampler) -> Option<Vector3f> {
        let h = self.sample_half_vector(its, &sampler.next_2d());
        let wi = reflect(wo, &h);
        if wi.dot(&its.normal()) <= 0.0 {
            return None;
        }
        Some(wi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::LcgRng;
    use crate::math::frame::Frame;
    use crate::textures::uniform::UniformColorTexture;

    fn flat() -> SurfaceIntersection {
        SurfaceIntersection::new(Vector3f::zeros(), Frame::from_normal(Vector3f::new(0.0, 0.0, 1.0)),
                                 Vector2f::zeros(), 1.0, false)
    }

    #[test]
    fn test_sampled_directions_have_positive_pdf() {
        let bsdf = MicrofacetSpecularBSDF::new(Arc::new(UniformColorTexture::new(RGBSpectrum::new(0.9, 0.9, 0.9))), 0.4);
        let its = flat();
        let wo = Vector3f::new(0.5, 0.0, 0.8).normalize();
        let mut rng = LcgRng::new(99);
        let mut accepted = 0;
        for _ in 0..2000 {
            if let Some((wi, eval)) = bsdf.sample_and_eval(&its, &wo, &mut rng) {
                assert!(wi.z > 0.0);
                assert!(eval.pdf > 0.0 && eval.pdf.is_finite());
                assert!(eval.value.iter().all(|c| c.is_finite() && *c >= 0.0));
                accepted += 1;
            }
        }
        assert!(accepted > 1500);
    }

    #[test]
    fn test_reflectance_does_not_create_energy() {
        // albedo estimate <= 1 for a white F0
        let bsdf = MicrofacetSpecularBSDF::new(Arc::new(UniformColorTexture::new(RGBSpectrum::new(1.0, 1.0, 1.0))), 0.5);
        let its = flat();
        let wo = Vector3f::new(0.3, 0.2, 0.9).normalize();
        let mut rng = LcgRng::new(4);
        let n = 20000;
        let mut acc = 0.0;
        for _ in 0..n {
            if let Some((wi, eval)) = bsdf.sample_and_eval(&its, &wo, &mut rng) {
                if eval.pdf > 0.0 {
                    acc += eval.value.x * wi.z / eval.pdf;
                }
            }
        }
        let albedo = acc / n as Float;
        assert!(albedo > 0.5 && albedo < 1.05, "albedo {}", albedo);
    }

    #[test]
    fn test_below_surface_is_zero() {
        let bsdf = MicrofacetSpecularBSDF::new(Arc::new(UniformColorTexture::new(RGBSpectrum::new(1.0, 1.0, 1.0))), 0.5);
        let its = flat();
        let eval = bsdf.eval(&its, &Vector3f::new(0.0, 0.0, 1.0), &Vector3f::new(0.0, 0.6, -0.8));
        assert_eq!(eval.pdf, 0.0);
    }
}
