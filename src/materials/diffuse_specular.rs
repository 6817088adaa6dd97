// Copyright @yucwang 2026

use std::sync::Arc;

use crate::core::bsdf::{BSDFEvalResult, BSDF};
use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::Sampler;
use crate::core::texture::Texture;
use crate::math::constants::{Float, Vector3f, INV_PI};
use crate::math::spectrum::{luminance, white, RGBSpectrum};
use crate::math::vector::{reflect, safe_normalize};
use crate::math::warp::{sample_cosine_hemisphere, sample_cosine_hemisphere_pdf, sample_ggx_half_vector};
use crate::materials::microfacet::{
    fresnel_schlick, ggx_d, roughness_to_alpha, smith_g_height_correlated, DENOM_EPSILON,
};

/// Lambertian base under a GGX coat. The base color doubles as the
/// coat's normal-incidence reflectance.
pub struct DiffuseSpecularBSDF {
    base_color: Arc<dyn Texture>,
    alpha: Float,
}

impl DiffuseSpecularBSDF {
    pub fn new(base_color: Arc<dyn Texture>, roughness: Float) -> Self {
        Self { base_color, alpha: roughness_to_alpha(roughness) }
    }

    fn specular_probability(fresnel: &RGBSpectrum) -> Float {
        let lum = luminance(fresnel).max(0.0).min(1.0);
        1.0 / (2.0 - lum)
    }
}

impl BSDF for DiffuseSpecularBSDF {
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

        let base = self.base_color.eval(its.uv());
        let cos_h = n.dot(&h).max(0.0);
        let cos_ih = wi.dot(&h).max(0.0);
        let f = fresnel_schlick(base, cos_ih);
        let d = ggx_d(cos_h, self.alpha);
        let g = smith_g_height_correlated(cos_i, cos_o, self.alpha);

        let diffuse = base * INV_PI;
        let specular = f * (d * g / (4.0 * cos_i * cos_o).max(DENOM_EPSILON));
        let value = diffuse.component_mul(&(white() - f)) + specular;

        let p_spec = Self::specular_probability(&f);
        let pdf_diffuse = sample_cosine_hemisphere_pdf(cos_i);
        let pdf_specular = d * cos_h / (4.0 * cos_ih).max(DENOM_EPSILON);
        let pdf = (1.0 - p_spec) * pdf_diffuse + p_spec * pdf_specular;

        BSDFEvalResult::new(value, pdf)
    }

    fn sample(&self, its: &SurfaceIntersection, wo: &Vector3f,
              sampler: &mut dyn Sampler) -> Option<Vector3f> {
        let frame = its.frame();
        let h = frame.from_local(&sample_ggx_half_vector(&sampler.next_2d(), self.alpha));
        let f = fresnel_schlick(self.base_color.eval(its.uv()), wo.dot(&h));

        let wi = if sampler.next_1d() < Self::specular_probability(&f) {
            reflect(wo, &h)
        } else {
            frame.from_local(&sample_cosine_hemisphere(&sampler.next_2d()))
        };

        if wi.dot(&its.normal()) <= 0.0 {
            return None;
        }
        Some(wi)
    }
}
