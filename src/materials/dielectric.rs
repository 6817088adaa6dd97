// Copyright @yucwang 2026

use std::sync::Arc;

use crate::core::bsdf::{BSDFEvalResult, BSDF};
use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::Sampler;
use crate::core::texture::Texture;
use crate::math::constants::{Float, Vector3f};
use crate::math::vector::reflect;
use crate::materials::microfacet::fresnel_schlick_scalar;
use crate::materials::mirror::DIRECTION_MATCH_COS;

/// Smooth glass-like interface between an interior and an exterior medium.
pub struct DielectricBSDF {
    int_ior: Float,
    ext_ior: Float,
    reflectance: Arc<dyn Texture>,
    transmittance: Arc<dyn Texture>,
}

/// Geometry of one crossing, resolved from the side the ray arrives on.
#[derive(Debug, Clone, Copy)]
struct Interface {
    relative_eta: Float,
    cos_i: Float,
    // None under total internal reflection
    cos_t: Option<Float>,
    fresnel: Float,
}

impl DielectricBSDF {
    pub fn new(int_ior: Float, ext_ior: Float,
               reflectance: Arc<dyn Texture>, transmittance: Arc<dyn Texture>) -> Self {
        Self { int_ior, ext_ior, reflectance, transmittance }
    }

    fn interface(&self, its: &SurfaceIntersection, wo: &Vector3f) -> Interface {
        let (eta_i, eta_t) = if its.normal_inverted() {
            (self.int_ior, self.ext_ior)
        } else {
            (self.ext_ior, self.int_ior)
        };
        let relative_eta = eta_i / eta_t;

        let cos_i = its.normal().dot(wo).max(0.0).min(1.0);
        let sin_i = (1.0 - cos_i * cos_i).max(0.0).sqrt();
        if relative_eta * sin_i > 1.0 {
            return Interface { relative_eta, cos_i, cos_t: None, fresnel: 1.0 };
        }

        let sin_t = relative_eta * sin_i;
        let cos_t = (1.0 - sin_t * sin_t).max(0.0).sqrt();
        let r0 = ((eta_i - eta_t) / (eta_i + eta_t)).powi(2);
        let cos_schlick = if relative_eta > 1.0 { cos_t } else { cos_i };
        let fresnel = fresnel_schlick_scalar(r0, cos_schlick);
        Interface { relative_eta, cos_i, cos_t: Some(cos_t), fresnel }
    }

    fn refract(n: &Vector3f, wo: &Vector3f, iface: &Interface) -> Option<Vector3f> {
        let cos_t = iface.cos_t?;
        Some(-(wo - n * iface.cos_i) * iface.relative_eta - n * cos_t)
    }
}

impl BSDF for DielectricBSDF {
    fn eval(&self, its: &SurfaceIntersection, wo: &Vector3f, wi: &Vector3f) -> BSDFEvalResult {
        let n = its.normal();
        if n.dot(wo) <= 0.0 {
            return BSDFEvalResult::default();
        }
        let iface = self.interface(its, wo);

        let cos_r = n.dot(wi);
        if cos_r > 0.0 && reflect(wo, &n).dot(wi) >= DIRECTION_MATCH_COS {
            let value = self.reflectance.eval(its.uv()) * (iface.fresnel / cos_r);
            return BSDFEvalResult::new(value, iface.fresnel);
        }

        if let Some(wt) = Self::refract(&n, wo, &iface) {
            let cos_t = -n.dot(wi);
            if cos_t > 0.0 && wt.dot(wi) >= DIRECTION_MATCH_COS {
                let transmitted = 1.0 - iface.fresnel;
                let scale = transmitted / cos_t / (iface.relative_eta * iface.relative_eta);
                let value = self.transmittance.eval(its.uv()) * scale;
                return BSDFEvalResult::transmission(value, transmitted);
            }
        }

        BSDFEvalResult::default()
    }

    fn sample(&self, its: &SurfaceIntersection, wo: &Vector3f,
              sampler: &mut dyn Sampler) -> Option<Vector3f> {
        let n = its.normal();
        if n.dot(wo) <= 0.0 {
            return None;
        }
        let iface = self.interface(its, wo);
        if sampler.next_1d() < iface.fresnel {
            return Some(reflect(wo, &n));
        }
        Self::refract(&n, wo, &iface)
    }

    fn is_delta(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::LcgRng;
    use crate::math::constants::Vector2f;
    use crate::math::frame::Frame;
    use crate::math::spectrum::RGBSpectrum;
    use crate::textures::uniform::UniformColorTexture;

    fn glass() -> DielectricBSDF {
        let white = Arc::new(UniformColorTexture::new(RGBSpectrum::new(1.0, 1.0, 1.0)));
        DielectricBSDF::new(1.5, 1.0, white.clone(), white)
    }

    fn hit(normal_inverted: bool) -> SurfaceIntersection {
        SurfaceIntersection::new(Vector3f::zeros(), Frame::from_normal(Vector3f::new(0.0, 0.0, 1.0)),
                                 Vector2f::zeros(), 1.0, normal_inverted)
    }

    fn direction_with_sin(sin_theta: Float) -> Vector3f {
        Vector3f::new(sin_theta, 0.0, (1.0 - sin_theta * sin_theta).sqrt())
    }

    #[test]
    fn test_normal_incidence_reflectance() {
        let bsdf = glass();
        let its = hit(false);
        let wo = Vector3f::new(0.0, 0.0, 1.0);
        let eval = bsdf.eval(&its, &wo, &wo);
        assert!((eval.pdf - 0.04).abs() < 1e-5);

        let through = bsdf.eval(&its, &wo, &Vector3f::new(0.0, 0.0, -1.0));
        assert!(through.is_btdf);
        assert!((through.pdf - 0.96).abs() < 1e-5);
    }

    #[test]
    fn test_reflect_and_refract_pdfs_sum_to_one() {
        let bsdf = glass();
        for inverted in [false, true].iter() {
            let its = hit(*inverted);
            let wo = direction_with_sin(0.5);
            let n = its.normal();
            let iface = bsdf.interface(&its, &wo);
            let wr = reflect(&wo, &n);
            let wt = DielectricBSDF::refract(&n, &wo, &iface).expect("below the critical angle");
            assert!((wt.norm() - 1.0).abs() < 1e-4);

            let total = bsdf.eval(&its, &wo, &wr).pdf + bsdf.eval(&its, &wo, &wt).pdf;
            assert!((total - 1.0).abs() < 1e-5, "inverted {} total {}", inverted, total);
        }
    }

    #[test]
    fn test_refraction_obeys_snell() {
        let bsdf = glass();
        let its = hit(false);
        let wo = direction_with_sin(0.6);
        let iface = bsdf.interface(&its, &wo);
        let wt = DielectricBSDF::refract(&its.normal(), &wo, &iface).expect("entering never reflects totally");
        let sin_t = (wt.x * wt.x + wt.y * wt.y).sqrt();
        assert!((sin_t - 0.4).abs() < 1e-4);
        assert!(wt.z < 0.0);
    }

    #[test]
    fn test_total_internal_reflection_boundary() {
        let bsdf = glass();
        let its = hit(true);
        // critical sine from inside is 1/1.5
        let below = bsdf.interface(&its, &direction_with_sin(0.66));
        assert!(below.cos_t.is_some());
        assert!(below.fresnel < 1.0);

        let above = bsdf.interface(&its, &direction_with_sin(0.67));
        assert!(above.cos_t.is_none());
        assert_eq!(above.fresnel, 1.0);

        let wo = direction_with_sin(0.8);
        let mut rng = LcgRng::new(3);
        for _ in 0..64 {
            let wi = bsdf.sample(&its, &wo, &mut rng).expect("reflection always exists");
            assert!(wi.z > 0.0);
            assert_eq!(bsdf.eval(&its, &wo, &wi).pdf, 1.0);
        }
    }

    #[test]
    fn test_transmission_weight_scales_by_eta_squared() {
        let bsdf = glass();
        let its = hit(false);
        let wo = direction_with_sin(0.3);
        let iface = bsdf.interface(&its, &wo);
        let wt = DielectricBSDF::refract(&its.normal(), &wo, &iface).expect("refraction exists");
        let eval = bsdf.eval(&its, &wo, &wt);
        let weight = eval.value.x * wt.z.abs() / eval.pdf;
        assert!((weight - 1.5 * 1.5).abs() < 1e-3);
    }
}
