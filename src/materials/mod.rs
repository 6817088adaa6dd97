// Copyright @yucwang 2026

pub mod dielectric;
pub mod diffuse_specular;
pub mod emissive;
pub mod lambertian_diffuse;
pub mod microfacet;
pub mod microfacet_specular;
pub mod mirror;

pub use dielectric::DielectricBSDF;
pub use diffuse_specular::DiffuseSpecularBSDF;
pub use emissive::EmissiveBSDF;
pub use lambertian_diffuse::LambertianDiffuseBSDF;
pub use microfacet_specular::MicrofacetSpecularBSDF;
pub use mirror::MirrorBSDF;

use crate::core::bsdf::{BSDFEvalResult, BSDF};
use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::Sampler;
use crate::math::constants::Vector3f;
use crate::math::spectrum::RGBSpectrum;

/// Every surface model a scene object can carry.
pub enum Material {
    Diffuse(LambertianDiffuseBSDF),
    Mirror(MirrorBSDF),
    MicrofacetSpecular(MicrofacetSpecularBSDF),
    DiffuseSpecular(DiffuseSpecularBSDF),
    Dielectric(DielectricBSDF),
    Emissive(EmissiveBSDF),
}

macro_rules! dispatch {
    ($self:ident, $bsdf:ident => $body:expr) => {
        match $self {
            Material::Diffuse($bsdf) => $body,
            Material::Mirror($bsdf) => $body,
            Material::MicrofacetSpecular($bsdf) => $body,
            Material::DiffuseSpecular($bsdf) => $body,
            Material::Dielectric($bsdf) => $body,
            Material::Emissive($bsdf) => $body,
        }
    };
}

impl BSDF for Material {
    fn name(&self) -> &'static str {
        match self {
            Material::Diffuse(_) => "diffuse",
            Material::Mirror(_) => "mirror",
            Material::MicrofacetSpecular(_) => "microfacet",
            Material::DiffuseSpecular(_) => "diffuse_specular",
            Material::Dielectric(_) => "dielectric",
            Material::Emissive(_) => "emitter",
        }
    }

    fn eval(&self, its: &SurfaceIntersection, wo: &Vector3f, wi: &Vector3f) -> BSDFEvalResult {
        dispatch!(self, bsdf => bsdf.eval(its, wo, wi))
    }

    fn sample(&self, its: &SurfaceIntersection, wo: &Vector3f,
              sampler: &mut dyn Sampler) -> Option<Vector3f> {
        dispatch!(self, bsdf => bsdf.sample(its, wo, sampler))
    }

    fn emitted(&self, its: &SurfaceIntersection) -> RGBSpectrum {
        dispatch!(self, bsdf => bsdf.emitted(its))
    }

    fn finish_trace(&self) -> bool {
        dispatch!(self, bsdf => bsdf.finish_trace())
    }

    fn is_delta(&self) -> bool {
        dispatch!(self, bsdf => bsdf.is_delta())
    }
}

impl From<LambertianDiffuseBSDF> for Material {
    fn from(bsdf: LambertianDiffuseBSDF) -> Self {
        Material::Diffuse(bsdf)
    }
}

impl From<MirrorBSDF> for Material {
    fn from(bsdf: MirrorBSDF) -> Self {
        Material::Mirror(bsdf)
    }
}

impl From<MicrofacetSpecularBSDF> for Material {
    fn from(bsdf: MicrofacetSpecularBSDF) -> Self {
        Material::MicrofacetSpecular(bsdf)
    }
}

impl From<DiffuseSpecularBSDF> for Material {
    fn from(bsdf: DiffuseSpecularBSDF) -> Self {
        Material::DiffuseSpecular(bsdf)
    }
}

impl From<DielectricBSDF> for Material {
    fn from(bsdf: DielectricBSDF) -> Self {
        Material::Dielectric(bsdf)
    }
}

impl From<EmissiveBSDF> for Material {
    fn from(bsdf: EmissiveBSDF) -> Self {
        Material::Emissive(bsdf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textures::uniform::UniformColorTexture;
    use std::sync::Arc;

    #[test]
    fn test_dispatch_flags() {
        let white = Arc::new(UniformColorTexture::new(RGBSpectrum::new(1.0, 1.0, 1.0)));
        let diffuse: Material = LambertianDiffuseBSDF::new(white.clone()).into();
        let mirror: Material = MirrorBSDF::new(white.clone()).into();
        let glass: Material = DielectricBSDF::new(1.5, 1.0, white.clone(), white).into();
        let light: Material = EmissiveBSDF::new(RGBSpectrum::new(1.0, 1.0, 1.0), 2.0).into();

        assert!(!diffuse.is_delta());
        assert!(mirror.is_delta());
        assert!(glass.is_delta());
        assert!(light.finish_trace());
        assert_eq!(light.name(), "emitter");
    }
}
