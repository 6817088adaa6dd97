// Copyright @yucwang 2026

use log::debug;

use crate::core::bsdf::BSDF;
use crate::core::integrator::Integrator;
use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::Sampler;
use crate::core::scene::Scene;
use crate::materials::Material;
use crate::math::constants::{Vector3f, RAY_EPSILON};
use crate::math::ray::Ray3f;
use crate::math::spectrum::{black, is_black, white, RGBSpectrum};
use crate::math::vector::{is_finite, safe_normalize};

pub const DEFAULT_MAX_DEPTH: u32 = 10;

/// Unidirectional path tracer with optional next-event estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathIntegrator {
    pub max_depth: u32,
    pub nee: bool,
}

impl Default for PathIntegrator {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH, nee: true }
    }
}

impl PathIntegrator {
    pub fn new(max_depth: u32, nee: bool) -> Self {
        Self { max_depth, nee }
    }

    fn trace_path(&self, scene: &Scene, ray: &Ray3f, sampler: &mut dyn Sampler) -> RGBSpectrum {
        let mut radiance = black();
        let mut throughput = white();
        let mut dir = match safe_normalize(&ray.dir()) {
            Some(d) => d,
            None => return radiance,
        };
        let mut ray = Ray3f::new(ray.origin(), dir, Some(ray.min_t), Some(ray.max_t));

        for _depth in 0..self.max_depth {
            let its = match scene.ray_intersection(&ray) {
                Some(its) => its,
                None => {
                    radiance += throughput.component_mul(&scene.ambient());
                    break;
                }
            };
            let material = match its.material() {
                Some(m) => m,
                None => break,
            };
            let wo = -dir;

            // surface emission is independent of the registered lights
            radiance += throughput.component_mul(&material.emitted(&its));
            if material.finish_trace() {
                break;
            }

            if self.nee && !material.is_delta() {
                let direct = self.sample_direct(scene, &its, material, &wo, sampler);
                radiance += throughput.component_mul(&direct);
            }

            let (wi, eval) = match material.sample_and_eval(&its, &wo, sampler) {
                Some(sample) => sample,
                None => break,
            };
            if !(eval.pdf > 0.0) || !eval.pdf.is_finite() {
                break;
            }

            let cos_theta = its.normal().dot(&wi).abs();
            throughput = throughput.component_mul(&eval.value) * (cos_theta / eval.pdf);
            if is_black(&throughput) || !is_finite(&throughput) {
                break;
            }

            dir = wi;
            ray = Ray3f::new(its.p(), dir, None, None);
        }

        radiance
    }

    /// One light sample toward a point chosen uniformly over all emitter area.
    fn sample_direct(&self, scene: &Scene, its: &SurfaceIntersection, material: &Material,
                     wo: &Vector3f, sampler: &mut dyn Sampler) -> RGBSpectrum {
        let light = match scene.sample_emitter(sampler) {
            Some(rec) => rec,
            None => return black(),
        };

        let to_light = light.p - its.p();
        let dist2 = to_light.norm_squared();
        let dist = dist2.sqrt();
        if dist <= RAY_EPSILON {
            return black();
        }
        let wi = to_light / dist;

        let eval = material.eval(its, wo, &wi);
        if is_black(&eval.value) {
            return black();
        }
        let cos_surface = if eval.is_btdf {
            its.normal().dot(&wi).abs()
        } else {
            its.normal().dot(&wi).max(0.0)
        };
        let cos_light = light.normal.dot(&wi).abs();
        if cos_surface <= 0.0 || cos_light <= 0.0 {
            return black();
        }

        let shadow = Ray3f::new(its.p(), wi, None, Some(dist - RAY_EPSILON));
        if scene.ray_intersection_t(&shadow) {
            return black();
        }

        eval.value.component_mul(&light.le) * (cos_surface * cos_light / dist2 / light.pdf)
    }
}

impl Integrator for PathIntegrator {
    fn li(&self, scene: &Scene, ray: &Ray3f, sampler: &mut dyn Sampler) -> RGBSpectrum {
        let radiance = self.trace_path(scene, ray, sampler);
        if !is_finite(&radiance) {
            debug!("discarding non-finite path radiance {:?}", radiance);
            return black();
        }
        radiance
    }
}
