// Copyright @yucwang 2026

use crate::core::emitter::{Emitter, EmitterSampleRecord};
use crate::core::interaction::SurfaceIntersection;
use crate::core::rng::Sampler;
use crate::core::sensor::Sensor;
use crate::core::shape::Shape;
use crate::emitters::Light;
use crate::materials::Material;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;
use crate::math::spectrum::RGBSpectrum;
use crate::shapes::Primitive;
use std::sync::Arc;

pub struct SceneObject {
    pub shape: Primitive,
    pub material: Arc<Material>,
    pub name: Option<String>,
}

impl SceneObject {
    pub fn new(shape: Primitive, material: Arc<Material>) -> Self {
        Self { shape, material, name: None }
    }

    pub fn with_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }
}

pub struct Scene {
    objects: Vec<SceneObject>,
    emitters: Vec<Light>,
    camera: Box<dyn Sensor>,
    ambient: RGBSpectrum,
    total_emitter_area: Float,
}

impl Scene {
    pub fn new(camera: Box<dyn Sensor>, ambient: RGBSpectrum) -> Self {
        Self {
            objects: Vec::new(),
            emitters: Vec::new(),
            camera,
            ambient,
            total_emitter_area: 0.0,
        }
    }

    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn add_emitter(&mut self, emitter: Light) {
        self.total_emitter_area += emitter.surface_area();
        self.emitters.push(emitter);
    }

    pub fn objects(&self) -> &Vec<SceneObject> {
        &self.objects
    }

    pub fn emitters(&self) -> &Vec<Light> {
        &self.emitters
    }

    pub fn camera(&self) -> &dyn Sensor {
        self.camera.as_ref()
    }

    pub fn ambient(&self) -> RGBSpectrum {
        self.ambient
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Nearest hit over every object, with that object's material attached.
    pub fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        let mut closest: Option<(SurfaceIntersection, usize)> = None;
        for (idx, object) in self.objects.iter().enumerate() {
            if let Some(hit) = object.shape.ray_intersection(ray) {
                let is_closer = match &closest {
                    Some((best, _)) => hit.t() < best.t(),
                    None => true,
                };
                if is_closer {
                    closest = Some((hit, idx));
                }
            }
        }

        closest.map(|(hit, idx)| hit.with_material(self.objects[idx].material.clone()))
    }

    pub fn ray_intersection_t(&self, ray: &Ray3f) -> bool {
        self.objects.iter().any(|object| object.shape.ray_intersection_t(ray))
    }

    pub fn has_emitter(&self) -> bool {
        self.total_emitter_area > 0.0
    }

    pub fn sum_surface_area(&self) -> Float {
        self.total_emitter_area
    }

    /// Picks an emitter with probability proportional to its area.
    /// Returns the emitter and its selection probability.
    pub fn select_emitter(&self, u: Float) -> Option<(&Light, Float)> {
        if !self.has_emitter() {
            return None;
        }

        let target = u * self.total_emitter_area;
        let mut cumulative = 0.0;
        let mut last_valid = None;
        for emitter in &self.emitters {
            let area = emitter.surface_area();
            if area <= 0.0 {
                continue;
            }
            cumulative += area;
            last_valid = Some((emitter, area / self.total_emitter_area));
            if target < cumulative {
                return last_valid;
            }
        }
        // u close to 1 can fall past the last bucket through rounding
        last_valid
    }

    /// Uniform point over the union of emitter surfaces. The returned pdf is
    /// per unit area.
    pub fn sample_emitter(&self, sampler: &mut dyn Sampler) -> Option<EmitterSampleRecord> {
        let (emitter, _) = self.select_emitter(sampler.next_1d())?;
        let mut record = emitter.sample_position(&sampler.next_2d());
        record.pdf = 1.0 / self.total_emitter_area;
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::LcgRng;
    use crate::emitters::{AreaLight, PointLight};
    use crate::materials::LambertianDiffuseBSDF;
    use crate::math::constants::Vector3f;
    use crate::sensors::PinholeCamera;
    use crate::shapes::{Primitive, Quad, Sphere};
    use crate::textures::uniform::UniformColorTexture;

    fn empty_scene() -> Scene {
        let camera = PinholeCamera::new(Vector3f::new(0.0, 0.0, 5.0), Vector3f::new(0.0, 0.0, -1.0), None, 0.05, None);
        Scene::new(Box::new(camera), RGBSpectrum::zeros())
    }

    fn diffuse(albedo: RGBSpectrum) -> Arc<Material> {
        Arc::new(LambertianDiffuseBSDF::new(Arc::new(UniformColorTexture::new(albedo))).into())
    }

    #[test]
    fn test_nearest_hit_wins() {
        let mut scene = empty_scene();
        let far = diffuse(RGBSpectrum::new(1.0, 0.0, 0.0));
        let near = diffuse(RGBSpectrum::new(0.0, 1.0, 0.0));
        scene.add_object(SceneObject::new(Primitive::from(Sphere::new(Vector3f::new(0.0, 0.0, -10.0), 1.0)), far));
        scene.add_object(SceneObject::new(Primitive::from(Sphere::new(Vector3f::new(0.0, 0.0, -4.0), 1.0)), near.clone()));

        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0), None, None);
        let hit = scene.ray_intersection(&ray).expect("two spheres on the axis");
        assert!((hit.t() - 3.0).abs() < 1e-4);
        let material = hit.material().expect("scene attaches materials");
        assert!(std::ptr::eq(material, near.as_ref()));
        assert!(scene.ray_intersection_t(&ray));

        let miss = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 1.0, 0.0), None, None);
        assert!(scene.ray_intersection(&miss).is_none());
        assert!(!scene.ray_intersection_t(&miss));
    }

    #[test]
    fn test_emitter_selection_is_area_proportional() {
        let mut scene = empty_scene();
        assert!(scene.select_emitter(0.5).is_none());

        let white = RGBSpectrum::new(1.0, 1.0, 1.0);
        // areas 1 and 3
        scene.add_emitter(AreaLight::new(Vector3f::zeros(), Vector3f::new(1.0, 0.0, 0.0),
                                         Vector3f::new(0.0, 0.0, 1.0), 1.0, white).into());
        scene.add_emitter(AreaLight::new(Vector3f::new(5.0, 0.0, 0.0), Vector3f::new(3.0, 0.0, 0.0),
                                         Vector3f::new(0.0, 0.0, 1.0), 1.0, white).into());
        scene.add_emitter(PointLight::new(Vector3f::zeros(), 0.0, 1.0, white).into());
        assert!((scene.sum_surface_area() - 4.0).abs() < 1e-5);

        let (_, p_small) = scene.select_emitter(0.1).expect("emitters present");
        let (_, p_large) = scene.select_emitter(0.9).expect("emitters present");
        assert!((p_small - 0.25).abs() < 1e-5);
        assert!((p_large - 0.75).abs() < 1e-5);
        assert!(scene.select_emitter(1.0).is_some());

        let mut rng = LcgRng::new(12);
        let mut on_large = 0;
        let count = 4000;
        for _ in 0..count {
            let rec = scene.sample_emitter(&mut rng).expect("emitters present");
            assert!((rec.pdf - 0.25).abs() < 1e-6);
            if rec.p.x >= 5.0 {
                on_large += 1;
            }
        }
        let fraction = on_large as Float / count as Float;
        assert!((fraction - 0.75).abs() < 0.03);
    }

    #[test]
    fn test_quad_and_sphere_share_scene() {
        let mut scene = empty_scene();
        let m = diffuse(RGBSpectrum::new(0.5, 0.5, 0.5));
        scene.add_object(SceneObject::new(
            Quad::new(Vector3f::new(-5.0, -1.0, -5.0), Vector3f::new(10.0, 0.0, 0.0), Vector3f::new(0.0, 0.0, 10.0)).into(),
            m.clone()).with_name(String::from("floor")));
        scene.add_object(SceneObject::new(Sphere::new(Vector3f::zeros(), 0.5).into(), m));
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.objects()[0].name.as_deref(), Some("floor"));

        let down = Ray3f::new(Vector3f::new(2.0, 3.0, 0.0), Vector3f::new(0.0, -1.0, 0.0), None, None);
        let hit = scene.ray_intersection(&down).expect("floor below");
        assert!((hit.p().y + 1.0).abs() < 1e-5);
        assert!(hit.normal().y > 0.0);
    }
}
