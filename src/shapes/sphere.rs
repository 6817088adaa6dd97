// Copyright @yucwang 2026

use crate::core::interaction::{SurfaceIntersection, SurfaceSampleRecord};
use crate::core::shape::Shape;
use crate::math::constants::{Float, Vector2f, Vector3f, PI};
use crate::math::frame::Frame;
use crate::math::ray::Ray3f;
use crate::math::warp::sample_uniform_sphere;

#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vector3f,
    radius: Float,
}

impl Sphere {
    pub fn new(center: Vector3f, radius: Float) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Vector3f {
        self.center
    }

    pub fn radius(&self) -> Float {
        self.radius
    }

    // Nearest root inside the ray segment. When only the far root is in
    // front of the origin, the origin is inside the sphere.
    fn intersect_t(&self, ray: &Ray3f) -> Option<Float> {
        let oc = ray.origin() - self.center;
        let d = ray.dir();
        let a = d.norm_squared();
        if a <= 0.0 {
            return None;
        }
        let b = 2.0 * oc.dot(&d);
        let c = oc.norm_squared() - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_disc = discriminant.sqrt();
        let t1 = (-b - sqrt_disc) / (2.0 * a);
        let t2 = (-b + sqrt_disc) / (2.0 * a);
        if t2 < ray.min_t {
            return None;
        }

        let t = if t1 >= ray.min_t { t1 } else { t2 };
        if t > ray.max_t {
            return None;
        }
        Some(t)
    }
}

impl Shape for Sphere {
    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        let t = self.intersect_t(ray)?;
        let p = ray.at(t);
        let local = p - self.center;

        let mut normal = local / self.radius;
        let normal_inverted = normal.dot(&ray.dir()) > 0.0;
        if normal_inverted {
            normal = -normal;
        }

        let cos_polar = (local.y / self.radius).max(-1.0).min(1.0);
        let uv = Vector2f::new(local.z.atan2(local.x), cos_polar.acos());

        Some(SurfaceIntersection::new(p, Frame::from_normal(normal), uv, t, normal_inverted))
    }

    fn ray_intersection_t(&self, ray: &Ray3f) -> bool {
        self.intersect_t(ray).is_some()
    }

    fn sample(&self, u: &Vector2f) -> SurfaceSampleRecord {
        let normal = sample_uniform_sphere(u);
        let p = self.center + normal * self.radius;
        let area = self.surface_area();
        let pdf = if area > 0.0 { 1.0 / area } else { 0.0 };
        SurfaceSampleRecord::new(p, normal, pdf)
    }

    fn surface_area(&self) -> Float {
        4.0 * PI * self.radius * self.radius
    }
}
