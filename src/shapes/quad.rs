// Copyright @yucwang 2026

use crate::core::interaction::{SurfaceIntersection, SurfaceSampleRecord};
use crate::core::shape::Shape;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::frame::Frame;
use crate::math::ray::Ray3f;

const PARALLEL_EPSILON: Float = 1e-8;

/// Parallelogram spanned by the edges `u` and `v` from `origin`.
#[derive(Debug, Clone, PartialEq)]
pub struct Quad {
    origin: Vector3f,
    u: Vector3f,
    v: Vector3f,
    normal: Vector3f,
    // (u x v) / |u x v|^2, maps plane offsets to edge coordinates
    w: Vector3f,
    area: Float,
}

impl Quad {
    pub fn new(origin: Vector3f, u: Vector3f, v: Vector3f) -> Self {
        let n = u.cross(&v);
        let area = n.norm();
        let (normal, w) = if area > 0.0 {
            (n / area, n / (area * area))
        } else {
            (Vector3f::new(0.0, 0.0, 1.0), Vector3f::zeros())
        };

        Self { origin, u, v, normal, w, area }
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn u(&self) -> Vector3f {
        self.u
    }

    pub fn v(&self) -> Vector3f {
        self.v
    }

    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    // Ray parameter and edge coordinates (alpha, beta) in [0, 1]^2.
    fn intersect_local(&self, ray: &Ray3f) -> Option<(Float, Float, Float)> {
        let denom = self.normal.dot(&ray.dir());
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }

        let t = self.normal.dot(&(self.origin - ray.origin())) / denom;
        if !ray.test_segment(t) {
            return None;
        }

        let q = ray.at(t) - self.origin;
        let alpha = self.w.dot(&q.cross(&self.v));
        let beta = self.w.dot(&self.u.cross(&q));
        if alpha < 0.0 || alpha > 1.0 || beta < 0.0 || beta > 1.0 {
            return None;
        }

        Some((t, alpha, beta))
    }
}

impl Shape for Quad {
    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        if self.area <= 0.0 {
            return None;
        }
        let (t, alpha, beta) = self.intersect_local(ray)?;

        let mut normal = self.normal;
        let normal_inverted = normal.dot(&ray.dir()) > 0.0;
        if normal_inverted {
            normal = -normal;
        }

        let tangent = self.u.normalize();
        let uv = Vector2f::new(alpha * self.u.norm(), beta * self.v.norm());
        let frame = Frame::from_xz(tangent, normal);

        Some(SurfaceIntersection::new(ray.at(t), frame, uv, t, normal_inverted))
    }

    fn ray_intersection_t(&self, ray: &Ray3f) -> bool {
        self.area > 0.0 && self.intersect_local(ray).is_some()
    }

    fn sample(&self, u: &Vector2f) -> SurfaceSampleRecord {
        let p = self.origin + self.u * u.x + self.v * u.y;
        let pdf = if self.area > 0.0 { 1.0 / self.area } else { 0.0 };
        SurfaceSampleRecord::new(p, self.normal, pdf)
    }

    fn surface_area(&self) -> Float {
        self.area
    }
}
