// Copyright @yucwang 2023

pub mod quad;
pub mod sphere;

use crate::core::interaction::{SurfaceIntersection, SurfaceSampleRecord};
use crate::core::shape::Shape;
use crate::math::constants::{Float, Vector2f};
use crate::math::ray::Ray3f;

pub use self::quad::Quad;
pub use self::sphere::Sphere;

/// The closed set of intersectable primitives.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Sphere(Sphere),
    Quad(Quad),
}

impl Shape for Primitive {
    fn ray_intersection(&self, ray: &Ray3f) -> Option<SurfaceIntersection> {
        match self {
            Primitive::Sphere(s) => s.ray_intersection(ray),
            Primitive::Quad(q) => q.ray_intersection(ray),
        }
    }

    fn ray_intersection_t(&self, ray: &Ray3f) -> bool {
        match self {
            Primitive::Sphere(s) => s.ray_intersection_t(ray),
            Primitive::Quad(q) => q.ray_intersection_t(ray),
        }
    }

    fn sample(&self, u: &Vector2f) -> SurfaceSampleRecord {
        match self {
            Primitive::Sphere(s) => s.sample(u),
            Primitive::Quad(q) => q.sample(u),
        }
    }

    fn surface_area(&self) -> Float {
        match self {
            Primitive::Sphere(s) => s.surface_area(),
            Primitive::Quad(q) => q.surface_area(),
        }
    }
}

impl From<Sphere> for Primitive {
    fn from(s: Sphere) -> Self {
        Primitive::Sphere(s)
    }
}

impl From<Quad> for Primitive {
    fn from(q: Quad) -> Self {
        Primitive::Quad(q)
    }
}
