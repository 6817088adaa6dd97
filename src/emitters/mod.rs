// Copyright @yucwang 2026

pub mod area;
pub mod point;

pub use self::area::AreaLight;
pub use self::point::PointLight;

use crate::core::emitter::{Emitter, EmitterSampleRecord};
use crate::math::constants::{Float, Vector2f};

/// Light sources available for next-event estimation.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    Point(PointLight),
    Area(AreaLight),
}

impl Emitter for Light {
    fn surface_area(&self) -> Float {
        match self {
            Light::Point(l) => l.surface_area(),
            Light::Area(l) => l.surface_area(),
        }
    }

    fn sample_position(&self, u: &Vector2f) -> EmitterSampleRecord {
        match self {
            Light::Point(l) => l.sample_position(u),
            Light::Area(l) => l.sample_position(u),
        }
    }
}

impl From<PointLight> for Light {
    fn from(l: PointLight) -> Self {
        Light::Point(l)
    }
}

impl From<AreaLight> for Light {
    fn from(l: AreaLight) -> Self {
        Light::Area(l)
    }
}
