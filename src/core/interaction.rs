// Copyright @yucwang 2023

use crate::materials::Material;
use crate::math::constants::{ Float, Vector2f, Vector3f };
use crate::math::frame::Frame;
use std::sync::Arc;

/// Result of a successful ray/shape query. The shading normal always faces
/// the incoming ray; `normal_inverted` records whether it had to be flipped.
#[derive(Clone)]
pub struct SurfaceIntersection {
    p: Vector3f,
    frame: Frame,
    uv: Vector2f,
    t: Float,
    normal_inverted: bool,
    material: Option<Arc<Material>>,
}

/// A point drawn uniformly on a shape's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSampleRecord {
    pub p: Vector3f,
    pub normal: Vector3f,
    pub pdf: Float,
}

impl SurfaceIntersection {
    pub fn new(new_p: Vector3f,
               new_frame: Frame,
               new_uv: Vector2f,
               new_t: Float,
               new_normal_inverted: bool) -> Self {
        Self { p: new_p, frame: new_frame, uv: new_uv, t: new_t,
               normal_inverted: new_normal_inverted, material: None }
    }

    pub fn t(&self) -> Float {
        self.t
    }

    pub fn p(&self) -> Vector3f {
        self.p
    }

    pub fn uv(&self) -> Vector2f {
        self.uv
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn normal(&self) -> Vector3f {
        self.frame.z
    }

    pub fn tangent(&self) -> Vector3f {
        self.frame.x
    }

    pub fn binormal(&self) -> Vector3f {
        self.frame.y
    }

    pub fn normal_inverted(&self) -> bool {
        self.normal_inverted
    }

    pub fn material(&self) -> Option<&Material> {
        self.material.as_deref()
    }

    pub fn with_material(self, new_material: Arc<Material>) -> Self {
        Self { material: Some(new_material), ..self }
    }
}

impl SurfaceSampleRecord {
    pub fn new(new_p: Vector3f, new_normal: Vector3f, new_pdf: Float) -> Self {
        Self { p: new_p, normal: new_normal, pdf: new_pdf }
    }
}
