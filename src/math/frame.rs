// Copyright @yucwang 2023

use crate::math::constants::{ Float, Vector3f };

const PARALLEL_EPSILON: Float = 1e-6;

/// Orthonormal shading basis. `z` is the shading normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: Vector3f,
    pub y: Vector3f,
    pub z: Vector3f
}

impl Default for Frame {
    fn default() -> Self {
        Frame {
            x: Vector3f::new(1.0, 0.0, 0.0),
            y: Vector3f::new(0.0, 1.0, 0.0),
            z: Vector3f::new(0.0, 0.0, 1.0)
        }
    }
}

impl Frame {
    pub fn new(new_x: Vector3f, new_y: Vector3f, new_z: Vector3f) -> Frame {
        Frame {
            x: new_x,
            y: new_y,
            z: new_z
        }
    }

    /// Tangent from `normal x up`, binormal from `tangent x normal`. The up
    /// hint is world up, swapped for +z when the normal is (nearly) parallel.
    pub fn from_normal(normal: Vector3f) -> Frame {
        let mut up = Vector3f::new(0.0, 1.0, 0.0);
        if 1.0 - normal.dot(&up).abs() < PARALLEL_EPSILON {
            up = Vector3f::new(0.0, 0.0, 1.0);
        }
        let tangent = normal.cross(&up).normalize();
        let binormal = tangent.cross(&normal).normalize();
        Frame::new(tangent, binormal, normal)
    }

    /// Frame with a fixed tangent direction, e.g. a quad edge.
    pub fn from_xz(new_x: Vector3f, new_z: Vector3f) -> Frame {
        Frame {
            x: new_x,
            y: new_z.cross(&new_x),
            z: new_z
        }
    }

    pub fn normal(&self) -> Vector3f {
        self.z
    }

    pub fn to_local(&self, v: &Vector3f) -> Vector3f {
        Vector3f::new(v.dot(&self.x), v.dot(&self.y), v.dot(&self.z))
    }

    pub fn from_local(&self, v: &Vector3f) -> Vector3f {
        v.x * self.x + v.y * self.y + v.z * self.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_orthonormal(f: &Frame) {
        assert!((f.x.norm() - 1.0).abs() < 1e-5);
        assert!((f.y.norm() - 1.0).abs() < 1e-5);
        assert!((f.z.norm() - 1.0).abs() < 1e-5);
        assert!(f.x.dot(&f.y).abs() < 1e-5);
        assert!(f.x.dot(&f.z).abs() < 1e-5);
        assert!(f.y.dot(&f.z).abs() < 1e-5);
    }

    #[test]
    fn test_from_normal_is_orthonormal() {
        let normals = [
            Vector3f::new(0.0, 1.0, 0.0),
            Vector3f::new(0.0, -1.0, 0.0),
            Vector3f::new(1.0, 2.0, -3.0).normalize(),
        ];
        for n in normals.iter() {
            assert_orthonormal(&Frame::from_normal(*n));
        }
    }

    #[test]
    fn test_local_round_trip() {
        let f = Frame::from_normal(Vector3f::new(0.3, -0.4, 0.5).normalize());
        let v = Vector3f::new(0.2, 0.9, -0.1);
        let back = f.from_local(&f.to_local(&v));
        assert!((back - v).norm() < 1e-5);
        assert!((f.to_local(&f.normal()) - Vector3f::new(0.0, 0.0, 1.0)).norm() < 1e-5);
    }
}
