// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f, RAY_EPSILON};

/// A ray segment `origin + t * dir` for `t` in `[min_t, max_t]`.
///
/// The direction is kept as given; callers normalize when they need `t` to
/// be a distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray3f {
    origin: Vector3f,
    dir: Vector3f,
    pub min_t: Float,
    pub max_t: Float
}

impl Ray3f {
    pub fn new(o: Vector3f, d: Vector3f,
               min_t: Option<Float>, max_t: Option<Float>) -> Self {
        Self { origin: o, dir: d,
               min_t: min_t.unwrap_or(RAY_EPSILON),
               max_t: max_t.unwrap_or(Float::INFINITY)}
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn dir(&self) -> Vector3f {
        self.dir
    }

    pub fn at(&self, t: Float) -> Vector3f {
        self.origin + self.dir * t
    }

    pub fn test_segment(&self, t: Float) -> bool {
        t >= self.min_t && t <= self.max_t
    }
}

/* Tests for Ray */

#[cfg(test)]
mod tests {
    use super::Vector3f;
    use super::{Ray3f, RAY_EPSILON};

    #[test]
    fn test_ray3f() {
        let o = Vector3f::new(0.0, 0.0, 0.0);
        let d = Vector3f::new(1.0, 0.0, 1.0);
        let ray = Ray3f::new(o, d, None, None);
        assert_eq!(o, ray.origin());
        assert_eq!(d, ray.dir());

        let v1 = ray.at(2.0);
        assert!((v1[0] - 2.0).abs() < 1e-6);
        assert!((v1[1] - 0.0).abs() < 1e-6);
        assert!((v1[2] - 2.0).abs() < 1e-6);

        assert_eq!(ray.min_t, RAY_EPSILON);
        assert!(ray.max_t.is_infinite());
    }

    #[test]
    fn test_segment_bounds() {
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 1.0, 0.0), Some(0.5), Some(10.0));
        assert!(!ray.test_segment(0.25));
        assert!(ray.test_segment(0.5));
        assert!(ray.test_segment(10.0));
        assert!(!ray.test_segment(10.5));
    }
}
