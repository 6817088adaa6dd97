// Copyright @yucwang 2023

use super::constants::{Float, Vector3f};

const NORMALIZE_EPSILON: Float = 1e-12;

/// Normalize `v`, or `None` when it is too short to have a direction.
pub fn safe_normalize(v: &Vector3f) -> Option<Vector3f> {
    v.try_normalize(NORMALIZE_EPSILON)
}

/// Mirror `v` about `n`. Both point away from the surface.
pub fn reflect(v: &Vector3f, n: &Vector3f) -> Vector3f {
    2.0 * v.dot(n) * n - v
}

pub fn is_finite(v: &Vector3f) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}

/* Tests for vector helpers */
