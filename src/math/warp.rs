// Copyright @yucwang 2023

use super::constants::{ INV_PI, PI, Float, Vector2f, Vector3f };

/// Cosine-weighted direction around +z: `cos(theta) = sqrt(u.x)`.
pub fn sample_cosine_hemisphere(u: &Vector2f) -> Vector3f {
    let cos_theta = u.x.sqrt();
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
    let phi = 2.0 * PI * u.y;

    Vector3f::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta)
}

pub fn sample_cosine_hemisphere_pdf(cos_theta: Float) -> Float {
    if cos_theta <= 0.0 {
        0.0
    } else {
        cos_theta * INV_PI
    }
}

pub fn sample_uniform_sphere(u: &Vector2f) -> Vector3f {
    let z = 1.0 - 2.0 * u.x;
    let r = (1.0 - z * z).max(0.0).sqrt();
    let phi = 2.0 * PI * u.y;

    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

/// GGX half-vector around +z via the inverse CDF of `D(h) cos(theta_h)`.
pub fn sample_ggx_half_vector(u: &Vector2f, alpha: Float) -> Vector3f {
    let a2 = alpha * alpha;
    let cos_theta = ((1.0 - u.x) / (u.x * (a2 - 1.0) + 1.0)).max(0.0).sqrt();
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
    let phi = 2.0 * PI * u.y;

    Vector3f::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta)
}
