// Copyright @yucwang 2026

use crate::math::constants::{Float, PI};
use crate::math::spectrum::{white, RGBSpectrum};

pub const MIN_ALPHA: Float = 1e-4;
pub const DENOM_EPSILON: Float = 1e-6;

/// Roughness remapping shared by every microfacet lobe.
pub fn roughness_to_alpha(roughness: Float) -> Float {
    (roughness * roughness).max(MIN_ALPHA)
}

/// GGX / Trowbridge-Reitz normal distribution.
pub fn ggx_d(cos_theta_h: Float, alpha: Float) -> Float {
    if cos_theta_h <= 0.0 {
        return 0.0;
    }
    let a2 = alpha * alpha;
    let cos2 = cos_theta_h * cos_theta_h;
    let denom = cos2 * (a2 - 1.0) + 1.0;
    a2 / (PI * denom * denom)
}

/// Smith Lambda for GGX.
pub fn smith_lambda(cos_theta: Float, alpha: Float) -> Float {
    if cos_theta <= 0.0 {
        return Float::INFINITY;
    }
    let cos2 = (cos_theta * cos_theta).min(1.0);
    let tan2 = (1.0 - cos2) / cos2;
    (-1.0 + (1.0 + alpha * alpha * tan2).sqrt()) / 2.0
}

/// Height-correlated Smith masking-shadowing.
pub fn smith_g_height_correlated(cos_i: Float, cos_o: Float, alpha: Float) -> Float {
    let lambda_sum = smith_lambda(cos_i, alpha) + smith_lambda(cos_o, alpha);
    if !lambda_sum.is_finite() {
        return 0.0;
    }
    1.0 / (1.0 + lambda_sum)
}

pub fn fresnel_schlick(f0: RGBSpectrum, cos_theta: Float) -> RGBSpectrum {
    let cos_theta = cos_theta.max(0.0).min(1.0);
    let one_minus = (1.0 - cos_theta).powi(5);
    f0 + (white() - f0) * one_minus
}

pub fn fresnel_schlick_scalar(r0: Float, cos_theta: Float) -> Float {
    let cos_theta = cos_theta.max(0.0).min(1.0);
    r0 + (1.0 - r0) * (1.0 - cos_theta).powi(5)
}
