// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f};

/// Linear RGB radiance/reflectance triple.
pub type RGBSpectrum = Vector3f;

pub fn black() -> RGBSpectrum {
    RGBSpectrum::zeros()
}

pub fn white() -> RGBSpectrum {
    RGBSpectrum::new(1.0, 1.0, 1.0)
}

pub fn is_black(s: &RGBSpectrum) -> bool {
    s.iter().all(|c| *c == 0.0)
}

pub fn luminance(s: &RGBSpectrum) -> Float {
    0.299 * s.x + 0.587 * s.y + 0.114 * s.z
}
