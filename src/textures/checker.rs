// Copyright @yucwang 2026

use crate::core::texture::Texture;
use crate::math::constants::{Float, Vector2f};
use crate::math::spectrum::RGBSpectrum;

/// Two-color checkerboard over uv, `scale` cells per unit.
pub struct CheckerTexture {
    color1: RGBSpectrum,
    color2: RGBSpectrum,
    scale: Float,
}

impl CheckerTexture {
    pub fn new(color1: RGBSpectrum, color2: RGBSpectrum, scale: Float) -> Self {
        Self { color1, color2, scale }
    }
}

fn frac(v: Float) -> Float {
    v - v.floor()
}

impl Texture for CheckerTexture {
    fn eval(&self, uv: Vector2f) -> RGBSpectrum {
        let in_u = frac(self.scale * uv.x) < 0.5;
        let in_v = frac(self.scale * uv.y) < 0.5;
        if in_u == in_v {
            self.color1
        } else {
            self.color2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checker_alternates() {
        let a = RGBSpectrum::new(1.0, 0.0, 0.0);
        let b = RGBSpectrum::new(0.0, 0.0, 1.0);
        let tex = CheckerTexture::new(a, b, 2.0);
        assert_eq!(tex.eval(Vector2f::new(0.1, 0.1)), a);
        assert_eq!(tex.eval(Vector2f::new(0.3, 0.1)), b);
        assert_eq!(tex.eval(Vector2f::new(0.3, 0.3)), a);
    }

    #[test]
    fn test_checker_handles_negative_coordinates() {
        let a = RGBSpectrum::new(1.0, 1.0, 1.0);
        let b = RGBSpectrum::new(0.0, 0.0, 0.0);
        let tex = CheckerTexture::new(a, b, 1.0);
        // frac(-0.25) = 0.75
        assert_eq!(tex.eval(Vector2f::new(-0.25, 0.1)), b);
        assert_eq!(tex.eval(Vector2f::new(-0.75, -0.75)), a);
    }
}
