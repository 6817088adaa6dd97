// Copyright @yucwang 2026

use crate::core::texture::Texture;
use crate::math::constants::Vector2f;
use crate::math::spectrum::RGBSpectrum;

/// One color over the whole surface. Scenes use it for every material
/// parameter given as a plain `rgb` instead of a texture reference.
pub struct UniformColorTexture {
    color: RGBSpectrum,
}

impl UniformColorTexture {
    pub fn new(color: RGBSpectrum) -> Self {
        Self { color }
    }
}

impl Texture for UniformColorTexture {
    fn eval(&self, _uv: Vector2f) -> RGBSpectrum {
        self.color
    }
}
