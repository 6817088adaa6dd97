// Copyright @yucwang 2021

use crate::core::integrator::Integrator;
use crate::core::scene::Scene;
use crate::math::bitmap::Bitmap;

/// Image size and sampling controls shared by every renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self { width: 256, height: 256, seed: 0, show_progress: false }
    }
}

pub trait Renderer {
    /// Fresh image where every pixel averages `sample_count` paths.
    fn render_full(&self, scene: &Scene, integrator: &dyn Integrator, sample_count: u32) -> Bitmap;

    /// Renders one batch and folds it into the caller-owned `accumulated`
    /// buffer, which already holds the mean of `samples_so_far` samples.
    fn render_progressive_step(&self,
                               accumulated: &mut Bitmap,
                               scene: &Scene,
                               integrator: &dyn Integrator,
                               samples_this_step: u32,
                               samples_so_far: u32);
}
