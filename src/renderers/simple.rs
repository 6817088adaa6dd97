// Copyright @yucwang 2021

use crate::core::integrator::Integrator;
use crate::core::rng::LcgRng;
use crate::core::scene::Scene;
use crate::math::bitmap::Bitmap;
use crate::math::constants::Float;
use crate::math::spectrum::black;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};

pub use super::renderer::{RenderSettings, Renderer};

/// Scanline-order renderer on the calling thread.
pub struct SimpleRenderer {
    settings: RenderSettings,
}

impl SimpleRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        assert!(settings.width > 0 && settings.height > 0, "image size must be positive");
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    fn progress_bar(&self) -> Option<ProgressBar> {
        if !self.settings.show_progress {
            return None;
        }
        let progress = ProgressBar::new(self.settings.height as u64);
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} scanlines")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Some(progress)
    }

    // Mean of `sample_count` paths per pixel. `batch` selects the RNG streams.
    fn render_batch(&self, scene: &Scene, integrator: &dyn Integrator,
                    sample_count: u32, batch: u32) -> Bitmap {
        let width = self.settings.width;
        let height = self.settings.height;
        let mut bitmap = Bitmap::new(width, height);
        if sample_count == 0 {
            return bitmap;
        }
        let inv_spp = 1.0 / (sample_count as Float);
        let camera = scene.camera();
        let progress = self.progress_bar();

        for y in 0..height {
            for x in 0..width {
                let mut rng = LcgRng::for_pixel(self.settings.seed, batch, x, y);
                let mut color = black();
                for _sample in 0..sample_count {
                    let ray = camera.generate_ray(x, y, width, height, &mut rng);
                    color += integrator.li(scene, &ray, &mut rng);
                }
                bitmap[(x, y)] = color * inv_spp;
            }
            if let Some(progress) = &progress {
                progress.inc(1);
            }
        }

        if let Some(progress) = progress {
            progress.finish_and_clear();
        }
        bitmap
    }
}

impl Renderer for SimpleRenderer {
    fn render_full(&self, scene: &Scene, integrator: &dyn Integrator, sample_count: u32) -> Bitmap {
        info!("rendering {}x{} at {} spp", self.settings.width, self.settings.height, sample_count);
        let bitmap = self.render_batch(scene, integrator, sample_count, 0);
        info!("render finished");
        bitmap
    }

    fn render_progressive_step(&self,
                               accumulated: &mut Bitmap,
                               scene: &Scene,
                               integrator: &dyn Integrator,
                               samples_this_step: u32,
                               samples_so_far: u32) {
        debug!("progressive batch: {} new samples on top of {}", samples_this_step, samples_so_far);
        let batch = self.render_batch(scene, integrator, samples_this_step, samples_so_far);
        accumulated.blend(samples_so_far, &batch, samples_this_step);
    }
}
