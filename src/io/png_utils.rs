// Copyright @yucwang 2026

use crate::math::bitmap::{Bitmap, DISPLAY_GAMMA};

/// Gamma-map the buffer and save it as an 8-bit RGBA PNG.
pub fn write_png_to_file(image: &Bitmap, file_path: &str) -> image::ImageResult<()> {
    log::info!("Starting writing png image: {}.", file_path);
    let rgba = image.to_rgba8(DISPLAY_GAMMA);
    image::save_buffer(file_path, &rgba, image.width() as u32, image.height() as u32,
                       image::ColorType::Rgba8)?;
    log::info!("PNG written to: {}.", file_path);
    Ok(())
}
