/* Copyright 2020 @TwoCookingMice */

use crate::math::bitmap::Bitmap;

use exr::prelude::*;

// Write the linear buffer as a 32-bit float RGB EXR
pub fn write_exr_to_file(image: &Bitmap, file_path: &str) -> exr::error::Result<()> {
    log::info!("Starting writing openexr images: {}.", file_path);

    let width = image.width();
    let pixels = image.pixels();
    write_rgb_file(file_path, width, image.height(), |x, y| {
        let p = pixels[y * width + x];
        (p.x, p.y, p.z)
    })?;

    log::info!("EXR written to: {}.", file_path);
    Ok(())
}
