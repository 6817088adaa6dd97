// Copyright 2020 @TwoCookingMice

use super::constants::Float;
use super::spectrum::RGBSpectrum;

use std::ops;
use std::vec::Vec;

pub const DISPLAY_GAMMA: Float = 2.2;

/// Row-major buffer of linear RGB pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    data: Vec<RGBSpectrum>,
    height: usize,
    width: usize
}

impl ops::Index<(usize, usize)> for Bitmap {
    type Output = RGBSpectrum;

    fn index(&self, index: (usize, usize)) -> &RGBSpectrum {
        assert!(index.0 < self.width && index.1 < self.height);
        &self.data[index.0 + self.width * index.1]
    }
}

impl ops::IndexMut<(usize, usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut RGBSpectrum {
        assert!(index.0 < self.width && index.1 < self.height);
        &mut self.data[index.0 + self.width * index.1]
    }
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        let pixel_number = width * height;
        Self { data: vec!(RGBSpectrum::new(0.0, 0.0, 0.0);
                          pixel_number),
               width: width,
               height: height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[RGBSpectrum] {
        &self.data
    }

    /// Replace every pixel with the sample-count weighted mean of itself and
    /// `batch`: `(old * old_count + new * new_count) / (old_count + new_count)`.
    pub fn blend(&mut self, old_count: u32, batch: &Bitmap, new_count: u32) {
        assert_eq!(self.width, batch.width, "bitmap widths differ");
        assert_eq!(self.height, batch.height, "bitmap heights differ");
        let total = old_count + new_count;
        if total == 0 {
            return;
        }
        let w_old = old_count as Float / total as Float;
        let w_new = new_count as Float / total as Float;
        for (acc, new) in self.data.iter_mut().zip(batch.data.iter()) {
            *acc = *acc * w_old + new * w_new;
        }
    }

    /// Gamma-map, clamp to [0, 1] and quantize to 8-bit RGBA, row-major.
    pub fn to_rgba8(&self, gamma: Float) -> Vec<u8> {
        let inv_gamma = 1.0 / gamma;
        let mut out = Vec::with_capacity(self.data.len() * 4);
        for p in &self.data {
            for c in 0..3 {
                let v = p[c].max(0.0).powf(inv_gamma);
                let v = if v.is_finite() { v.min(1.0) } else { 0.0 };
                out.push((255.0 * v + 0.5) as u8);
            }
            out.push(255);
        }
        out
    }
}

/* Test for Bitmap */
