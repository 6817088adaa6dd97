// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f};

/// Source of uniform numbers in [0, 1) consumed by camera jitter, BSDF
/// sampling and light selection.
pub trait Sampler {
    fn next_1d(&mut self) -> Float;

    fn next_2d(&mut self) -> Vector2f {
        let u = self.next_1d();
        let v = self.next_1d();
        Vector2f::new(u, v)
    }
}

pub struct LcgRng {
    state: u64,
}

impl LcgRng {
    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: seed };
        // decorrelate neighbouring seeds
        rng.next_u32();
        rng
    }

    /// Stream for one pixel of one sample batch.
    pub fn for_pixel(seed: u64, batch: u32, x: usize, y: usize) -> Self {
        let mut key = splitmix64(seed);
        key = splitmix64(key ^ batch as u64);
        key = splitmix64(key ^ y as u64);
        Self::new(splitmix64(key ^ x as u64))
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }

    pub fn next_f32(&mut self) -> Float {
        // 24 high bits keep the result strictly below one
        ((self.next_u32() >> 8) as Float) * (1.0 / 16777216.0)
    }
}

impl Sampler for LcgRng {
    fn next_1d(&mut self) -> Float {
        self.next_f32()
    }
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E3779B97F4A7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_in_unit_interval() {
        let mut rng = LcgRng::new(42);
        for _ in 0..10000 {
            let v = rng.next_1d();
            assert!(v >= 0.0 && v < 1.0);
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = LcgRng::for_pixel(1, 0, 3, 4);
        let mut b = LcgRng::for_pixel(1, 0, 3, 4);
        for _ in 0..16 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_batches_use_different_streams() {
        let mut a = LcgRng::for_pixel(1, 0, 3, 4);
        let mut b = LcgRng::for_pixel(1, 1, 3, 4);
        let same = (0..16).filter(|_| a.next_u32() == b.next_u32()).count();
        assert!(same < 2);
    }

    fn first_values(mut rng: LcgRng) -> Vec<u32> {
        (0..8).map(|_| rng.next_u32()).collect()
    }

    #[test]
    fn test_whole_seed_selects_the_stream() {
        assert_ne!(first_values(LcgRng::for_pixel(0, 0, 5, 5)), first_values(LcgRng::for_pixel(4096, 0, 5, 5)));
        assert_ne!(first_values(LcgRng::for_pixel(1, 0, 5, 5)), first_values(LcgRng::for_pixel(1 << 40, 0, 5, 5)));
    }

    #[test]
    fn test_wide_images_keep_distinct_pixel_streams() {
        assert_ne!(first_values(LcgRng::for_pixel(3, 0, 0, 0)), first_values(LcgRng::for_pixel(3, 0, 65536, 0)));
        assert_ne!(first_values(LcgRng::for_pixel(3, 0, 7, 0)), first_values(LcgRng::for_pixel(3, 0, 7, 65536)));
        // swapped coordinates hash differently
        assert_ne!(first_values(LcgRng::for_pixel(3, 0, 1, 2)), first_values(LcgRng::for_pixel(3, 0, 2, 1)));
    }

    #[test]
    fn test_mean_is_one_half() {
        let mut rng = LcgRng::new(9);
        let n = 50000;
        let mean: Float = (0..n).map(|_| rng.next_1d()).sum::<Float>() / n as Float;
        assert!((mean - 0.5).abs() < 0.01);
    }
}
