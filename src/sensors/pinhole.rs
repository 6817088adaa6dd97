// Copyright @yucwang 2026

use crate::core::rng::Sampler;
use crate::core::sensor::Sensor;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;

pub const DEFAULT_SENSOR_SIZE: Float = 0.036;

// forward within this of +-up counts as parallel
const PARALLEL_EPSILON: Float = 1e-6;

pub struct PinholeCamera {
    position: Vector3f,
    forward: Vector3f,
    right: Vector3f,
    up: Vector3f,
    focal_length: Float,
    sensor_size: Float,
}

impl PinholeCamera {
    pub fn new(position: Vector3f,
               forward: Vector3f,
               up: Option<Vector3f>,
               focal_length: Float,
               sensor_size: Option<Float>) -> Self {
        let forward = forward.normalize();
        let mut up_hint = up.unwrap_or_else(|| Vector3f::new(0.0, 1.0, 0.0)).normalize();
        if 1.0 - forward.dot(&up_hint).abs() < PARALLEL_EPSILON {
            up_hint = Vector3f::new(0.0, 0.0, 1.0);
        }
        let right = forward.cross(&up_hint).normalize();
        let up = right.cross(&forward).normalize();

        Self {
            position,
            forward,
            right,
            up,
            focal_length,
            sensor_size: sensor_size.unwrap_or(DEFAULT_SENSOR_SIZE),
        }
    }

    pub fn position(&self) -> Vector3f {
        self.position
    }

    pub fn forward(&self) -> Vector3f {
        self.forward
    }
}

impl Sensor for PinholeCamera {
    fn generate_ray(&self, x: usize, y: usize, width: usize, height: usize,
                    sampler: &mut dyn Sampler) -> Ray3f {
        let aspect = width as Float / height as Float;
        let sensor_x = self.sensor_size * aspect;
        let sensor_y = self.sensor_size;
        let dx = sensor_x / width as Float;
        let dy = sensor_y / height as Float;

        let center = self.position + self.forward * self.focal_length;
        let top_left = center - self.right * (sensor_x * 0.5) + self.up * (sensor_y * 0.5);
        let pixel = top_left + self.right * (x as Float * dx) - self.up * (y as Float * dy);

        let u = sampler.next_2d();
        let target = pixel + self.right * (dx * u.x) - self.up * (dy * u.y);

        Ray3f::new(self.position, (target - self.position).normalize(), None, None)
    }
}
