use std::f64::consts::PI;

use glam::DVec3;

use crate::error::{Error, Result};
use crate::ray::Ray;
use crate::util::{is_near_zero, unit};

pub const DEFAULT_FOV: f64 = PI / 3.0;

/// A pinhole camera. The image plane sits `dist` in front of the eye and is
/// one unit tall, so `fov` is the vertical field of view.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: DVec3,
    dir: DVec3,
    up: DVec3,
    right: DVec3,
    dist: f64,
}

impl Camera {
    pub fn new(position: DVec3, look_at: DVec3, up: DVec3, fov: f64) -> Result<Camera> {
        if !(fov > 0.0 && fov < PI) {
            return Err(Error::InvalidCamera(format!("field of view must be within (0, pi), got {}", fov)));
        }
        let dir = unit(look_at - position, "view direction").map_err(Error::InvalidCamera)?;

        let right = dir.cross(up);
        if is_near_zero(right) {
            return Err(Error::InvalidCamera(format!("up {} is parallel to the view direction {}", up, dir)));
        }
        let right = right.normalize();
        let up = right.cross(dir).normalize();

        let dist = 0.5 / (fov * 0.5).tan();

        return Ok(Camera { position, dir, up, right, dist });
    }

    pub fn looking_at(position: DVec3, look_at: DVec3, up: DVec3) -> Result<Camera> {
        Camera::new(position, look_at, up, DEFAULT_FOV)
    }

    pub fn direction(&self) -> DVec3 {
        self.dir
    }

    /// Primary ray through pixel `(x, y)`, `(0, 0)` being the top-left corner.
    pub fn ray_for_pixel(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        debug_assert!(width >= 2 && height >= 2);
        debug_assert!(x < width && y < height);

        let (x, y, w, h) = (x as f64, y as f64, width as f64, height as f64);
        let center_x = w / h / 2.0;

        let pixel_dir = self.dist * self.dir + (0.5 - y / (h - 1.0)) * self.up + (x / (h - 1.0) - center_x) * self.right;

        return Ray::new(self.position, pixel_dir);
    }
}
