use glam::DVec3;

use crate::error::{Error, Result};
use crate::ray::Ray;
use crate::surface::Surface;
use crate::util::unit;

/// The plane `n . X + d = 0`.
#[derive(Debug, Clone)]
pub struct InfinitePlane {
    pub surface: Surface,
    distance: f64,
    normal: DVec3,
}

impl InfinitePlane {
    pub fn new(surface: Surface, distance: f64, normal: DVec3) -> Result<InfinitePlane> {
        let normal = unit(normal, "plane normal").map_err(Error::InvalidShape)?;
        if !distance.is_finite() {
            return Err(Error::InvalidShape(format!("plane distance must be finite, got {}", distance)));
        }
        return Ok(InfinitePlane { surface, distance, normal });
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    pub fn intersection(&self, r: &Ray) -> Option<f64> {
        let denom = r.direction.dot(self.normal);
        if denom == 0.0 {
            return None;
        }

        let t = -(r.origin.dot(self.normal) + self.distance) / denom;
        if t < 0.0 {
            return None;
        }
        return Some(t);
    }

    pub fn surface_normal(&self, _point: DVec3) -> DVec3 {
        self.normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn floor(distance: f64) -> InfinitePlane {
        InfinitePlane::new(Surface::matte(Color::ONE), distance, DVec3::Z).unwrap()
    }

    #[test]
    fn test_hit_straight_down() {
        let r = Ray::new(DVec3::new(0.0, 0.0, 5.0), -DVec3::Z);
        assert_eq!(floor(0.0).intersection(&r), Some(5.0));
    }

    #[test]
    fn test_offset_plane() {
        // n . X + d = 0 with d = 2 is the plane z = -2.
        let r = Ray::new(DVec3::new(0.0, 0.0, 5.0), -DVec3::Z);
        assert_eq!(floor(2.0).intersection(&r), Some(7.0));
    }

    #[test]
    fn test_oblique_hit() {
        let r = Ray::new(DVec3::new(0.0, 0.0, 1.0), DVec3::new(1.0, 0.0, -1.0));
        let t = floor(0.0).intersection(&r).unwrap();
        assert!(r.at(t).abs_diff_eq(DVec3::new(1.0, 0.0, 0.0), 1e-12));
    }

    #[test]
    fn test_parallel_ray_misses() {
        for dir in [DVec3::X, DVec3::Y, DVec3::new(1.0, -3.0, 0.0)] {
            let r = Ray::new(DVec3::new(0.0, 0.0, 5.0), dir);
            assert_eq!(floor(0.0).intersection(&r), None);
        }
    }

    #[test]
    fn test_plane_behind_ray() {
        let r = Ray::new(DVec3::new(0.0, 0.0, 5.0), DVec3::Z);
        assert_eq!(floor(0.0).intersection(&r), None);
    }

    #[test]
    fn test_normal_is_constant_and_unit() {
        let p = InfinitePlane::new(Surface::matte(Color::ONE), 0.0, DVec3::new(0.0, 0.0, 4.0)).unwrap();
        assert_eq!(p.surface_normal(DVec3::new(10.0, -3.0, 0.0)), DVec3::Z);
        assert_eq!(p.surface_normal(DVec3::ZERO), DVec3::Z);
    }

    #[test]
    fn test_zero_normal_rejected() {
        assert!(InfinitePlane::new(Surface::matte(Color::ONE), 0.0, DVec3::ZERO).is_err());
    }
}
