use glam::DVec3;

use crate::error::{Error, Result};
use crate::ray::Ray;
use crate::shapes::Sphere;
use crate::surface::Surface;
use crate::util::{project, unit};

/// An open tube of `radius` around `axis` through `center`, cut to `height`
/// (half above the center, half below). The ends are not capped.
#[derive(Debug, Clone)]
pub struct Cylinder {
    pub surface: Surface,
    center: DVec3,
    radius: f64,
    axis: DVec3,
    height: f64,
}

impl Cylinder {
    pub fn new(surface: Surface, center: DVec3, radius: f64, axis: DVec3, height: f64) -> Result<Cylinder> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(Error::InvalidShape(format!("cylinder radius must be positive, got {}", radius)));
        }
        if !(height > 0.0) || !height.is_finite() {
            return Err(Error::InvalidShape(format!("cylinder height must be positive, got {}", height)));
        }
        let axis = unit(axis, "cylinder axis").map_err(Error::InvalidShape)?;
        return Ok(Cylinder { surface, center, radius, axis, height });
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn axis(&self) -> DVec3 {
        self.axis
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Split into the parts along and across the axis.
    fn split(&self, v: DVec3) -> (DVec3, DVec3) {
        let par = project(v, self.axis);
        (par, v - par)
    }

    pub fn intersection(&self, r: &Ray) -> Option<f64> {
        let (c_par, c_perp) = self.split(self.center);
        let (p_par, p_perp) = self.split(r.origin);
        let (d_par, d_perp) = self.split(r.direction);

        // Across the axis the tube is a circle; a sphere through that plane
        // cuts it in the same circle, and the flattened ray shares `t` with `r`.
        let circle = Sphere::new(self.surface, c_perp, self.radius).ok()?;
        let flat = Ray::new_unnormalized(p_perp, d_perp);

        let half_height_sq = self.height * self.height / 4.0;
        return circle
            .roots(&flat)
            .iter()
            .find(|t| (p_par + d_par * *t - c_par).length_squared() <= half_height_sq);
    }

    pub fn surface_normal(&self, point: DVec3) -> DVec3 {
        let v = point - self.center;
        (v - project(v, self.axis)).normalize_or_zero()
    }
}
