use glam::DVec3;
use log::debug;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::lights::PointLight;
use crate::util::{is_near_zero, unit};

/// A rectangular emitter approximated by a grid of point lights.
///
/// The patch is centered on `center`, faces along `normal`, and spans
/// `width` by `height`. Lights are placed every `h_spacing` across and every
/// `v_spacing` up, edges included, and share the patch color evenly.
#[derive(Debug, Clone)]
pub struct AreaLight {
    color: Color,
    center: DVec3,
    normal: DVec3,
    u_hat: DVec3,
    v_hat: DVec3,
    h_spacing: f64,
    v_spacing: f64,
    width: f64,
    height: f64,
}

impl AreaLight {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        color: Color,
        center: DVec3,
        normal: DVec3,
        up: DVec3,
        h_spacing: f64,
        v_spacing: f64,
        width: f64,
        height: f64,
    ) -> Result<AreaLight> {
        let normal = unit(normal, "area light normal").map_err(Error::InvalidLight)?;

        if !(h_spacing > 0.0) || !(v_spacing > 0.0) {
            return Err(Error::InvalidLight(format!(
                "area light spacing must be positive, got {} x {}",
                h_spacing, v_spacing
            )));
        }
        if !(h_spacing < width) || !(v_spacing < height) || !width.is_finite() || !height.is_finite() {
            return Err(Error::InvalidLight(format!(
                "area light spacing {} x {} must be smaller than its size {} x {}",
                h_spacing, v_spacing, width, height
            )));
        }

        let u_hat = up.cross(normal);
        if is_near_zero(u_hat) {
            return Err(Error::InvalidLight(format!("area light up {} is parallel to its normal {}", up, normal)));
        }
        let u_hat = u_hat.normalize();
        let v_hat = normal.cross(u_hat).normalize();

        return Ok(AreaLight { color, center, normal, u_hat, v_hat, h_spacing, v_spacing, width, height });
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn center(&self) -> DVec3 {
        self.center
    }

    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// In-plane basis `(u_hat, v_hat)`, orthonormal and perpendicular to the normal.
    pub fn basis(&self) -> (DVec3, DVec3) {
        (self.u_hat, self.v_hat)
    }

    /// Expand into point lights. The color is divided by the number of lights
    /// actually placed, so the grid as a whole emits the patch color.
    pub fn lights(&self) -> Vec<PointLight> {
        let rows = steps(self.height, self.v_spacing);
        let cols = steps(self.width, self.h_spacing);

        let mut positions = Vec::with_capacity(rows.len() * cols.len());
        for &u in &rows {
            for &v in &cols {
                positions.push(self.u_hat * u + self.v_hat * v + self.center);
            }
        }

        let color = self.color / positions.len() as f64;
        debug!("area light at {} expanded into {} point lights", self.center, positions.len());

        return positions.into_iter().map(|p| PointLight::new(color, p)).collect();
    }
}

/// Offsets `-extent/2, -extent/2 + spacing, ...` up to and including `extent/2`.
fn steps(extent: f64, spacing: f64) -> Vec<f64> {
    let half = extent / 2.0;
    let mut out = Vec::new();
    let mut i = 0;
    loop {
        let x = -half + spacing * i as f64;
        if x > half {
            break;
        }
        out.push(x);
        i += 1;
    }
    return out;
}
