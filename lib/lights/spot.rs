use std::f64::consts::PI;

use glam::DVec3;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::util::{is_near_zero, unit};

/// A point light that only shines into a cone around `direction`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotLight {
    pub color: Color,
    position: DVec3,
    direction: DVec3,
    cone_angle: f64,
}

impl SpotLight {
    /// `cone_angle` is the half-angle of the cone in radians, within (0, pi].
    pub fn new(color: Color, position: DVec3, direction: DVec3, cone_angle: f64) -> Result<SpotLight> {
        let direction = unit(direction, "spot light direction").map_err(Error::InvalidLight)?;
        if !(cone_angle > 0.0 && cone_angle <= PI) {
            return Err(Error::InvalidLight(format!("cone angle must be within (0, pi], got {}", cone_angle)));
        }
        return Ok(SpotLight { color, position, direction, cone_angle });
    }

    /// A spot light at `position` pointing at `look_at`.
    pub fn aimed_at(color: Color, position: DVec3, look_at: DVec3, cone_angle: f64) -> Result<SpotLight> {
        if is_near_zero(look_at - position) {
            return Err(Error::InvalidLight(format!("spot light at {} cannot look at itself", position)));
        }
        return SpotLight::new(color, position, look_at - position, cone_angle);
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    pub fn cone_angle(&self) -> f64 {
        self.cone_angle
    }

    pub fn illuminates(&self, point: DVec3) -> bool {
        let to_point = (point - self.position).normalize_or_zero();
        let cos = self.direction.dot(to_point).clamp(-1.0, 1.0);
        return cos.acos() <= self.cone_angle;
    }
}
