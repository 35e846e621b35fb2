use glam::DVec3;

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: Color,
    pub position: DVec3,
}

impl PointLight {
    pub fn new(color: Color, position: DVec3) -> PointLight {
        PointLight { color, position }
    }
}
