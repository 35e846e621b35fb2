use glam::DVec3;

use crate::color::Color;

mod area;
mod point;
mod spot;

pub use area::AreaLight;
pub use point::PointLight;
pub use spot::SpotLight;

/// A light as the scene stores it. Area lights never appear here; they are
/// expanded into point lights when added.
#[derive(Debug, Clone)]
pub enum Light {
    Point(PointLight),
    Spot(SpotLight),
}

impl Light {
    pub fn color(&self) -> Color {
        match self {
            Light::Point(l) => l.color,
            Light::Spot(l) => l.color,
        }
    }

    pub fn position(&self) -> DVec3 {
        match self {
            Light::Point(l) => l.position,
            Light::Spot(l) => l.position(),
        }
    }

    /// Whether `point` lies where the light can shine at all, ignoring
    /// anything in the way.
    pub fn illuminates(&self, point: DVec3) -> bool {
        match self {
            Light::Point(_) => true,
            Light::Spot(l) => l.illuminates(point),
        }
    }
}

impl From<PointLight> for Light {
    fn from(l: PointLight) -> Light {
        Light::Point(l)
    }
}

impl From<SpotLight> for Light {
    fn from(l: SpotLight) -> Light {
        Light::Spot(l)
    }
}
