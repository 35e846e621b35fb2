//! A Whitted-style ray tracer: spheres, infinite planes and cylinders lit by
//! point, spot and area lights, with hard shadows and mirror reflections.

pub mod camera;
pub mod color;
pub mod error;
pub mod image;
pub mod lights;
pub mod parser;
pub mod ray;
pub mod scene;
pub mod shapes;
pub mod surface;
pub mod util;

pub use error::{Error, Result};
