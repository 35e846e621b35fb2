use std::time::Instant;

use glam::DVec3;
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::camera::Camera;
use crate::color::{to_rgb8, Color, BLACK};
use crate::image::Image;
use crate::lights::{AreaLight, Light, PointLight, SpotLight};
use crate::ray::Ray;
use crate::surface::Shape;

/// Knobs for [`Scene::trace_ray`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Cast shadow rays toward each light.
    pub shadows: bool,
    /// Deepest reflection bounce followed.
    pub max_reflect: u32,
    /// How far shadow rays start off the surface, along its normal.
    pub shadow_bias: f64,
    /// How far reflected rays start off the surface, along their direction.
    pub reflect_bias: f64,
    /// Returned for rays that hit nothing.
    pub background: Color,
}

impl Default for RenderSettings {
    fn default() -> RenderSettings {
        RenderSettings { shadows: false, max_reflect: 10, shadow_bias: 1e-5, reflect_bias: 1e-4, background: BLACK }
    }
}

/// Shapes and lights to render. Filled once through the `add_*` methods, then
/// only read while tracing.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub settings: RenderSettings,
    shapes: Vec<Shape>,
    lights: Vec<Light>,
}

impl Scene {
    pub fn new(settings: RenderSettings) -> Scene {
        Scene { settings, shapes: Vec::new(), lights: Vec::new() }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn add_shape(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    pub fn add_point_light(&mut self, light: PointLight) {
        self.lights.push(Light::Point(light));
    }

    pub fn add_spot_light(&mut self, light: SpotLight) {
        self.lights.push(Light::Spot(light));
    }

    /// Adds the point lights the patch expands into; the patch itself is not kept.
    pub fn add_area_light(&mut self, light: &AreaLight) {
        for l in light.lights() {
            self.add_point_light(l);
        }
    }

    /// The shape `r` hits first and the time of the hit. Hits at `t <= 0`
    /// do not count; on a tie the shape added first wins.
    pub fn find_closest_shape(&self, r: &Ray) -> Option<(&Shape, f64)> {
        let mut result = None;
        let mut t_nearest = f64::INFINITY;

        for shape in &self.shapes {
            if let Some(t) = shape.intersection(r) {
                if t > 0.0 && t < t_nearest {
                    t_nearest = t;
                    result = Some((shape, t));
                }
            }
        }

        return result;
    }

    /// Color seen along `r`, `depth` being the number of reflections already
    /// followed. The result is not clamped.
    pub fn trace_ray(&self, r: &Ray, depth: u32) -> Color {
        let Some((shape, t)) = self.find_closest_shape(r) else {
            return self.settings.background;
        };

        let point = r.at(t);
        let normal = shape.surface_normal(point);
        let surface = shape.surface();

        let mut color = Color::ZERO;

        for light in &self.lights {
            if !light.illuminates(point) {
                continue;
            }

            let to_light = (light.position() - point).normalize_or_zero();

            if self.settings.shadows && self.in_shadow(point, normal, to_light) {
                continue;
            }

            let l_dot_n = to_light.dot(normal);
            if l_dot_n > 0.0 {
                color += light.color() * surface.color * l_dot_n;
            }
        }

        if surface.reflectivity > 0.0 && depth < self.settings.max_reflect {
            let reflected = r.reflect(point, normal, self.settings.reflect_bias);
            color += surface.reflectivity * self.trace_ray(&reflected, depth + 1);
        }

        return color;
    }

    fn in_shadow(&self, point: DVec3, normal: DVec3, to_light: DVec3) -> bool {
        let shadow_ray = Ray::new(point + normal * self.settings.shadow_bias, to_light);
        return self.find_closest_shape(&shadow_ray).is_some();
    }

    /// Render `width` x `height` pixels through `camera`. Rows are traced in
    /// parallel; the image is laid out top to bottom, left to right.
    pub fn render_image(&self, camera: &Camera, width: u32, height: u32) -> Image {
        if self.lights.is_empty() {
            warn!("scene has no lights; only reflections of the background will show");
        }
        info!(
            "rendering {}x{} with {} shapes, {} lights, shadows {}",
            width,
            height,
            self.shapes.len(),
            self.lights.len(),
            if self.settings.shadows { "on" } else { "off" }
        );

        let start = Instant::now();

        let pixels: Vec<[u8; 3]> = (0..height)
            .into_par_iter()
            .flat_map_iter(|y| {
                (0..width).map(move |x| {
                    let ray = camera.ray_for_pixel(x, y, width, height);
                    to_rgb8(self.trace_ray(&ray, 0))
                })
            })
            .collect();

        debug!("rendered {} pixels in {:.3?}", pixels.len(), start.elapsed());

        return Image::new(width, height, pixels);
    }
}
