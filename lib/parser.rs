//! Reader for the plain-text scene description.
//!
//! A description is a sequence of entities, each introduced by a keyword and
//! followed by its fields. Colors are written `(r, g, b)`, vectors
//! `<x, y, z>`, angles in radians:
//!
//! ```text
//! camera    position look_at up
//! sphere    color radius center reflectivity
//! plane     color distance normal reflectivity
//! cylinder  color radius center axis height reflectivity
//! light     color position
//! spotlight color position look_at cone_angle
//! arealight color center normal up h_spacing v_spacing width height
//! ```
//!
//! `#` starts a comment that runs to the end of the line, and `end` stops
//! reading. Exactly one camera is required; a later `camera` replaces an
//! earlier one.

use std::io::Read;
use std::iter::Peekable;
use std::str::Chars;

use glam::DVec3;
use log::debug;

use crate::camera::Camera;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::lights::{AreaLight, PointLight, SpotLight};
use crate::scene::{RenderSettings, Scene};
use crate::shapes::{Cylinder, InfinitePlane, Sphere};
use crate::surface::Surface;

/// A parsed description: what to render and where to look from.
#[derive(Debug, Clone)]
pub struct SceneFile {
    pub scene: Scene,
    pub camera: Camera,
}

impl SceneFile {
    pub fn parse(src: &str, settings: RenderSettings) -> Result<SceneFile> {
        Parser::new(src).scene_file(settings)
    }

    pub fn read<R: Read>(mut reader: R, settings: RenderSettings) -> Result<SceneFile> {
        let mut src = String::new();
        reader.read_to_string(&mut src)?;
        SceneFile::parse(&src, settings)
    }
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Parser<'a> {
        Parser { chars: src.chars().peekable(), line: 1 }
    }

    fn scene_file(&mut self, settings: RenderSettings) -> Result<SceneFile> {
        let mut scene = Scene::new(settings);
        let mut camera = None;

        while let Some(keyword) = self.word() {
            let line = self.line;
            match keyword.as_str() {
                "sphere" => {
                    let color = self.color()?;
                    let radius = self.number()?;
                    let center = self.vector()?;
                    let surface = self.surface(color)?;
                    scene.add_shape(Sphere::new(surface, center, radius).map_err(|e| at(line, e))?);
                }
                "plane" => {
                    let color = self.color()?;
                    let distance = self.number()?;
                    let normal = self.vector()?;
                    let surface = self.surface(color)?;
                    scene.add_shape(InfinitePlane::new(surface, distance, normal).map_err(|e| at(line, e))?);
                }
                "cylinder" => {
                    let color = self.color()?;
                    let radius = self.number()?;
                    let center = self.vector()?;
                    let axis = self.vector()?;
                    let height = self.number()?;
                    let surface = self.surface(color)?;
                    let cylinder = Cylinder::new(surface, center, radius, axis, height).map_err(|e| at(line, e))?;
                    scene.add_shape(cylinder);
                }
                "light" => {
                    let color = self.color()?;
                    let position = self.vector()?;
                    scene.add_point_light(PointLight::new(color, position));
                }
                "spotlight" => {
                    let color = self.color()?;
                    let position = self.vector()?;
                    let look_at = self.vector()?;
                    let angle = self.number()?;
                    scene.add_spot_light(SpotLight::aimed_at(color, position, look_at, angle).map_err(|e| at(line, e))?);
                }
                "arealight" => {
                    let color = self.color()?;
                    let center = self.vector()?;
                    let normal = self.vector()?;
                    let up = self.vector()?;
                    let h_spacing = self.number()?;
                    let v_spacing = self.number()?;
                    let width = self.number()?;
                    let height = self.number()?;
                    let patch = AreaLight::new(color, center, normal, up, h_spacing, v_spacing, width, height)
                        .map_err(|e| at(line, e))?;
                    scene.add_area_light(&patch);
                }
                "camera" => {
                    let position = self.vector()?;
                    let look_at = self.vector()?;
                    let up = self.vector()?;
                    camera = Some(Camera::looking_at(position, look_at, up).map_err(|e| at(line, e))?);
                }
                "end" => break,
                other => return Err(self.error(format!("\"{}\" is not a recognized scene description type", other))),
            }
            debug!("line {}: read {}", line, keyword);
        }

        let camera = camera.ok_or_else(|| self.error("scene description has no camera".to_string()))?;
        return Ok(SceneFile { scene, camera });
    }

    fn surface(&mut self, color: Color) -> Result<Surface> {
        let reflectivity = self.number()?;
        let line = self.line;
        Surface::new(color, reflectivity).map_err(|e| at(line, e))
    }

    fn error(&self, message: String) -> Error {
        Error::Parse { line: self.line, message }
    }

    /// Skip whitespace and comments.
    fn skip_blank(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '#' {
                while let Some(c) = self.chars.next() {
                    if c == '\n' {
                        self.line += 1;
                        break;
                    }
                }
            } else if c.is_whitespace() {
                if c == '\n' {
                    self.line += 1;
                }
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn take_while(&mut self, f: impl Fn(char) -> bool) -> String {
        let mut out = String::new();
        while let Some(&c) = self.chars.peek() {
            if !f(c) {
                break;
            }
            out.push(c);
            self.chars.next();
        }
        out
    }

    fn word(&mut self) -> Option<String> {
        self.skip_blank();
        let w = self.take_while(|c| !c.is_whitespace() && c != '#');
        if w.is_empty() {
            None
        } else {
            Some(w)
        }
    }

    fn number(&mut self) -> Result<f64> {
        self.skip_blank();
        let text = self.take_while(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
        if text.is_empty() {
            return Err(match self.chars.peek().copied() {
                Some(c) => self.error(format!("expected a number, found '{}'", c)),
                None => self.error("expected a number, found end of input".to_string()),
            });
        }
        text.parse::<f64>().map_err(|_| self.error(format!("\"{}\" is not a number", text)))
    }

    fn expect(&mut self, want: char) -> Result<()> {
        self.skip_blank();
        match self.chars.next() {
            Some(c) if c == want => Ok(()),
            Some(c) => Err(self.error(format!("expected '{}', found '{}'", want, c))),
            None => Err(self.error(format!("expected '{}', found end of input", want))),
        }
    }

    fn triple(&mut self, open: char, close: char) -> Result<DVec3> {
        self.expect(open)?;
        let x = self.number()?;
        self.expect(',')?;
        let y = self.number()?;
        self.expect(',')?;
        let z = self.number()?;
        self.expect(close)?;
        Ok(DVec3::new(x, y, z))
    }

    fn color(&mut self) -> Result<Color> {
        self.triple('(', ')')
    }

    fn vector(&mut self) -> Result<DVec3> {
        self.triple('<', '>')
    }
}

/// Pin a construction error to the line of the entity that caused it.
fn at(line: usize, e: Error) -> Error {
    Error::Parse { line, message: e.to_string() }
}
