use std::io::Write;

use crate::error::Result;

/// An 8-bit RGB raster, stored row-major from the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

impl Image {
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> Image {
        assert_eq!(pixels.len(), width as usize * height as usize);
        Image { width, height, pixels }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Plain-text PPM: a one-line `P3` header, then one `r g b` line per pixel.
    pub fn write_ppm<W: Write>(&self, w: &mut W) -> Result<()> {
        writeln!(w, "P3 {} {} 255", self.width, self.height)?;
        for [r, g, b] in &self.pixels {
            writeln!(w, "{} {} {}", r, g, b)?;
        }
        w.flush()?;
        Ok(())
    }
}
