use crate::color::Rgb;
use crate::gradient::GradientSpec;

use super::projection::Projection;

/// Row-major pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Field {
    /// Evaluates `f` once per pixel, row by row.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgb) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self { width, height, pixels }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the field.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Mixes `color` into the pixel at `(x, y)` by `coverage / 255`.
    /// Points outside the field are ignored.
    pub fn blend(&mut self, x: u32, y: u32, color: Rgb, coverage: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = y as usize * self.width as usize + x as usize;
        if let Some(px) = self.pixels.get_mut(i) {
            *px = px.lerp(color, coverage as f64 / 255.0);
        }
    }

    /// Packed `RGBRGB...` bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_array()).collect()
    }
}

/// Renders `spec` at full per-pixel fidelity. This is the export path.
pub fn render_field(spec: &GradientSpec, width: u32, height: u32) -> Field {
    let projection = Projection::exact(spec, width, height);
    let field = Field::from_fn(width, height, |x, y| spec.color_at(projection.fraction(x, y)));
    log::debug!("rendered {} field {width}x{height}", spec.kind());
    field
}
