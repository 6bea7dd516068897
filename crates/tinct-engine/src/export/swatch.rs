use std::fmt;

use crate::color::Rgb;
use crate::error::{GradientError, Result};
use crate::gradient::MAX_STOPS;
use crate::raster::Field;

use super::encode::{encode_field, RasterFormat};
use super::MAX_EXPORT_SIDE;

/// JPEG quality for palette swatch strips.
pub const SWATCH_JPEG_QUALITY: u8 = 92;

/// Geometry of a swatch strip: one column per color above a white label band.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SwatchLayout {
    pub swatch_width: u32,
    pub swatch_height: u32,
    pub label_height: u32,
}

impl Default for SwatchLayout {
    fn default() -> Self {
        Self { swatch_width: 250, swatch_height: 350, label_height: 40 }
    }
}

/// Typeface used to print each color's hex code in the label band.
pub struct SwatchFont {
    font: fontdue::Font,
    px: f32,
}

impl SwatchFont {
    pub const DEFAULT_PX: f32 = 24.0;

    /// Parses TrueType / OpenType bytes. A `px` that is not a positive size
    /// falls back to [`Self::DEFAULT_PX`].
    pub fn from_bytes(bytes: &[u8], px: f32) -> Result<Self> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| GradientError::InvalidFont(e.to_string()))?;
        let px = if px.is_finite() && px > 0.0 { px } else { Self::DEFAULT_PX };
        Ok(Self { font, px })
    }

    #[inline]
    pub fn px(&self) -> f32 {
        self.px
    }

    /// Prints `text` in black, centered in the cell, clipped to it.
    fn draw(&self, field: &mut Field, text: &str, cell: (u32, u32, u32, u32)) {
        let (left, top, width, height) = cell;
        let glyphs: Vec<_> = text.chars().map(|c| self.font.rasterize(c, self.px)).collect();
        let advance: f32 = glyphs.iter().map(|(m, _)| m.advance_width).sum();
        let (ascent, descent) = self
            .font
            .horizontal_line_metrics(self.px)
            .map(|l| (l.ascent, l.descent))
            .unwrap_or((self.px * 0.8, -self.px * 0.2));

        let baseline = top as f32 + (height as f32 - (ascent - descent)) / 2.0 + ascent;
        let right = left as i64 + width as i64;
        let bottom = top as i64 + height as i64;
        let mut pen = left as f32 + (width as f32 - advance) / 2.0;

        for (metrics, coverage) in &glyphs {
            let gx = (pen + metrics.xmin as f32).round() as i64;
            let gy = (baseline - metrics.ymin as f32 - metrics.height as f32).round() as i64;
            for (i, &alpha) in coverage.iter().enumerate() {
                let x = gx + (i % metrics.width.max(1)) as i64;
                let y = gy + (i / metrics.width.max(1)) as i64;
                if alpha == 0 || x < left as i64 || x >= right || y < top as i64 || y >= bottom {
                    continue;
                }
                field.blend(x as u32, y as u32, Rgb::black(), alpha);
            }
            pen += metrics.advance_width;
        }
    }
}

impl fmt::Debug for SwatchFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwatchFont").field("px", &self.px).finish_non_exhaustive()
    }
}

/// Lays `colors` out side by side over a white band, with each hex code
/// printed under its column when `font` is given.
///
/// Rejects an empty palette and any strip wider or taller than
/// `MAX_EXPORT_SIDE`.
pub fn render_swatches(colors: &[Rgb], layout: SwatchLayout, font: Option<&SwatchFont>) -> Result<Field> {
    if colors.is_empty() {
        return Err(GradientError::InvalidStopCount { count: 0, max: MAX_STOPS });
    }
    let width = u32::try_from(colors.len())
        .ok()
        .and_then(|n| layout.swatch_width.checked_mul(n));
    let height = layout.swatch_height.checked_add(layout.label_height);
    let (width, height) = match (width, height) {
        (Some(w), Some(h)) if (1..=MAX_EXPORT_SIDE).contains(&w) && (1..=MAX_EXPORT_SIDE).contains(&h) => (w, h),
        _ => {
            return Err(GradientError::InvalidExportDimensions {
                width: format!("{} x {}", layout.swatch_width, colors.len()),
                height: format!("{} + {}", layout.swatch_height, layout.label_height),
            });
        }
    };

    let column = layout.swatch_width;
    let mut field = Field::from_fn(width, height, |x, y| {
        if y < layout.swatch_height {
            colors.get((x / column) as usize).copied().unwrap_or(Rgb::white())
        } else {
            Rgb::white()
        }
    });

    if let Some(font) = font.filter(|_| layout.label_height > 0) {
        for (i, color) in colors.iter().enumerate() {
            let cell = (i as u32 * column, layout.swatch_height, column, layout.label_height);
            font.draw(&mut field, &color.to_hex(), cell);
        }
    }
    Ok(field)
}

/// Swatch strip for `colors` as JPEG bytes.
pub fn encode_swatches(colors: &[Rgb], layout: SwatchLayout, font: Option<&SwatchFont>) -> Result<Vec<u8>> {
    let field = render_swatches(colors, layout, font)?;
    encode_field(&field, RasterFormat::Jpeg { quality: SWATCH_JPEG_QUALITY })
}

/// Next free `"<palette>_palette N.jpeg"` name among `existing` file names.
///
/// An unnumbered `"<palette>_palette.jpeg"` counts as number 1.
pub fn next_swatch_name<'a>(existing: impl IntoIterator<Item = &'a str>, palette: &str) -> String {
    let base = format!("{palette}_palette");
    let highest = existing
        .into_iter()
        .filter_map(|name| {
            let rest = name.strip_prefix(&base)?.strip_suffix(".jpeg")?;
            if rest.is_empty() {
                Some(1)
            } else {
                rest.strip_prefix(' ')?.parse::<u32>().ok()
            }
        })
        .max()
        .unwrap_or(0);
    format!("{base} {}.jpeg", highest + 1)
}
