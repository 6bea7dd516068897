//! Export.
//!
//! Scope:
//! - CSS declaration text
//! - SVG documents
//! - PNG / JPEG bytes of a full-resolution field (requires the `raster` feature)
//! - palette swatch strips
//! - atomic file writes
//!
//! Every exporter only reads the spec.

mod css;
mod encode;
mod svg;
mod swatch;
mod write;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{GradientError, Result};
use crate::gradient::GradientSpec;
use crate::raster::render_field;

pub use css::css;
pub use encode::{encode_field, RasterFormat, EXPORT_JPEG_QUALITY};
pub use svg::svg;
pub use swatch::{
    encode_swatches, next_swatch_name, render_swatches, SwatchFont, SwatchLayout, SWATCH_JPEG_QUALITY,
};
pub use write::write_atomic;

/// Default export size, matching the editor's pre-filled fields.
pub const DEFAULT_EXPORT_SIZE: ExportSize = ExportSize::new(800, 400);

/// Largest accepted side of any rendered export, in pixels.
pub const MAX_EXPORT_SIDE: u32 = 16_384;

/// Output formats offered by the editor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Svg,
    Css,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [Self::Png, Self::Jpeg, Self::Svg, Self::Css];

    /// Label shown in the format selector.
    pub fn name(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Svg => "SVG",
            Self::Css => "CSS Code",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Svg => "svg",
            Self::Css => "css",
        }
    }

    /// True when the output size matters.
    #[inline]
    pub fn uses_size(self) -> bool {
        !matches!(self, Self::Css)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self> {
        let t = s.trim();
        let found = Self::ALL.into_iter().find(|f| {
            f.name().eq_ignore_ascii_case(t) || f.extension().eq_ignore_ascii_case(t)
        });
        match found {
            Some(f) => Ok(f),
            None if t.eq_ignore_ascii_case("jpg") => Ok(Self::Jpeg),
            None => Err(GradientError::UnknownExportFormat(s.to_string())),
        }
    }
}

/// Output dimensions in pixels, both in `1..=MAX_EXPORT_SIDE`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ExportSize {
    pub width: u32,
    pub height: u32,
}

impl ExportSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parses the width and height text fields.
    pub fn parse(width: &str, height: &str) -> Result<Self> {
        let dim = |s: &str| s.trim().parse::<u32>().ok();
        match (dim(width), dim(height)) {
            (Some(w), Some(h)) => Self::new(w, h).validate(),
            _ => Err(GradientError::InvalidExportDimensions {
                width: width.to_string(),
                height: height.to_string(),
            }),
        }
    }

    /// `self` if both sides lie in `1..=MAX_EXPORT_SIDE`.
    pub fn validate(self) -> Result<Self> {
        let side = 1..=MAX_EXPORT_SIDE;
        if side.contains(&self.width) && side.contains(&self.height) {
            Ok(self)
        } else {
            Err(GradientError::InvalidExportDimensions {
                width: self.width.to_string(),
                height: self.height.to_string(),
            })
        }
    }
}

impl Default for ExportSize {
    fn default() -> Self {
        DEFAULT_EXPORT_SIZE
    }
}

impl fmt::Display for ExportSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Serializes `spec` in `format` at `size`.
pub fn export_bytes(spec: &GradientSpec, format: ExportFormat, size: ExportSize) -> Result<Vec<u8>> {
    let size = size.validate()?;
    match format {
        ExportFormat::Css => Ok(css(spec).into_bytes()),
        ExportFormat::Svg => Ok(svg(spec, size.width, size.height).into_bytes()),
        ExportFormat::Png => encode_field(&render_field(spec, size.width, size.height), RasterFormat::Png),
        ExportFormat::Jpeg => encode_field(
            &render_field(spec, size.width, size.height),
            RasterFormat::Jpeg { quality: EXPORT_JPEG_QUALITY },
        ),
    }
}

/// Serializes `spec` and writes it to `path` atomically.
pub fn export_to(spec: &GradientSpec, format: ExportFormat, size: ExportSize, path: &Path) -> Result<()> {
    let bytes = export_bytes(spec, format, size)?;
    write_atomic(path, &bytes)?;
    if format.uses_size() {
        log::info!("exported {format} {size} to {}", path.display());
    } else {
        log::info!("exported {format} to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn format_names_parse() {
        for f in ExportFormat::ALL {
            assert_eq!(f.name().parse::<ExportFormat>().unwrap(), f);
            assert_eq!(f.extension().parse::<ExportFormat>().unwrap(), f);
        }
        assert_eq!("jpg".parse::<ExportFormat>().unwrap(), ExportFormat::Jpeg);
        assert_eq!(" css ".parse::<ExportFormat>().unwrap(), ExportFormat::Css);
        assert!(matches!(
            "gif".parse::<ExportFormat>(),
            Err(GradientError::UnknownExportFormat(_))
        ));
    }

    #[test]
    fn size_parses_positive_integers() {
        assert_eq!(ExportSize::parse("800", "400").unwrap(), DEFAULT_EXPORT_SIZE);
        assert_eq!(ExportSize::parse(" 12 ", "3").unwrap(), ExportSize::new(12, 3));
        for (w, h) in [("0", "400"), ("abc", "400"), ("800", ""), ("-5", "10"), ("1.5", "2")] {
            assert!(
                matches!(
                    ExportSize::parse(w, h),
                    Err(GradientError::InvalidExportDimensions { .. })
                ),
                "{w:?} x {h:?}"
            );
        }
    }

    #[test]
    fn size_is_capped_per_side() {
        let max = MAX_EXPORT_SIDE.to_string();
        assert_eq!(
            ExportSize::parse(&max, "1").unwrap(),
            ExportSize::new(MAX_EXPORT_SIDE, 1)
        );
        for (w, h) in [("4294967295", "4294967295"), ("16385", "400"), ("800", "100000")] {
            assert!(
                matches!(
                    ExportSize::parse(w, h),
                    Err(GradientError::InvalidExportDimensions { .. })
                ),
                "{w:?} x {h:?}"
            );
        }
    }

    #[test]
    fn oversized_export_is_an_error_not_a_crash() {
        let spec = GradientSpec::linear(&[Rgb::black(), Rgb::white()]).unwrap();
        for format in ExportFormat::ALL {
            for size in [ExportSize::new(u32::MAX, u32::MAX), ExportSize::new(0, 10)] {
                assert!(
                    matches!(
                        export_bytes(&spec, format, size),
                        Err(GradientError::InvalidExportDimensions { .. })
                    ),
                    "{format} {size}"
                );
            }
        }
    }

    #[test]
    fn only_css_ignores_size() {
        assert!(ExportFormat::Png.uses_size());
        assert!(ExportFormat::Svg.uses_size());
        assert!(!ExportFormat::Css.uses_size());
    }

    #[test]
    fn css_and_svg_bytes_are_text() {
        let spec = GradientSpec::linear(&[Rgb::black(), Rgb::white()]).unwrap();
        let css_bytes = export_bytes(&spec, ExportFormat::Css, ExportSize::default()).unwrap();
        assert_eq!(String::from_utf8(css_bytes).unwrap(), css(&spec));
        let svg_bytes = export_bytes(&spec, ExportFormat::Svg, ExportSize::new(10, 5)).unwrap();
        assert!(String::from_utf8(svg_bytes).unwrap().contains(r#"width="10" height="5""#));
    }
}
