use crate::error::Result;
use crate::raster::Field;

/// JPEG quality for gradient exports.
pub const EXPORT_JPEG_QUALITY: u8 = 95;

/// Encodings for a rendered [`Field`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RasterFormat {
    Png,
    Jpeg { quality: u8 },
}

impl RasterFormat {
    pub fn name(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg { .. } => "JPEG",
        }
    }
}

/// Encodes `field` as PNG or JPEG bytes.
#[cfg(feature = "raster")]
pub fn encode_field(field: &Field, format: RasterFormat) -> Result<Vec<u8>> {
    use image::codecs::jpeg::JpegEncoder;
    use image::codecs::png::PngEncoder;
    use image::RgbImage;

    use crate::error::GradientError;

    let fail = |message: String| GradientError::EncodeFailure { format: format.name(), message };

    let image = RgbImage::from_raw(field.width(), field.height(), field.to_rgb8())
        .ok_or_else(|| fail("pixel buffer does not match its dimensions".to_string()))?;

    let mut bytes = Vec::new();
    let encoded = match format {
        RasterFormat::Png => image.write_with_encoder(PngEncoder::new(&mut bytes)),
        RasterFormat::Jpeg { quality } => {
            image.write_with_encoder(JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100)))
        }
    };
    encoded.map_err(|e| fail(e.to_string()))?;

    log::debug!("encoded {}x{} {} ({} bytes)", field.width(), field.height(), format.name(), bytes.len());
    Ok(bytes)
}

/// Without the `raster` feature there is no encoder to call.
#[cfg(not(feature = "raster"))]
pub fn encode_field(_field: &Field, format: RasterFormat) -> Result<Vec<u8>> {
    Err(crate::error::GradientError::MissingImageDependency { feature: format.name() })
}
