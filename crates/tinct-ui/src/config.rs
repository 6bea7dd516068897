use std::time::Duration;

use tinct_engine::export::{ExportSize, SwatchFont};
use tinct_engine::generate::Style;
use tinct_engine::gradient::GradientKind;
use tinct_engine::time::DEFAULT_DEBOUNCE;

use crate::canvas::CanvasBounds;

/// Editor defaults and interaction tuning.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub canvas_bounds: CanvasBounds,

    /// Radius of a stop marker, which is also its hit area.
    pub marker_radius: f64,
    /// Double-clicks this close (in columns) to a marker do not add a stop.
    pub add_guard_radius: f64,
    /// Preview sampling block size in pixels.
    pub preview_cell: u32,
    /// Quiet period before a resize is applied.
    pub resize_debounce: Duration,
    /// Side of the color picker's saturation/value square.
    pub picker_size: u32,

    pub style: Style,
    pub color_count: usize,
    pub kind: GradientKind,
    pub angle_degrees: i32,
    /// Pre-filled width and height of the export fields.
    pub export_size: ExportSize,
    /// Label size once a swatch font is loaded.
    pub swatch_font_px: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 700,
            canvas_height: 320,
            canvas_bounds: CanvasBounds::default(),
            marker_radius: 7.0,
            add_guard_radius: 12.0,
            preview_cell: 4,
            resize_debounce: DEFAULT_DEBOUNCE,
            picker_size: 180,
            style: Style::Warm,
            color_count: 3,
            kind: GradientKind::Linear,
            angle_degrees: 45,
            export_size: ExportSize::default(),
            swatch_font_px: SwatchFont::DEFAULT_PX,
        }
    }
}
