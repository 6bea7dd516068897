use tinct_engine::gradient::Stop;
use tinct_engine::Rgb;

/// Pixel geometry of the preview canvas.
///
/// Stop `i` is drawn as a circle of `marker_radius` centered on
/// `(round(position * (width - 1)), height / 2)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasGeometry {
    pub width: u32,
    pub height: u32,
    pub marker_radius: f64,
}

/// A stop marker as the shell should draw it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgb,
}

impl CanvasGeometry {
    #[inline]
    pub const fn new(width: u32, height: u32, marker_radius: f64) -> Self {
        Self { width, height, marker_radius }
    }

    #[inline]
    fn span(&self) -> f64 {
        self.width.saturating_sub(1) as f64
    }

    /// Fraction under canvas column `x`, unclamped. A one-pixel canvas maps
    /// everything to the center.
    pub fn fraction_at(&self, x: f64) -> f64 {
        if self.width > 1 { x / self.span() } else { 0.5 }
    }

    /// Column of the marker for a stop at `position`.
    #[inline]
    pub fn stop_x(&self, position: f64) -> f64 {
        (position * self.span()).round()
    }

    /// Row every marker sits on.
    #[inline]
    pub fn marker_y(&self) -> f64 {
        (self.height / 2) as f64
    }

    pub fn markers(&self, stops: &[Stop]) -> Vec<Marker> {
        stops
            .iter()
            .map(|s| Marker {
                x: self.stop_x(s.position),
                y: self.marker_y(),
                radius: self.marker_radius,
                color: s.color,
            })
            .collect()
    }

    /// Stop whose marker column is closest to `x`. Ties go to the lower index.
    pub fn nearest_stop(&self, stops: &[Stop], x: f64) -> Option<usize> {
        stops
            .iter()
            .enumerate()
            .map(|(i, s)| (i, (x - self.stop_x(s.position)).abs()))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// The stop under `(x, y)`.
    ///
    /// The point must lie inside some marker circle; the stop reported is then
    /// the one nearest by column, which settles overlapping markers.
    pub fn hit_test(&self, stops: &[Stop], x: f64, y: f64) -> Option<usize> {
        let cy = self.marker_y();
        let r2 = self.marker_radius * self.marker_radius;
        let inside = stops.iter().any(|s| {
            let dx = x - self.stop_x(s.position);
            let dy = y - cy;
            dx * dx + dy * dy <= r2
        });
        if inside { self.nearest_stop(stops, x) } else { None }
    }

    /// True when column `x` is within `guard` pixels of any marker.
    pub fn near_marker(&self, stops: &[Stop], x: f64, guard: f64) -> bool {
        stops.iter().any(|s| (x - self.stop_x(s.position)).abs() <= guard)
    }
}

/// Size limits for the preview canvas as its container resizes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CanvasBounds {
    pub min_width: u32,
    pub min_height: u32,
    pub max_width: u32,
    pub max_height: u32,
    /// Changes of at most this many pixels on both axes are ignored.
    pub hysteresis: u32,
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self { min_width: 350, min_height: 180, max_width: 700, max_height: 320, hysteresis: 2 }
    }
}

impl CanvasBounds {
    /// Canvas size for a container `available_width` wide.
    ///
    /// Width is clamped to the bounds, height follows the minimum size's
    /// aspect ratio and is clamped in turn.
    pub fn fit(&self, available_width: u32) -> (u32, u32) {
        let w = available_width.clamp(self.min_width, self.max_width.max(self.min_width));
        let aspect = self.min_height as f64 / self.min_width.max(1) as f64;
        let h = (w as f64 * aspect) as u32;
        (w, h.clamp(self.min_height, self.max_height.max(self.min_height)))
    }

    /// True when `next` differs enough from `current` to be worth a redraw.
    pub fn is_significant(&self, current: (u32, u32), next: (u32, u32)) -> bool {
        current.0.abs_diff(next.0) > self.hysteresis || current.1.abs_diff(next.1) > self.hysteresis
    }
}
