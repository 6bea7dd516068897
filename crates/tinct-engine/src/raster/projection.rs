use crate::gradient::{GradientKind, GradientSpec};

/// Maps a pixel to its fraction along the gradient axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Projection {
    /// Centered coordinates projected onto the angle's unit vector.
    Linear { cos: f64, sin: f64, sx: f64, sy: f64 },
    /// Euclidean distance from the center over the half-diagonal.
    Radial { cx: f64, cy: f64, radius: f64 },
    /// Concentric rectangles: every edge is a full radius away.
    Rectangular { cx: f64, cy: f64, half_w: f64, half_h: f64 },
}

impl Projection {
    /// Export projection.
    pub fn exact(spec: &GradientSpec, width: u32, height: u32) -> Self {
        match spec.kind() {
            GradientKind::Linear => Self::linear(spec, width, height),
            GradientKind::Radial => {
                let (cx, cy) = (width as f64 / 2.0, height as f64 / 2.0);
                Self::Radial { cx, cy, radius: cx.hypot(cy) }
            }
        }
    }

    /// Preview projection; radial fields reach the last stop on every edge.
    pub fn preview(spec: &GradientSpec, width: u32, height: u32) -> Self {
        match spec.kind() {
            GradientKind::Linear => Self::linear(spec, width, height),
            GradientKind::Radial => {
                let (cx, cy) = (width as f64 / 2.0, height as f64 / 2.0);
                Self::Rectangular { cx, cy, half_w: cx, half_h: cy }
            }
        }
    }

    fn linear(spec: &GradientSpec, width: u32, height: u32) -> Self {
        let theta = (spec.angle_degrees() as f64).to_radians();
        let step = |n: u32| if n > 1 { 1.0 / (n - 1) as f64 } else { 0.0 };
        Self::Linear { cos: theta.cos(), sin: theta.sin(), sx: step(width), sy: step(height) }
    }

    /// Fraction for pixel `(x, y)`, clamped to `[0, 1]`.
    pub fn fraction(&self, x: u32, y: u32) -> f64 {
        let (x, y) = (x as f64, y as f64);
        let f = match *self {
            Self::Linear { cos, sin, sx, sy } => {
                // A collapsed axis (size <= 1) sits on the center line.
                let nx = if sx > 0.0 { x * sx - 0.5 } else { 0.0 };
                let ny = if sy > 0.0 { y * sy - 0.5 } else { 0.0 };
                nx * cos + ny * sin + 0.5
            }
            Self::Radial { cx, cy, radius } => {
                if radius > 0.0 { (x - cx).hypot(y - cy) / radius } else { 0.0 }
            }
            Self::Rectangular { cx, cy, half_w, half_h } => {
                let along = |d: f64, half: f64| if half > 0.0 { d.abs() / half } else { 0.0 };
                along(x - cx, half_w).max(along(y - cy, half_h))
            }
        };
        f.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn spec(kind: GradientKind, angle: i32) -> GradientSpec {
        GradientSpec::new(kind, angle, &[Rgb::black(), Rgb::white()]).unwrap()
    }

    #[test]
    fn linear_zero_degrees_runs_left_to_right() {
        let p = Projection::exact(&spec(GradientKind::Linear, 0), 11, 5);
        assert_eq!(p.fraction(0, 2), 0.0);
        assert!((p.fraction(5, 0) - 0.5).abs() < 1e-12);
        assert_eq!(p.fraction(10, 4), 1.0);
    }

    #[test]
    fn linear_ninety_degrees_runs_top_to_bottom() {
        let p = Projection::exact(&spec(GradientKind::Linear, 90), 5, 11);
        assert!(p.fraction(4, 0) < 1e-12);
        assert!((p.fraction(0, 10) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn single_pixel_is_centered() {
        let p = Projection::exact(&spec(GradientKind::Linear, 37), 1, 1);
        assert!((p.fraction(0, 0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn radial_reaches_one_at_corners() {
        let p = Projection::exact(&spec(GradientKind::Radial, 0), 40, 20);
        assert_eq!(p.fraction(20, 10), 0.0);
        assert!((p.fraction(0, 0) - 1.0).abs() < 1e-12);
        // Edge midpoints are well short of the last stop.
        assert!(p.fraction(0, 10) < 0.95);
    }

    #[test]
    fn rectangular_reaches_one_on_edges() {
        let p = Projection::preview(&spec(GradientKind::Radial, 0), 40, 20);
        assert_eq!(p.fraction(0, 10), 1.0);
        assert_eq!(p.fraction(20, 0), 1.0);
        assert_eq!(p.fraction(20, 10), 0.0);
    }
}
