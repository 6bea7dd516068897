//! Gradient model.
//!
//! A [`GradientSpec`] is an ordered list of color stops on a `[0, 1]` axis plus
//! the geometry needed to lay that axis over a canvas (linear angle or radial).
//!
//! Invariants upheld by every method:
//! - `1 <= stops.len() <= MAX_STOPS`
//! - positions lie in `[0, 1]` and ascend
//! - neighbours are at least `MIN_GAP` apart
//!
//! The stop list is private; the only way to change it is the editing
//! contract in `edit.rs` or a wholesale replace.

mod edit;
mod interp;
mod presets;

use std::fmt;
use std::str::FromStr;

use crate::color::Rgb;
use crate::error::{GradientError, Result};

pub use interp::color_at;
pub use presets::{find_preset, Preset, PRESETS};

/// Smallest distance kept between neighbouring stops so each stays pickable.
pub const MIN_GAP: f64 = 0.01;

/// Practical upper bound on stops.
pub const MAX_STOPS: usize = 8;

/// Removal stops at this many stops.
pub const MIN_STOPS: usize = 2;

/// Geometry the stop axis is laid over.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum GradientKind {
    /// Axis through the canvas center at `angle_degrees`.
    #[default]
    Linear,
    /// Axis from the canvas center outwards.
    Radial,
}

impl GradientKind {
    pub const ALL: [GradientKind; 2] = [GradientKind::Linear, GradientKind::Radial];

    pub fn name(self) -> &'static str {
        match self {
            GradientKind::Linear => "Linear",
            GradientKind::Radial => "Radial",
        }
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GradientKind {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self> {
        GradientKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GradientError::UnknownGradientKind(s.to_string()))
    }
}

/// A single control point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stop {
    pub position: f64,
    pub color: Rgb,
}

impl Stop {
    #[inline]
    pub const fn new(position: f64, color: Rgb) -> Self {
        Self { position, color }
    }
}

/// The gradient being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    kind: GradientKind,
    angle_degrees: u16,
    stops: Vec<Stop>,
}

impl GradientSpec {
    /// Evenly spaced stops for `colors`.
    pub fn new(kind: GradientKind, angle_degrees: i32, colors: &[Rgb]) -> Result<Self> {
        let mut spec = Self {
            kind,
            angle_degrees: normalize_angle(angle_degrees),
            stops: Vec::new(),
        };
        spec.replace_colors(colors)?;
        Ok(spec)
    }

    /// Left-to-right linear gradient through `colors`.
    pub fn linear(colors: &[Rgb]) -> Result<Self> {
        Self::new(GradientKind::Linear, 0, colors)
    }

    /// Explicit stops, validated against the model invariants.
    pub fn from_stops(kind: GradientKind, angle_degrees: i32, stops: Vec<Stop>) -> Result<Self> {
        check_count(stops.len())?;
        let in_range = stops.iter().all(|s| (0.0..=1.0).contains(&s.position));
        let spaced = stops
            .windows(2)
            .all(|w| w[1].position - w[0].position >= MIN_GAP - 1e-9);
        if !in_range || !spaced {
            return Err(GradientError::StopsOutOfOrder { min_gap: MIN_GAP });
        }
        Ok(Self { kind, angle_degrees: normalize_angle(angle_degrees), stops })
    }

    #[inline]
    pub fn kind(&self) -> GradientKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: GradientKind) {
        self.kind = kind;
    }

    /// Angle in `[0, 359]`. Only meaningful for linear gradients.
    #[inline]
    pub fn angle_degrees(&self) -> u16 {
        self.angle_degrees
    }

    /// Stores `degrees` wrapped into `[0, 359]` and returns the stored value.
    pub fn set_angle(&mut self, degrees: i32) -> u16 {
        self.angle_degrees = normalize_angle(degrees);
        self.angle_degrees
    }

    #[inline]
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false for a constructed spec; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn colors(&self) -> Vec<Rgb> {
        self.stops.iter().map(|s| s.color).collect()
    }

    pub fn positions(&self) -> Vec<f64> {
        self.stops.iter().map(|s| s.position).collect()
    }

    /// Space-separated `#RRGGBB` list, the "copy all" text.
    pub fn hex_list(&self) -> String {
        self.stops
            .iter()
            .map(|s| s.color.to_hex())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Color at `fraction` along the axis. See [`color_at`].
    #[inline]
    pub fn color_at(&self, fraction: f64) -> Rgb {
        interp::sample(&self.stops, fraction)
    }

    /// Wholesale replace with evenly spaced `colors`.
    ///
    /// Used by preset load and regeneration. On error the spec is unchanged.
    pub fn replace_colors(&mut self, colors: &[Rgb]) -> Result<()> {
        check_count(colors.len())?;
        self.stops = even_positions(colors.len())
            .into_iter()
            .zip(colors)
            .map(|(p, c)| Stop::new(p, *c))
            .collect();
        Ok(())
    }
}

/// `i / (n - 1)` for each stop, or a single centered `0.5`.
pub fn even_positions(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.5],
        _ => (0..n).map(|i| i as f64 / (n - 1) as f64).collect(),
    }
}

fn check_count(count: usize) -> Result<()> {
    if (1..=MAX_STOPS).contains(&count) {
        Ok(())
    } else {
        Err(GradientError::InvalidStopCount { count, max: MAX_STOPS })
    }
}

#[inline]
fn normalize_angle(degrees: i32) -> u16 {
    degrees.rem_euclid(360) as u16
}
