use super::Style;

/// Random offsets applied to one generated color.
///
/// Hue moves by up to `hue_degrees` either way and wraps. Saturation and value
/// each get an offset drawn from their `*_delta` range and are then clamped
/// into their `*_clamp` range, so results stay inside `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JitterBounds {
    pub hue_degrees: f64,
    pub saturation_delta: (f64, f64),
    pub saturation_clamp: (f64, f64),
    pub value_delta: (f64, f64),
    pub value_clamp: (f64, f64),
}

impl JitterBounds {
    pub const fn new(
        hue_degrees: f64,
        saturation_delta: (f64, f64),
        saturation_clamp: (f64, f64),
        value_delta: (f64, f64),
        value_clamp: (f64, f64),
    ) -> Self {
        Self { hue_degrees, saturation_delta, saturation_clamp, value_delta, value_clamp }
    }

    /// Symmetric deltas, the common case.
    const fn symmetric(hue: f64, sat: f64, sat_clamp: (f64, f64), val: f64, val_clamp: (f64, f64)) -> Self {
        Self::new(hue, (-sat, sat), sat_clamp, (-val, val), val_clamp)
    }
}

/// Tuning for [`Generator`](super::Generator).
///
/// Defaults give the stock look of each style.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Tries before accepting a sequence identical to the previous one.
    pub max_attempts: usize,
    /// Chance that a theme sequence is shuffled after sampling.
    pub shuffle_chance: f64,
    /// Width of the analogous arc in degrees, drawn per generation.
    pub analogous_arc_degrees: (f64, f64),

    pub analogous: JitterBounds,
    pub complementary: JitterBounds,
    pub triadic: JitterBounds,
    pub tetradic: JitterBounds,

    /// Theme jitter, used only when more colors are asked for than the
    /// palette holds.
    pub vibrant: JitterBounds,
    pub pastel: JitterBounds,
    pub muted: JitterBounds,
    pub theme_default: JitterBounds,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: 15,
            shuffle_chance: 0.3,
            analogous_arc_degrees: (30.0, 90.0),

            // The analogous hue spread comes from the arc; no extra hue jitter.
            analogous: JitterBounds::symmetric(0.0, 0.15, (0.3, 1.0), 0.20, (0.4, 1.0)),
            complementary: JitterBounds::symmetric(15.0, 0.20, (0.4, 1.0), 0.25, (0.3, 1.0)),
            triadic: JitterBounds::symmetric(10.0, 0.18, (0.35, 1.0), 0.22, (0.35, 1.0)),
            tetradic: JitterBounds::symmetric(8.0, 0.15, (0.4, 1.0), 0.20, (0.4, 1.0)),

            vibrant: JitterBounds::symmetric(30.0, 0.10, (0.7, 1.0), 0.15, (0.6, 1.0)),
            pastel: JitterBounds::new(20.0, (-0.15, 0.05), (0.2, 0.6), (-0.05, 0.10), (0.8, 1.0)),
            muted: JitterBounds::symmetric(25.0, 0.10, (0.1, 0.5), 0.10, (0.4, 0.8)),
            theme_default: JitterBounds::symmetric(20.0, 0.12, (0.3, 1.0), 0.15, (0.4, 1.0)),
        }
    }
}

impl GeneratorConfig {
    /// Jitter table row for `style`.
    pub fn jitter(&self, style: Style) -> &JitterBounds {
        match style {
            Style::Analogous => &self.analogous,
            Style::Complementary => &self.complementary,
            Style::Triadic => &self.triadic,
            Style::Tetradic => &self.tetradic,
            Style::Vibrant => &self.vibrant,
            Style::Pastel => &self.pastel,
            Style::Muted => &self.muted,
            _ => &self.theme_default,
        }
    }
}
