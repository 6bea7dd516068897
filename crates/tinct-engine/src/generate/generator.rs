use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};

use crate::color::{Hsv, Rgb};
use crate::error::{GradientError, Result};
use crate::gradient::{GradientSpec, MAX_STOPS};

use super::{GeneratorConfig, JitterBounds, Style};

/// Random gradient producer.
///
/// The random source is a type parameter so tests can pin it with a seed.
/// The generator remembers the last sequence it produced and retries (up to
/// `max_attempts`) rather than hand back the same colors twice in a row.
#[derive(Debug, Clone)]
pub struct Generator<R = StdRng> {
    rng: R,
    config: GeneratorConfig,
    last: Option<Vec<Rgb>>,
}

impl Generator<StdRng> {
    /// OS-seeded generator with default tuning.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng(), GeneratorConfig::default())
    }

    /// Reproducible generator with default tuning.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed), GeneratorConfig::default())
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R, config: GeneratorConfig) -> Self {
        Self { rng, config, last: None }
    }

    #[inline]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Replaces every stop of `spec` with `count` fresh colors, evenly spaced.
    pub fn regenerate(&mut self, spec: &mut GradientSpec, style: Style, count: usize) -> Result<()> {
        let colors = self.colors(style, count)?;
        spec.replace_colors(&colors)?;
        log::debug!("regenerated {count} stops in {style} style");
        Ok(())
    }

    /// `count` colors in `style`, different from the previous call when the
    /// attempt budget allows.
    pub fn colors(&mut self, style: Style, count: usize) -> Result<Vec<Rgb>> {
        if !(1..=MAX_STOPS).contains(&count) {
            return Err(GradientError::InvalidStopCount { count, max: MAX_STOPS });
        }

        let attempts = self.config.max_attempts.max(1);
        let mut colors = Vec::new();
        for attempt in 1..=attempts {
            colors = self.attempt(style, count);
            if self.last.as_ref() != Some(&colors) {
                break;
            }
            if attempt == attempts {
                log::debug!("{attempts} attempts repeated the previous gradient; keeping it");
            }
        }

        self.last = Some(colors.clone());
        Ok(colors)
    }

    fn attempt(&mut self, style: Style, n: usize) -> Vec<Rgb> {
        if style.is_harmony() {
            self.harmony(style, n)
        } else {
            self.theme(style, n)
        }
    }

    fn harmony(&mut self, style: Style, n: usize) -> Vec<Rgb> {
        let palette = style.palette();
        let base = Hsv::from_rgb(palette[self.rng.random_range(0..palette.len())]);
        let bounds = *self.config.jitter(style);

        match style {
            Style::Analogous => {
                let (lo, hi) = self.config.analogous_arc_degrees;
                let arc = self.rng.random_range(lo..=hi);
                let start = self.rng.random_range(-arc / 2.0..=arc / 2.0);
                let step = arc / n.saturating_sub(1).max(1) as f64;
                (0..n)
                    .map(|i| self.jitter(base.rotated(start + i as f64 * step), &bounds))
                    .collect()
            }
            Style::Complementary => (0..n)
                .map(|i| {
                    let hue = if i % 2 == 0 { base } else { base.rotated(180.0) };
                    self.jitter(hue, &bounds)
                })
                .collect(),
            Style::Triadic => (0..n)
                .map(|i| self.jitter(base.rotated(120.0 * (i % 3) as f64), &bounds))
                .collect(),
            _ => (0..n)
                .map(|i| self.jitter(base.rotated(90.0 * (i % 4) as f64), &bounds))
                .collect(),
        }
    }

    fn theme(&mut self, style: Style, n: usize) -> Vec<Rgb> {
        let palette = style.palette();
        let size = palette.len();

        let mut colors: Vec<Rgb> = if n > size {
            let bounds = *self.config.jitter(style);
            (0..n)
                .map(|i| self.jitter(Hsv::from_rgb(palette[i % size]), &bounds))
                .collect()
        } else if n != 2 && n <= size / 2 {
            // Few colors: stride through the palette so they spread out.
            let step = size / n;
            let start = self.rng.random_range(0..step);
            (0..n).map(|i| palette[(start + i * step) % size]).collect()
        } else {
            palette.choose_multiple(&mut self.rng, n).copied().collect()
        };

        if self.rng.random_bool(self.config.shuffle_chance.clamp(0.0, 1.0)) {
            colors.shuffle(&mut self.rng);
        }
        colors
    }

    fn jitter(&mut self, hsv: Hsv, bounds: &JitterBounds) -> Rgb {
        let rotated = if bounds.hue_degrees > 0.0 {
            hsv.rotated(self.rng.random_range(-bounds.hue_degrees..=bounds.hue_degrees))
        } else {
            hsv
        };
        let s = offset(&mut self.rng, hsv.s, bounds.saturation_delta, bounds.saturation_clamp);
        let v = offset(&mut self.rng, hsv.v, bounds.value_delta, bounds.value_clamp);
        Hsv::new(rotated.h, s, v).to_rgb()
    }
}

fn offset<R: Rng + ?Sized>(rng: &mut R, base: f64, delta: (f64, f64), clamp: (f64, f64)) -> f64 {
    (base + rng.random_range(delta.0..=delta.1)).clamp(clamp.0, clamp.1)
}

#[cfg(test)]
mod tests {
    use rand::RngCore;

    use super::*;
    use crate::gradient::{even_positions, GradientKind};

    fn hue_degrees(c: Rgb) -> f64 {
        Hsv::from_rgb(c).h * 360.0
    }

    fn hue_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    /// Always yields zero and counts how often it was asked.
    struct ZeroRng {
        calls: usize,
    }

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            self.calls += 1;
            0
        }
        fn next_u64(&mut self) -> u64 {
            self.calls += 1;
            0
        }
        fn fill_bytes(&mut self, dst: &mut [u8]) {
            self.calls += 1;
            dst.fill(0);
        }
    }

    #[test]
    fn regenerate_yields_exact_count_and_even_positions() {
        let mut generator = Generator::seeded(7);
        let mut spec = GradientSpec::linear(&[Rgb::black(), Rgb::white()]).unwrap();
        for style in Style::ALL {
            for n in 1..=MAX_STOPS {
                generator.regenerate(&mut spec, style, n).unwrap();
                assert_eq!(spec.len(), n, "{style} x {n}");
                assert_eq!(spec.positions(), even_positions(n), "{style} x {n}");
            }
        }
    }

    #[test]
    fn regenerate_keeps_kind_and_angle() {
        let mut generator = Generator::seeded(1);
        let mut spec = GradientSpec::new(GradientKind::Radial, 135, &[Rgb::black()]).unwrap();
        generator.regenerate(&mut spec, Style::Cool, 4).unwrap();
        assert_eq!(spec.kind(), GradientKind::Radial);
        assert_eq!(spec.angle_degrees(), 135);
    }

    #[test]
    fn invalid_count_is_rejected_without_touching_spec() {
        let mut generator = Generator::seeded(1);
        let mut spec = GradientSpec::linear(&[Rgb::black(), Rgb::white()]).unwrap();
        for n in [0, 9, 100] {
            assert!(matches!(
                generator.regenerate(&mut spec, Style::Warm, n),
                Err(GradientError::InvalidStopCount { .. })
            ));
        }
        assert_eq!(spec.colors(), vec![Rgb::black(), Rgb::white()]);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Generator::seeded(99);
        let mut b = Generator::seeded(99);
        for style in Style::ALL {
            assert_eq!(a.colors(style, 5).unwrap(), b.colors(style, 5).unwrap());
        }
    }

    #[test]
    fn consecutive_results_differ() {
        let mut generator = Generator::seeded(5);
        let mut previous = generator.colors(Style::Warm, 2).unwrap();
        for _ in 0..20 {
            let next = generator.colors(Style::Warm, 2).unwrap();
            assert_ne!(next, previous);
            previous = next;
        }
    }

    #[test]
    fn repeat_budget_is_bounded() {
        let mut generator = Generator::new(ZeroRng { calls: 0 }, GeneratorConfig::default());
        let first = generator.colors(Style::Triadic, 3).unwrap();
        let one_attempt = generator.rng.calls;

        // A constant source can only ever repeat itself: the generator gives
        // up after the configured attempts and returns the repeat.
        let second = generator.colors(Style::Triadic, 3).unwrap();
        assert_eq!(first, second);
        assert_eq!(generator.rng.calls - one_attempt, one_attempt * 15);
    }

    #[test]
    fn theme_samples_come_from_palette() {
        let mut generator = Generator::seeded(21);
        let palette = Style::Warm.palette();
        for n in 1..=MAX_STOPS {
            for _ in 0..10 {
                let colors = generator.colors(Style::Warm, n).unwrap();
                assert!(colors.iter().all(|c| palette.contains(c)), "{colors:?}");
                for (i, c) in colors.iter().enumerate() {
                    assert!(!colors[i + 1..].contains(c), "duplicate in {colors:?}");
                }
            }
        }
    }

    #[test]
    fn pastel_jitter_stays_soft() {
        let mut generator = Generator::seeded(8);
        let pastel = generator.config.pastel;
        // Every pastel base color pushed through the theme jitter row.
        for base in Style::Pastel.palette() {
            let c = generator.jitter(Hsv::from_rgb(*base), &pastel);
            let hsv = Hsv::from_rgb(c);
            assert!(hsv.s <= 0.6 + 0.02, "{c} too saturated");
            assert!(hsv.v >= 0.8 - 0.02, "{c} too dark");
        }
    }

    #[test]
    fn triadic_hues_are_a_third_apart() {
        let mut generator = Generator::seeded(13);
        for _ in 0..20 {
            let colors = generator.colors(Style::Triadic, 3).unwrap();
            let d = hue_distance(hue_degrees(colors[0]), hue_degrees(colors[1]));
            assert!((d - 120.0).abs() <= 25.0, "{colors:?}: {d}");
        }
    }

    #[test]
    fn complementary_alternates_opposite_hues() {
        let mut generator = Generator::seeded(17);
        for _ in 0..20 {
            let colors = generator.colors(Style::Complementary, 4).unwrap();
            let d = hue_distance(hue_degrees(colors[0]), hue_degrees(colors[1]));
            assert!(d >= 180.0 - 35.0, "{colors:?}: {d}");
        }
    }

    #[test]
    fn harmony_values_respect_clamps() {
        let mut generator = Generator::seeded(23);
        for _ in 0..30 {
            for c in generator.colors(Style::Tetradic, 8).unwrap() {
                let hsv = Hsv::from_rgb(c);
                assert!(hsv.v >= 0.4 - 0.02, "{c}");
                assert!(hsv.s >= 0.4 - 0.02, "{c}");
            }
        }
    }
}
