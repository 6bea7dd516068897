use rand::Rng;

use super::{Hls, Rgb};

/// Six-color families derived from one base color.
#[derive(Debug, Clone, PartialEq)]
pub struct BasePalettes {
    /// 30° hue steps around the base, from -60° to +90°.
    pub analogous: Vec<Rgb>,
    /// Base hue and saturation, lightness stepped from 0.12 to 0.88.
    pub monochromatic: Vec<Rgb>,
    /// Base hue and lightness, saturation stepped from 0 to 1.
    pub shades: Vec<Rgb>,
    /// Three jittered base colors followed by three jittered complements.
    pub complementary: Vec<Rgb>,
}

impl BasePalettes {
    /// Families in display order, paired with their names.
    pub fn named(&self) -> [(&'static str, &[Rgb]); 4] {
        [
            ("Analogous", &self.analogous),
            ("Monochromatic", &self.monochromatic),
            ("Shades", &self.shades),
            ("Complementary", &self.complementary),
        ]
    }
}

const FAMILY_SIZE: usize = 6;
const LIGHTNESS_RANGE: (f64, f64) = (0.12, 0.88);
const COMPLEMENT_LIGHTNESS_JITTER: f64 = 0.18;
const COMPLEMENT_SATURATION_JITTER: f64 = 0.22;
const COMPLEMENT_SATURATION_FLOOR: f64 = 0.15;

/// Samples the harmony families of `base` in HLS space.
///
/// Only the complementary family is random; `rng` is not touched otherwise.
pub fn base_palettes<R: Rng + ?Sized>(base: Rgb, rng: &mut R) -> BasePalettes {
    let Hls { h, l, s } = Hls::from_rgb(base);
    let steps = (FAMILY_SIZE - 1) as f64;

    let analogous = (0..FAMILY_SIZE)
        .map(|i| {
            let offset = (i as f64 - 2.0) / 12.0;
            Hls::new((h + offset).rem_euclid(1.0), l, s).to_rgb()
        })
        .collect();

    let (lo, hi) = LIGHTNESS_RANGE;
    let monochromatic = (0..FAMILY_SIZE)
        .map(|i| Hls::new(h, lo + i as f64 * ((hi - lo) / steps), s).to_rgb())
        .collect();

    let shades = (0..FAMILY_SIZE)
        .map(|i| Hls::new(h, l, i as f64 / steps).to_rgb())
        .collect();

    let mut jittered = |hue: f64| {
        let nl = (l + rng.random_range(-COMPLEMENT_LIGHTNESS_JITTER..=COMPLEMENT_LIGHTNESS_JITTER))
            .clamp(lo, hi);
        let ns = (s + rng.random_range(-COMPLEMENT_SATURATION_JITTER..=COMPLEMENT_SATURATION_JITTER))
            .clamp(COMPLEMENT_SATURATION_FLOOR, 1.0);
        Hls::new(hue, nl, ns).to_rgb()
    };
    let half = FAMILY_SIZE / 2;
    let complement = (h + 0.5).rem_euclid(1.0);
    let mut complementary: Vec<Rgb> = (0..half).map(|_| jittered(h)).collect();
    complementary.extend((0..half).map(|_| jittered(complement)));

    BasePalettes { analogous, monochromatic, shades, complementary }
}
