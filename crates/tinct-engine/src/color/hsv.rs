use super::Rgb;

/// Hue / saturation / value, every component in `[0, 1]`.
///
/// Hue is a fraction of a turn. Callers holding degrees divide by 360 first.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Hsv {
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    pub fn from_rgb(c: Rgb) -> Self {
        let (r, g, b) = c.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        if max == min {
            return Self::new(0.0, 0.0, max);
        }
        let range = max - min;
        Self::new(hue_of(r, g, b, max, range), range / max, max)
    }

    pub fn to_rgb(self) -> Rgb {
        let Hsv { h, s, v } = self;
        if s == 0.0 {
            return Rgb::from_unit(v, v, v);
        }
        let sector = (h * 6.0).trunc();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        let (r, g, b) = match (sector as i64).rem_euclid(6) {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Rgb::from_unit(r, g, b)
    }

    /// Rotates the hue by `degrees`, wrapping into `[0, 1)`.
    #[inline]
    pub fn rotated(self, degrees: f64) -> Self {
        Self { h: (self.h + degrees / 360.0).rem_euclid(1.0), ..self }
    }
}

/// Hue / lightness / saturation, every component in `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hls {
    pub h: f64,
    pub l: f64,
    pub s: f64,
}

impl Hls {
    #[inline]
    pub const fn new(h: f64, l: f64, s: f64) -> Self {
        Self { h, l, s }
    }

    pub fn from_rgb(c: Rgb) -> Self {
        let (r, g, b) = c.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let sum = max + min;
        let l = sum / 2.0;
        if max == min {
            return Self::new(0.0, l, 0.0);
        }
        let range = max - min;
        let s = if l <= 0.5 { range / sum } else { range / (2.0 - max - min) };
        Self::new(hue_of(r, g, b, max, range), l, s)
    }

    pub fn to_rgb(self) -> Rgb {
        let Hls { h, l, s } = self;
        if s == 0.0 {
            return Rgb::from_unit(l, l, l);
        }
        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let m1 = 2.0 * l - m2;
        Rgb::from_unit(
            hls_channel(m1, m2, h + 1.0 / 3.0),
            hls_channel(m1, m2, h),
            hls_channel(m1, m2, h - 1.0 / 3.0),
        )
    }
}

fn hue_of(r: f64, g: f64, b: f64, max: f64, range: f64) -> f64 {
    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;
    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    (h / 6.0).rem_euclid(1.0)
}

fn hls_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

/// HSV in `[0, 1]` to `#RRGGBB`.
pub fn hsv_to_hex(h: f64, s: f64, v: f64) -> String {
    Hsv::new(h, s, v).to_rgb().to_hex()
}

/// Channels to HSV in `[0, 1]`.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let hsv = Hsv::from_rgb(Rgb::new(r, g, b));
    (hsv.h, hsv.s, hsv.v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn primaries_to_hsv() {
        let (h, s, v) = rgb_to_hsv(255, 0, 0);
        assert!(close(h, 0.0) && close(s, 1.0) && close(v, 1.0));
        let (h, _, _) = rgb_to_hsv(0, 255, 0);
        assert!(close(h, 1.0 / 3.0));
        let (h, _, _) = rgb_to_hsv(0, 0, 255);
        assert!(close(h, 2.0 / 3.0));
    }

    #[test]
    fn grey_has_no_hue_or_saturation() {
        let (h, s, v) = rgb_to_hsv(128, 128, 128);
        assert_eq!((h, s), (0.0, 0.0));
        assert!(close(v, 128.0 / 255.0));
    }

    #[test]
    fn hsv_to_hex_truncates() {
        assert_eq!(hsv_to_hex(0.0, 1.0, 1.0), "#FF0000");
        assert_eq!(hsv_to_hex(0.5, 1.0, 1.0), "#00FFFF");
        assert_eq!(hsv_to_hex(0.0, 0.0, 0.5), "#7F7F7F");
    }

    #[test]
    fn hue_one_wraps_to_red() {
        assert_eq!(Hsv::new(1.0, 1.0, 1.0).to_rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn rotation_wraps() {
        let hsv = Hsv::new(0.9, 1.0, 1.0).rotated(72.0);
        assert!(close(hsv.h, 0.1));
        let back = Hsv::new(0.1, 1.0, 1.0).rotated(-72.0);
        assert!(close(back.h, 0.9));
    }

    #[test]
    fn hsv_round_trip_stays_within_one_step() {
        // Truncation may lose at most one unit per channel.
        for c in [Rgb::new(255, 107, 107), Rgb::new(78, 205, 196), Rgb::new(95, 39, 205)] {
            let back = Hsv::from_rgb(c).to_rgb();
            assert!((c.r as i16 - back.r as i16).abs() <= 1);
            assert!((c.g as i16 - back.g as i16).abs() <= 1);
            assert!((c.b as i16 - back.b as i16).abs() <= 1);
        }
    }

    #[test]
    fn hls_of_primaries() {
        let red = Hls::from_rgb(Rgb::new(255, 0, 0));
        assert!(close(red.h, 0.0) && close(red.l, 0.5) && close(red.s, 1.0));
        assert_eq!(red.to_rgb(), Rgb::new(255, 0, 0));
        assert_eq!(Hls::new(0.0, 1.0, 0.0).to_rgb(), Rgb::white());
    }
}
