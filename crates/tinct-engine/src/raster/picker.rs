use crate::color::{Hsv, Rgb};

use super::field::Field;

/// Saturation/value square for `hue_degrees`.
///
/// Saturation grows left to right, value falls top to bottom. Top-left is
/// white and the whole bottom row is black.
pub fn sv_square(hue_degrees: f64, size: u32) -> Field {
    Field::from_fn(size, size, |x, y| pick(hue_degrees, size, x, y))
}

/// Color under `(x, y)` in a square of `size`, or `None` outside it.
pub fn sv_pick(hue_degrees: f64, size: u32, x: i32, y: i32) -> Option<Rgb> {
    let inside = |c: i32| (0..size as i64).contains(&(c as i64));
    if !inside(x) || !inside(y) {
        return None;
    }
    Some(pick(hue_degrees, size, x as u32, y as u32))
}

fn pick(hue_degrees: f64, size: u32, x: u32, y: u32) -> Rgb {
    let span = size.saturating_sub(1).max(1) as f64;
    let hue = (hue_degrees / 360.0).rem_euclid(1.0);
    Hsv::new(hue, x as f64 / span, 1.0 - y as f64 / span).to_rgb()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners() {
        let square = sv_square(0.0, 180);
        assert_eq!(square.get(0, 0), Some(Rgb::white()));
        assert_eq!(square.get(179, 0), Some(Rgb::new(255, 0, 0)));
        assert_eq!(square.get(0, 179), Some(Rgb::black()));
        assert_eq!(square.get(179, 179), Some(Rgb::black()));
    }

    #[test]
    fn hue_selects_the_pure_color() {
        let square = sv_square(120.0, 16);
        assert_eq!(square.get(15, 0), Some(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn pick_matches_square_and_rejects_outside() {
        let square = sv_square(200.0, 32);
        assert_eq!(sv_pick(200.0, 32, 7, 19), square.get(7, 19));
        assert_eq!(sv_pick(200.0, 32, -1, 3), None);
        assert_eq!(sv_pick(200.0, 32, 3, 32), None);
    }
}
