//! Stop editing contract.
//!
//! Every operation either applies fully or returns an error and leaves the
//! spec untouched.

use crate::color::{is_valid_hex, Rgb};
use crate::error::{GradientError, Result};

use super::{GradientSpec, Stop, MAX_STOPS, MIN_GAP, MIN_STOPS};

impl GradientSpec {
    /// Inserts a stop at `fraction` colored with whatever the gradient shows
    /// there already, and returns its index.
    ///
    /// Other positions are not touched. Rejected when the spec is full or
    /// when an existing stop sits within `MIN_GAP` of `fraction`.
    pub fn add_stop_at(&mut self, fraction: f64) -> Result<usize> {
        if self.stops.len() >= MAX_STOPS {
            return Err(GradientError::MaxStopsReached { max: MAX_STOPS });
        }
        if fraction.is_nan() {
            return Err(GradientError::InvalidFraction(fraction));
        }
        let fraction = fraction.clamp(0.0, 1.0);
        if self.stops.iter().any(|s| (s.position - fraction).abs() < MIN_GAP) {
            return Err(GradientError::StopTooClose { fraction });
        }

        let color = self.color_at(fraction);
        let index = self.stops.partition_point(|s| s.position < fraction);
        self.stops.insert(index, Stop::new(fraction, color));
        log::debug!("added stop {index} at {fraction:.3} ({color})");
        Ok(index)
    }

    /// Removes the stop at `index` and returns it.
    ///
    /// Remaining positions are left where they are; removal opens a gap rather
    /// than respacing. A lone survivor would be recentered at 0.5, but the
    /// `MIN_STOPS` floor means two stops always remain.
    pub fn remove_stop(&mut self, index: usize) -> Result<Stop> {
        if self.stops.len() <= MIN_STOPS {
            return Err(GradientError::MinStopsRequired { min: MIN_STOPS });
        }
        self.check_index(index)?;

        let removed = self.stops.remove(index);
        if let [only] = self.stops.as_mut_slice() {
            only.position = 0.5;
        }
        log::debug!("removed stop {index} ({})", removed.color);
        Ok(removed)
    }

    /// Moves the stop at `index` toward `requested` and returns where it landed.
    ///
    /// The request is clamped to `[0, 1]` and then to `MIN_GAP` inside each
    /// neighbour, so a stop can be pushed against a neighbour but never past
    /// it. Indices keep their identity for the whole drag.
    pub fn move_stop(&mut self, index: usize, requested: f64) -> Result<f64> {
        self.check_index(index)?;

        let mut applied = if requested.is_nan() {
            self.stops[index].position
        } else {
            requested.clamp(0.0, 1.0)
        };
        if index > 0 {
            applied = applied.max(self.stops[index - 1].position + MIN_GAP);
        }
        if let Some(right) = self.stops.get(index + 1) {
            applied = applied.min(right.position - MIN_GAP);
        }

        self.stops[index].position = applied;
        Ok(applied)
    }

    /// Sets the color of the stop at `index` from user-typed `#RRGGBB` text.
    ///
    /// Returns the previous color. Invalid text is rejected and the prior color
    /// stays.
    pub fn recolor_stop(&mut self, index: usize, hex: &str) -> Result<Rgb> {
        let hex = hex.trim();
        if !is_valid_hex(hex) {
            return Err(GradientError::MalformedColor(hex.to_string()));
        }
        let color = Rgb::from_hex(hex)?;
        self.set_stop_color(index, color)
    }

    /// Sets the color of the stop at `index`, returning the previous one.
    pub fn set_stop_color(&mut self, index: usize, color: Rgb) -> Result<Rgb> {
        self.check_index(index)?;
        let previous = std::mem::replace(&mut self.stops[index].color, color);
        log::debug!("stop {index} recolored {previous} -> {color}");
        Ok(previous)
    }

    /// Replaces every stop with `colors`, evenly spaced.
    pub fn load_preset(&mut self, colors: &[Rgb]) -> Result<()> {
        self.replace_colors(colors)?;
        log::debug!("loaded {} preset colors", colors.len());
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.stops.len() {
            Ok(())
        } else {
            Err(GradientError::StopIndexOutOfRange { index, len: self.stops.len() })
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::gradient::GradientKind;

    const BLACK: Rgb = Rgb::black();
    const WHITE: Rgb = Rgb::white();

    fn at(positions: &[f64]) -> GradientSpec {
        let stops = positions
            .iter()
            .enumerate()
            .map(|(i, p)| Stop::new(*p, Rgb::new(i as u8 * 30, 0, 0)))
            .collect();
        GradientSpec::from_stops(GradientKind::Linear, 0, stops).unwrap()
    }

    fn assert_ordered(spec: &GradientSpec) {
        for w in spec.stops().windows(2) {
            assert!(
                w[1].position - w[0].position >= MIN_GAP - 1e-9,
                "stops too close: {:?}",
                spec.positions()
            );
        }
        assert!(spec.stops().iter().all(|s| (0.0..=1.0).contains(&s.position)));
    }

    // ── add ───────────────────────────────────────────────────────────────

    #[test]
    fn add_inserts_interpolated_color_in_order() {
        let mut spec = GradientSpec::linear(&[BLACK, WHITE]).unwrap();
        let idx = spec.add_stop_at(0.5).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(spec.positions(), vec![0.0, 0.5, 1.0]);
        assert_eq!(spec.stops()[1].color.to_hex(), "#7F7F7F");
    }

    #[test]
    fn add_keeps_other_positions() {
        let mut spec = at(&[0.1, 0.7]);
        spec.add_stop_at(0.3).unwrap();
        assert_eq!(spec.positions(), vec![0.1, 0.3, 0.7]);
    }

    #[test]
    fn add_near_existing_stop_is_rejected() {
        let mut spec = at(&[0.0, 0.5, 1.0]);
        let err = spec.add_stop_at(0.505).unwrap_err();
        assert!(matches!(err, GradientError::StopTooClose { .. }));
        assert_eq!(spec.len(), 3);
    }

    #[test]
    fn add_clamps_fraction() {
        let mut spec = at(&[0.2, 0.8]);
        let idx = spec.add_stop_at(-3.0).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(spec.stops()[0].position, 0.0);
    }

    #[test]
    fn add_rejects_nan() {
        let mut spec = at(&[0.2, 0.8]);
        assert!(matches!(spec.add_stop_at(f64::NAN), Err(GradientError::InvalidFraction(_))));
        assert_eq!(spec.len(), 2);
    }

    #[test]
    fn add_stops_at_eight() {
        let mut spec = at(&[0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7]);
        for f in [0.75, 0.9, 1.0, 0.05] {
            assert!(matches!(
                spec.add_stop_at(f),
                Err(GradientError::MaxStopsReached { max: 8 })
            ));
        }
        assert_eq!(spec.len(), 8);
    }

    // ── remove ────────────────────────────────────────────────────────────

    #[test]
    fn remove_leaves_gap() {
        let mut spec = at(&[0.0, 0.3, 0.6, 1.0]);
        let removed = spec.remove_stop(1).unwrap();
        assert_eq!(removed.position, 0.3);
        assert_eq!(spec.positions(), vec![0.0, 0.6, 1.0]);
    }

    #[test]
    fn remove_never_goes_below_two() {
        let mut spec = at(&[0.0, 0.5, 1.0]);
        spec.remove_stop(2).unwrap();
        for i in [0, 1, 0] {
            assert!(matches!(
                spec.remove_stop(i),
                Err(GradientError::MinStopsRequired { min: 2 })
            ));
        }
        assert_eq!(spec.len(), 2);
    }

    #[test]
    fn remove_out_of_range() {
        let mut spec = at(&[0.0, 0.5, 1.0]);
        assert!(matches!(
            spec.remove_stop(7),
            Err(GradientError::StopIndexOutOfRange { index: 7, len: 3 })
        ));
        assert_eq!(spec.len(), 3);
    }

    // ── move ──────────────────────────────────────────────────────────────

    #[test]
    fn drag_clamps_at_right_neighbour() {
        let mut spec = at(&[0.2, 0.5, 0.8]);
        let applied = spec.move_stop(1, 0.9).unwrap();
        assert!((applied - 0.79).abs() < 1e-9, "{applied}");
        assert_eq!(spec.stops()[1].position, applied);
    }

    #[test]
    fn drag_clamps_at_left_neighbour() {
        let mut spec = at(&[0.2, 0.5, 0.8]);
        let applied = spec.move_stop(1, 0.0).unwrap();
        assert!((applied - 0.21).abs() < 1e-9, "{applied}");
    }

    #[test]
    fn drag_end_stops_clamp_to_unit_range() {
        let mut spec = at(&[0.2, 0.5, 0.8]);
        assert_eq!(spec.move_stop(0, -0.4).unwrap(), 0.0);
        assert_eq!(spec.move_stop(2, 1.7).unwrap(), 1.0);
    }

    #[test]
    fn drag_never_reorders() {
        let mut spec = at(&[0.2, 0.5, 0.8]);
        let before = spec.colors();
        spec.move_stop(0, 0.95).unwrap();
        assert_eq!(spec.colors(), before);
        assert_ordered(&spec);
    }

    #[test]
    fn drag_nan_keeps_position() {
        let mut spec = at(&[0.2, 0.5, 0.8]);
        assert_eq!(spec.move_stop(1, f64::NAN).unwrap(), 0.5);
    }

    // ── recolor ───────────────────────────────────────────────────────────

    #[test]
    fn recolor_accepts_valid_hex() {
        let mut spec = at(&[0.0, 1.0]);
        let prev = spec.recolor_stop(1, "#00ff80").unwrap();
        assert_eq!(prev, Rgb::new(30, 0, 0));
        assert_eq!(spec.stops()[1].color.to_hex(), "#00FF80");
    }

    #[test]
    fn recolor_rejects_invalid_and_keeps_color() {
        let mut spec = at(&[0.0, 1.0]);
        for bad in ["00FF80", "#00FF8", "#00FF8G", "red"] {
            assert!(matches!(spec.recolor_stop(0, bad), Err(GradientError::MalformedColor(_))));
        }
        assert_eq!(spec.stops()[0].color, Rgb::new(0, 0, 0));
    }

    // ── preset ────────────────────────────────────────────────────────────

    #[test]
    fn preset_respaces_evenly() {
        let mut spec = at(&[0.1, 0.15, 0.9]);
        spec.load_preset(&[BLACK, WHITE, BLACK, WHITE]).unwrap();
        let expected = [0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0];
        for (p, e) in spec.positions().iter().zip(expected) {
            assert!((p - e).abs() < 1e-12);
        }
    }

    // ── invariant under random edits ──────────────────────────────────────

    #[test]
    fn random_edit_sequences_keep_order() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let mut spec = GradientSpec::linear(&[BLACK, WHITE]).unwrap();
            for _ in 0..200 {
                let f: f64 = rng.random_range(-0.2..1.2);
                match rng.random_range(0..3) {
                    0 => {
                        let _ = spec.add_stop_at(f);
                    }
                    1 => {
                        let i = rng.random_range(0..spec.len());
                        let _ = spec.remove_stop(i);
                    }
                    _ => {
                        let i = rng.random_range(0..spec.len());
                        spec.move_stop(i, f).unwrap();
                    }
                }
                assert_ordered(&spec);
                assert!((MIN_STOPS..=MAX_STOPS).contains(&spec.len()));
            }
        }
    }
}
