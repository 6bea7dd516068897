use crate::color::Rgb;

use super::{GradientSpec, Stop};

/// Color at `fraction` along the gradient axis.
///
/// Fractions at or before the first stop return its color exactly, likewise
/// at or after the last stop. In between, the bracketing pair
/// `left.position <= fraction < right.position` is blended linearly with
/// truncated channels. Preview, raster export and stop insertion all go
/// through here so they agree pixel for pixel.
pub fn color_at(spec: &GradientSpec, fraction: f64) -> Rgb {
    sample(spec.stops(), fraction)
}

pub(crate) fn sample(stops: &[Stop], fraction: f64) -> Rgb {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Rgb::black();
    };
    if fraction <= first.position {
        return first.color;
    }
    if fraction >= last.position {
        return last.color;
    }

    // Stops are few and sorted; a linear scan is enough.
    for pair in stops.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        if fraction < right.position {
            let t = (fraction - left.position) / (right.position - left.position);
            return left.color.lerp(right.color, t);
        }
    }
    last.color
}
