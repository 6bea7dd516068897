use crate::gradient::{GradientKind, GradientSpec};

/// One-line CSS `background` declaration for `spec`.
///
/// The angle is written as stored. Stop offsets are percentages with one
/// decimal.
pub fn css(spec: &GradientSpec) -> String {
    let stops = spec
        .stops()
        .iter()
        .map(|s| format!("{} {:.1}%", s.color, s.position * 100.0))
        .collect::<Vec<_>>()
        .join(", ");

    match spec.kind() {
        GradientKind::Linear => {
            format!("background: linear-gradient({}deg, {stops});", spec.angle_degrees())
        }
        GradientKind::Radial => format!("background: radial-gradient(circle, {stops});"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::gradient::Stop;

    #[test]
    fn linear_declaration() {
        let spec = GradientSpec::new(
            GradientKind::Linear,
            90,
            &[Rgb::new(255, 0, 0), Rgb::new(0, 0, 255)],
        )
        .unwrap();
        assert_eq!(
            css(&spec),
            "background: linear-gradient(90deg, #FF0000 0.0%, #0000FF 100.0%);"
        );
    }

    #[test]
    fn radial_declaration_with_uneven_stops() {
        let stops = vec![
            Stop::new(0.0, Rgb::white()),
            Stop::new(1.0 / 3.0, Rgb::new(0x11, 0x99, 0x8E)),
            Stop::new(1.0, Rgb::black()),
        ];
        let spec = GradientSpec::from_stops(GradientKind::Radial, 45, stops).unwrap();
        assert_eq!(
            css(&spec),
            "background: radial-gradient(circle, #FFFFFF 0.0%, #11998E 33.3%, #000000 100.0%);"
        );
    }
}
