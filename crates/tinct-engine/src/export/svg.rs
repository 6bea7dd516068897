use std::fmt::Write;

use crate::gradient::{GradientKind, GradientSpec};

/// Standalone SVG document filling a `width × height` rect with `spec`.
///
/// Linear endpoints follow the angle in bounding-box units, which puts every
/// point at the same fraction the rasterizer gives it. The radial radius
/// reaches the corners.
pub fn svg(spec: &GradientSpec, width: u32, height: u32) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_document(&mut out, spec, width, height);
    out
}

fn write_document(out: &mut String, spec: &GradientSpec, width: u32, height: u32) -> std::fmt::Result {
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;
    writeln!(out, "  <defs>")?;

    let element = match spec.kind() {
        GradientKind::Linear => {
            let theta = (spec.angle_degrees() as f64).to_radians();
            let (dx, dy) = (50.0 * theta.cos(), 50.0 * theta.sin());
            writeln!(
                out,
                r#"    <linearGradient id="gradient" x1="{}%" y1="{}%" x2="{}%" y2="{}%">"#,
                pct(50.0 - dx),
                pct(50.0 - dy),
                pct(50.0 + dx),
                pct(50.0 + dy),
            )?;
            "linearGradient"
        }
        GradientKind::Radial => {
            let r = 50.0 * std::f64::consts::SQRT_2;
            writeln!(out, r#"    <radialGradient id="gradient" cx="50%" cy="50%" r="{}%">"#, pct(r))?;
            "radialGradient"
        }
    };

    for stop in spec.stops() {
        writeln!(
            out,
            r#"      <stop offset="{:.1}%" stop-color="{}"/>"#,
            stop.position * 100.0,
            stop.color
        )?;
    }

    writeln!(out, "    </{element}>")?;
    writeln!(out, "  </defs>")?;
    writeln!(out, r#"  <rect width="{width}" height="{height}" fill="url(#gradient)"/>"#)?;
    writeln!(out, "</svg>")
}

/// Up to three decimals, trailing zeros dropped.
fn pct(v: f64) -> String {
    // `+ 0.0` turns a rounded `-0.0` into `0.0`.
    let rounded = (v * 1000.0).round() / 1000.0 + 0.0;
    let s = format!("{rounded:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use resvg::tiny_skia::{Pixmap, Transform};
    use resvg::usvg::{Options, Tree};

    use super::*;
    use crate::color::Rgb;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn render(svg: &str, width: u32, height: u32) -> Pixmap {
        let tree = Tree::from_str(svg, &Options::default()).unwrap();
        let mut pixmap = Pixmap::new(width, height).unwrap();
        resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());
        pixmap
    }

    fn rgb_at(pixmap: &Pixmap, x: u32, y: u32) -> (u8, u8, u8) {
        let p = pixmap.pixel(x, y).unwrap();
        (p.red(), p.green(), p.blue())
    }

    fn close(a: (u8, u8, u8), b: Rgb) -> bool {
        let d = |x: u8, y: u8| (x as i16 - y as i16).abs() <= 8;
        d(a.0, b.r) && d(a.1, b.g) && d(a.2, b.b)
    }

    #[test]
    fn stops_are_listed_with_one_decimal() {
        let spec = GradientSpec::new(GradientKind::Linear, 0, &[RED, Rgb::white(), BLUE]).unwrap();
        let doc = svg(&spec, 800, 400);
        assert!(doc.contains(r##"<stop offset="0.0%" stop-color="#FF0000"/>"##));
        assert!(doc.contains(r##"<stop offset="50.0%" stop-color="#FFFFFF"/>"##));
        assert!(doc.contains(r##"<stop offset="100.0%" stop-color="#0000FF"/>"##));
        assert!(doc.contains(r#"<rect width="800" height="400" fill="url(#gradient)"/>"#));
    }

    #[test]
    fn zero_degrees_is_horizontal() {
        let spec = GradientSpec::linear(&[RED, BLUE]).unwrap();
        let doc = svg(&spec, 10, 10);
        assert!(doc.contains(r#"x1="0%" y1="50%" x2="100%" y2="50%""#), "{doc}");
    }

    #[test]
    fn ninety_degrees_is_vertical() {
        let spec = GradientSpec::new(GradientKind::Linear, 90, &[RED, BLUE]).unwrap();
        let doc = svg(&spec, 10, 10);
        assert!(doc.contains(r#"x1="50%" y1="0%" x2="50%" y2="100%""#), "{doc}");
    }

    #[test]
    fn rendered_linear_matches_end_stops() {
        let spec = GradientSpec::linear(&[RED, BLUE]).unwrap();
        let pixmap = render(&svg(&spec, 200, 20), 200, 20);
        assert!(close(rgb_at(&pixmap, 0, 10), RED), "{:?}", rgb_at(&pixmap, 0, 10));
        assert!(close(rgb_at(&pixmap, 199, 10), BLUE), "{:?}", rgb_at(&pixmap, 199, 10));
    }

    #[test]
    fn rendered_vertical_matches_end_stops() {
        let spec = GradientSpec::new(GradientKind::Linear, 90, &[RED, BLUE]).unwrap();
        let pixmap = render(&svg(&spec, 20, 200), 20, 200);
        assert!(close(rgb_at(&pixmap, 10, 0), RED));
        assert!(close(rgb_at(&pixmap, 10, 199), BLUE));
    }

    #[test]
    fn rendered_radial_center_and_corner() {
        let spec = GradientSpec::new(GradientKind::Radial, 0, &[RED, BLUE]).unwrap();
        let doc = svg(&spec, 100, 100);
        assert!(doc.contains("<radialGradient"));
        let pixmap = render(&doc, 100, 100);
        assert!(close(rgb_at(&pixmap, 50, 50), RED), "{:?}", rgb_at(&pixmap, 50, 50));
        assert!(close(rgb_at(&pixmap, 0, 0), BLUE), "{:?}", rgb_at(&pixmap, 0, 0));
    }

    #[test]
    fn pct_formatting() {
        assert_eq!(pct(0.0), "0");
        assert_eq!(pct(100.0), "100");
        assert_eq!(pct(-0.0000001), "0");
        assert_eq!(pct(14.6446609), "14.645");
    }
}
