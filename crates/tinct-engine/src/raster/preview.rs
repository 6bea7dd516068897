use crate::color::Rgb;
use crate::gradient::GradientSpec;

use super::field::Field;
use super::projection::Projection;

/// Renders a preview of `spec`, sampling once per `cell × cell` block.
///
/// Each block takes the color at its center pixel. Radial previews use
/// rectangular rings so the last stop shows along every edge.
pub fn render_preview(spec: &GradientSpec, width: u32, height: u32, cell: u32) -> Field {
    let cell = cell.max(1);
    let cols = width.div_ceil(cell);
    let rows = height.div_ceil(cell);
    let projection = Projection::preview(spec, width, height);

    let center = |block: u32, size: u32| (block * cell + cell / 2).min(size.saturating_sub(1));
    let mut samples: Vec<Rgb> = Vec::with_capacity(cols as usize * rows as usize);
    for row in 0..rows {
        for col in 0..cols {
            let f = projection.fraction(center(col, width), center(row, height));
            samples.push(spec.color_at(f));
        }
    }

    Field::from_fn(width, height, |x, y| {
        samples[(y / cell) as usize * cols as usize + (x / cell) as usize]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::GradientKind;
    use crate::raster::render_field;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[test]
    fn unit_cells_match_export_for_linear() {
        let spec = GradientSpec::new(GradientKind::Linear, 45, &[RED, BLUE]).unwrap();
        assert_eq!(render_preview(&spec, 33, 17, 1), render_field(&spec, 33, 17));
    }

    #[test]
    fn blocks_are_uniform_and_size_is_kept() {
        let spec = GradientSpec::new(GradientKind::Linear, 30, &[RED, BLUE]).unwrap();
        let field = render_preview(&spec, 10, 7, 4);
        assert_eq!((field.width(), field.height()), (10, 7));
        assert_eq!(field.pixels().len(), 70);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(field.get(x, y), field.get(0, 0));
            }
        }
    }

    #[test]
    fn radial_preview_shows_last_stop_on_edges() {
        let spec = GradientSpec::new(GradientKind::Radial, 0, &[RED, BLUE]).unwrap();
        let field = render_preview(&spec, 40, 20, 1);
        assert_eq!(field.get(20, 10), Some(RED));
        assert_eq!(field.get(0, 10), Some(BLUE));
        assert_eq!(field.get(20, 0), Some(BLUE));
    }

    #[test]
    fn zero_cell_is_treated_as_one() {
        let spec = GradientSpec::linear(&[RED, BLUE]).unwrap();
        assert_eq!(render_preview(&spec, 8, 2, 0), render_preview(&spec, 8, 2, 1));
    }
}
