///
/// Computes how much a pixel is covered by a stroke, given the width of the stroke and the distance from the pixel
/// centre to the centre line of the stroke
///
/// Strokes at least 1 pixel wide have a half-pixel antialiased edge. Narrower strokes are drawn as if they were 1 pixel
/// wide, with the coverage scaled down by the width.
///
/// The coverage never increases as the distance increases, so the rasterizer can stop scanning outwards from a stroke
/// as soon as it finds a pixel with no coverage. NaN values produce 0 coverage.
///
#[inline]
pub fn stroke_coverage(width: f64, distance: f64) -> f64 {
    // f64::max() and min() discard NaN, so a NaN width has to be caught here
    if width.is_nan() { return 0.0; }

    let coverage = (width.max(1.0)*0.5 + 0.5 - distance) * width.min(1.0);

    coverage.max(0.0).min(1.0)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn centre_of_wide_line_is_covered() {
        assert!(stroke_coverage(1.0, 0.0) == 1.0);
        assert!(stroke_coverage(4.0, 1.5) == 1.0);
    }

    #[test]
    fn half_pixel_edge() {
        assert!(stroke_coverage(4.0, 2.0) == 0.5);
        assert!(stroke_coverage(4.0, 2.5) == 0.0);
        assert!(stroke_coverage(1.0, 0.5) == 0.5);
    }

    #[test]
    fn thin_line_is_fainter() {
        assert!(stroke_coverage(0.5, 0.0) == 0.5);
        assert!(stroke_coverage(0.0, 0.0) == 0.0);
    }

    #[test]
    fn never_increases_with_distance() {
        for width in [0.25, 1.0, 2.5, 7.0].iter() {
            let mut last = stroke_coverage(*width, 0.0);

            for step in 1..100 {
                let coverage = stroke_coverage(*width, (step as f64) * 0.1);
                assert!(coverage <= last, "width={:?} distance={:?}", width, (step as f64) * 0.1);
                last = coverage;
            }
        }
    }

    #[test]
    fn nan_is_uncovered() {
        assert!(stroke_coverage(f64::NAN, 0.0) == 0.0);
        assert!(stroke_coverage(1.0, f64::NAN) == 0.0);
    }
}
