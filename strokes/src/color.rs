use super::point_sample::*;

///
/// Converts a hue, saturation and lightness to a point sample with the equivalent RGB colour
///
/// The hue is measured in turns (0.0 and 1.0 are both red) and wraps around, so it can be driven directly by
/// the parameter of a stroke. The saturation and lightness are in the range 0..1. The alpha field is only set
/// on the result if an alpha value is supplied.
///
pub fn hsl(h: f64, s: f64, l: f64, a: Option<f64>) -> PointSample {
    let s       = s.max(0.0).min(1.0);
    let l       = l.max(0.0).min(1.0);

    let chroma  = (1.0 - (2.0*l - 1.0).abs()) * s;
    let sector  = (h - h.floor()) * 6.0;
    let second  = chroma * (1.0 - ((sector % 2.0) - 1.0).abs());
    let offset  = l - chroma/2.0;

    let (r, g, b) = match sector.floor() as i32 {
        0 => (chroma, second, 0.0),
        1 => (second, chroma, 0.0),
        2 => (0.0, chroma, second),
        3 => (0.0, second, chroma),
        4 => (second, 0.0, chroma),
        _ => (chroma, 0.0, second),
    };

    PointSample {
        r: Some(r + offset),
        g: Some(g + offset),
        b: Some(b + offset),
        a: a,
        ..PointSample::default()
    }
}
