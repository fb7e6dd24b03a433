use super::coverage::*;
use super::scan_axis::*;

use crate::pixel::*;

use flo_strokes::*;
use flo_curves::geo::*;

use std::ops::{RangeInclusive};

///
/// One end of a segment, converted to scan space
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanEndpoint {
    /// The position of this endpoint
    pub position: Coord2,

    /// The width of the stroke at this endpoint (never negative)
    pub width: f64,

    /// The colour of the stroke at this endpoint
    pub color: F32PremultipliedPixel,
}

///
/// A pixel generated by scanning a segment
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanPixel {
    /// The column of this pixel in scan space
    pub x: i64,

    /// The row of this pixel in scan space
    pub y: i64,

    /// The colour of the stroke at this pixel (not premultiplied)
    pub color: [f32; 4],

    /// How much of the pixel is covered by the stroke
    pub coverage: f64,
}

impl ScanEndpoint {
    ///
    /// Creates a scan space endpoint from a resolved point
    ///
    pub fn from_point(point: &ResolvedPoint, axis: &ScanAxis) -> ScanEndpoint {
        let alpha = point.a.max(0.0).min(1.0) as f32;

        ScanEndpoint {
            position:   axis.to_scan_space(point.position()),
            width:      point.w.max(0.0),
            color:      F32PremultipliedPixel::from_straight(point.r as f32, point.g as f32, point.b as f32, alpha),
        }
    }

    /// True if the position and width of this endpoint are finite numbers
    #[inline]
    fn is_finite(&self) -> bool {
        self.position.x().is_finite() && self.position.y().is_finite() && self.width.is_finite()
    }
}

///
/// Scans the pixels covered by a segment whose endpoints are already in scan space (so `start` is left of `end` and the
/// segment is no steeper than 45 degrees)
///
/// Every pixel with coverage is passed to `plot`, except for the pixels in the cap before `start`: the segment before
/// this one is responsible for these. When `start` and `end` are the same point, the whole round cap is plotted.
///
/// Only pixels within `columns` and `rows` are scanned, so the time taken is limited by the size of the buffer rather
/// than by the width of the stroke.
///
pub fn scan_segment(start: &ScanEndpoint, end: &ScanEndpoint, columns: RangeInclusive<i64>, rows: RangeInclusive<i64>, mut plot: impl FnMut(ScanPixel)) {
    // Infinite widths or positions would never run out of coverage
    if !start.is_finite() || !end.is_finite() { return; }

    let delta       = end.position - start.position;
    let length_sq   = delta.dot(&delta);
    let slope       = if delta.x() != 0.0 { delta.y() / delta.x() } else { 0.0 };
    let min_y       = start.position.y().min(end.position.y());
    let max_y       = start.position.y().max(end.position.y());

    let first_col   = ((start.position.x() - start.width/2.0).floor() as i64).max(*columns.start());
    let last_col    = ((end.position.x() + end.width/2.0).ceil() as i64).min(*columns.end());

    for col in first_col..=last_col {
        // Scan outwards from the row nearest to the centre line
        let center_y    = (start.position.y() + ((col as f64) - start.position.x()) * slope).max(min_y).min(max_y);
        let center_row  = center_y.round() as i64;

        for &direction in [1, -1].iter() {
            // Rows between the centre and the buffer are never drawn, and coverage only falls moving away from the centre
            let mut row = if direction > 0 { center_row.max(*rows.start()) } else { center_row.saturating_sub(1).min(*rows.end()) };

            while rows.contains(&row) {
                let pixel       = Coord2(col as f64, row as f64);

                // Project the pixel onto the segment
                let t           = if length_sq > 0.0 { (pixel - start.position).dot(&delta) / length_sq } else { 0.0 };
                let clamped_t   = t.max(0.0).min(1.0);

                let center      = Coord2(lerp(clamped_t, start.position.x(), end.position.x()), lerp(clamped_t, start.position.y(), end.position.y()));
                let width       = lerp(clamped_t, start.width, end.width).max(0.0);
                let coverage    = stroke_coverage(width, pixel.distance_to(&center));

                // Coverage never increases moving away from the centre line
                if coverage <= 0.0 { break; }

                if t >= 0.0 {
                    let color = start.color.lerp(end.color, clamped_t as f32).to_straight();

                    plot(ScanPixel { x: col, y: row, color: color, coverage: coverage });
                }

                row += direction;
            }
        }
    }
}
