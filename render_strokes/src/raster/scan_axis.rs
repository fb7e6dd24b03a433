use flo_curves::geo::*;

use std::ops::{RangeInclusive};

///
/// Describes how pixel space is mapped to 'scan space' for rasterizing a segment
///
/// In scan space the segment always runs left to right, and is never steeper than 45 degrees, so the rasterizer
/// can step along the x axis one column at a time. Scan space is reached by optionally swapping the x and y axes
/// and then optionally negating the x axis.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanAxis {
    /// True if the x and y axes are swapped (the segment is steeper than it is wide)
    pub swap_axes: bool,

    /// True if the x axis is negated (after swapping)
    pub negate_x: bool,
}

impl ScanAxis {
    ///
    /// Chooses the scan axis for a segment between two points (in pixel space)
    ///
    pub fn for_segment(start: Coord2, end: Coord2) -> ScanAxis {
        let swap_axes   = (end.y()-start.y()).abs() > (end.x()-start.x()).abs();
        let (sx, ex)    = if swap_axes { (start.y(), end.y()) } else { (start.x(), end.x()) };

        ScanAxis {
            swap_axes:  swap_axes,
            negate_x:   sx > ex,
        }
    }

    ///
    /// Converts a point from pixel space to scan space
    ///
    #[inline]
    pub fn to_scan_space(&self, point: Coord2) -> Coord2 {
        let Coord2(x, y) = if self.swap_axes { Coord2(point.y(), point.x()) } else { point };

        if self.negate_x { Coord2(-x, y) } else { Coord2(x, y) }
    }

    ///
    /// Converts a pixel position in scan space back to pixel space
    ///
    #[inline]
    pub fn to_pixel_space(&self, x: i64, y: i64) -> (i64, i64) {
        let x = if self.negate_x { -x } else { x };

        if self.swap_axes { (y, x) } else { (x, y) }
    }

    ///
    /// The range of scan-space columns that fall inside a buffer of the specified size
    ///
    pub fn column_bounds(&self, width: usize, height: usize) -> RangeInclusive<i64> {
        let extent = if self.swap_axes { height as i64 } else { width as i64 };

        if self.negate_x {
            -(extent-1)..=0
        } else {
            0..=(extent-1)
        }
    }

    ///
    /// The range of scan-space rows that fall inside a buffer of the specified size
    ///
    pub fn row_bounds(&self, width: usize, height: usize) -> RangeInclusive<i64> {
        let extent = if self.swap_axes { width as i64 } else { height as i64 };

        0..=(extent-1)
    }
}
