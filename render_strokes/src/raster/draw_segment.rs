use super::scan_axis::*;
use super::scan_segment::*;
use super::stroke_buffer::*;

use flo_strokes::*;

///
/// Draws a single segment of a stroke into a stroke buffer
///
/// The segment is capsule-shaped, with its width and colour interpolated between the two endpoints. The cap around
/// `start` is left out (it's the end cap of the preceding segment), unless `start` and `end` are the same point, in
/// which case a round dot is drawn. This is used to draw the start cap of a stroke.
///
pub fn draw_segment(buffer: &mut StrokeBuffer, start: &ResolvedPoint, end: &ResolvedPoint) {
    let axis    = ScanAxis::for_segment(start.position(), end.position());
    let columns = axis.column_bounds(buffer.width(), buffer.height());
    let rows    = axis.row_bounds(buffer.width(), buffer.height());

    let start   = ScanEndpoint::from_point(start, &axis);
    let end     = ScanEndpoint::from_point(end, &axis);

    scan_segment(&start, &end, columns, rows, |pixel| {
        let (x, y) = axis.to_pixel_space(pixel.x, pixel.y);
        buffer.paint_pixel(x, y, pixel.color, pixel.coverage);
    });
}
