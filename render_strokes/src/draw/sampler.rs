use crate::raster::*;

use flo_strokes::*;

use itertools::*;

///
/// Evaluates a stroke at `segmentation+1` evenly spaced points from 0 to 1, filling in any undefined fields from a default point
///
/// A segmentation of 0 produces no points
///
pub fn sample_stroke(stroke: &StrokeExpression, default_point: &ResolvedPoint, segmentation: usize) -> Vec<ResolvedPoint> {
    if segmentation == 0 { return vec![]; }

    (0..=segmentation)
        .map(|idx| (idx as f64) / (segmentation as f64))
        .map(|t| default_point.merge(&stroke.evaluate(t)))
        .collect()
}

///
/// Renders a stroke into a stroke buffer as a series of straight segments
///
pub fn rasterize_stroke(buffer: &mut StrokeBuffer, stroke: &StrokeExpression, default_point: &ResolvedPoint, segmentation: usize) {
    let points = sample_stroke(stroke, default_point, segmentation);

    if let Some(first) = points.first() {
        log::trace!("Rasterizing stroke with {} points from ({}, {})", points.len(), first.x, first.y);

        // Segments never draw their start cap, so the stroke starts with a zero-length segment that just draws the cap
        draw_segment(buffer, first, first);
    } else {
        log::debug!("Stroke has a segmentation of 0, so will not be drawn");
    }

    for (start, end) in points.iter().tuple_windows() {
        draw_segment(buffer, start, end);
    }
}
