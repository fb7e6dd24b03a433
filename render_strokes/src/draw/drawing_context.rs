use super::sampler::*;

use crate::raster::*;
use crate::render::*;

use flo_strokes::*;

///
/// A `DrawingContext` holds a list of strokes that are rendered together
///
/// All the strokes in a context are rasterized into a single transparent layer, which is then blended with the render
/// target in one operation. This means that overlapping semi-transparent strokes from the same context combine as a
/// group rather than darkening wherever they cross.
///
#[derive(Clone, Debug)]
pub struct DrawingContext {
    /// The number of straight segments used to draw each stroke (higher values produce smoother curves)
    pub segmentation:   usize,

    /// The values used for any fields that a stroke leaves undefined
    pub default_point:  ResolvedPoint,

    /// The strokes to render, in order
    strokes:            Vec<StrokeExpression>,
}

impl Default for DrawingContext {
    fn default() -> Self {
        DrawingContext::new()
    }
}

impl DrawingContext {
    ///
    /// Creates an empty drawing context
    ///
    pub fn new() -> DrawingContext {
        DrawingContext {
            segmentation:   256,
            default_point:  ResolvedPoint::default(),
            strokes:        vec![],
        }
    }

    ///
    /// Returns this context with a different segmentation value
    ///
    pub fn with_segmentation(mut self, segmentation: usize) -> DrawingContext {
        self.segmentation = segmentation;
        self
    }

    ///
    /// Returns this context with a different default point
    ///
    pub fn with_default_point(mut self, default_point: ResolvedPoint) -> DrawingContext {
        self.default_point = default_point;
        self
    }

    ///
    /// Adds some strokes to the end of this context
    ///
    pub fn add(&mut self, strokes: impl IntoIterator<Item=StrokeExpression>) {
        self.strokes.extend(strokes);
    }

    ///
    /// Adds a single stroke to the end of this context
    ///
    pub fn add_stroke(&mut self, stroke: StrokeExpression) {
        self.strokes.push(stroke);
    }

    ///
    /// Removes all of the strokes from this context
    ///
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    ///
    /// The strokes in this context
    ///
    pub fn strokes(&self) -> &[StrokeExpression] {
        &self.strokes
    }

    ///
    /// Rasterizes the strokes in this context to a new layer
    ///
    pub fn render_layer(&self, width: usize, height: usize) -> StrokeBuffer {
        let mut layer = StrokeBuffer::new(width, height);

        for stroke in self.strokes.iter() {
            rasterize_stroke(&mut layer, stroke, &self.default_point, self.segmentation);
        }

        layer
    }

    ///
    /// Draws the strokes in this context on to a render target
    ///
    pub fn draw(&self, target: &mut impl RenderTarget) {
        let size = target.frame_size();

        log::debug!("Drawing {} strokes to a {}x{} frame (segmentation {})", self.strokes.len(), size.width, size.height, self.segmentation);

        if self.strokes.is_empty() { return; }

        let layer = self.render_layer(size.width, size.height);
        target.composite(&layer);
    }
}
