use super::composite::*;
use super::frame_size::*;

use crate::raster::*;

///
/// Trait implemented by surfaces that drawings can be rendered to
///
/// A drawing is rasterized into a transparent `StrokeBuffer` the same size as the frame, which is then passed to
/// `composite` to be blended with whatever the target already contains.
///
pub trait RenderTarget {
    ///
    /// The size of this render target in pixels
    ///
    fn frame_size(&self) -> FrameSize;

    ///
    /// Blends a layer on top of this target (the layer will be the same size as the frame)
    ///
    fn composite(&mut self, layer: &StrokeBuffer);
}

///
/// A stroke buffer can be used as a render target, which is useful for layering several drawings before generating
/// the final image
///
impl RenderTarget for StrokeBuffer {
    fn frame_size(&self) -> FrameSize {
        FrameSize { width: self.width(), height: self.height() }
    }

    fn composite(&mut self, layer: &StrokeBuffer) {
        composite_pixels(layer.pixels(), self.pixels_mut());
    }
}
