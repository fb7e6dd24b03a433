use super::composite::*;
use super::error::*;
use super::frame_size::*;
use super::render_target_trait::*;

use crate::pixel::*;
use crate::raster::*;

///
/// A render target of a frame of u8 pixels with straight (not premultiplied) alpha
///
/// This is the same format as an HTML canvas `ImageData` object or a PNG file, so it can be used to draw on top of
/// an existing image.
///
pub struct RgbaFrame<'a> {
    width:      usize,
    height:     usize,
    pixel_data: &'a mut [U8RgbaPixel],
}

impl<'a> RgbaFrame<'a> {
    ///
    /// Creates a RgbaFrame render target from a buffer of U8RgbaPixel pixels (returns an error if the buffer is not big enough)
    ///
    #[inline]
    pub fn from_pixels(width: usize, height: usize, data: &'a mut [U8RgbaPixel]) -> Result<Self, RenderError> {
        if data.len() < width*height {
            Err(RenderError::BufferTooSmall { width: width, height: height, required: width*height*4, actual: data.len()*4 })
        } else {
            Ok(RgbaFrame {
                width:      width,
                height:     height,
                pixel_data: data,
            })
        }
    }

    ///
    /// Creates a RgbaFrame render target from a buffer of u8 values (which will be rendered as R, G, B, A pixels)
    ///
    #[inline]
    pub fn from_bytes(width: usize, height: usize, data: &'a mut [u8]) -> Result<Self, RenderError> {
        if data.len() < width*height*4 {
            Err(RenderError::BufferTooSmall { width: width, height: height, required: width*height*4, actual: data.len() })
        } else {
            Self::from_pixels(width, height, data.to_rgba_slice_mut())
        }
    }

    ///
    /// The pixels that this frame renders to
    ///
    #[inline]
    pub fn pixels(&self) -> &[U8RgbaPixel] {
        &self.pixel_data[..]
    }
}

impl<'a> RenderTarget for RgbaFrame<'a> {
    fn frame_size(&self) -> FrameSize {
        FrameSize { width: self.width, height: self.height }
    }

    fn composite(&mut self, layer: &StrokeBuffer) {
        let num_pixels = self.frame_size().num_pixels();

        if let Some(pixel_data) = self.pixel_data.get_mut(0..num_pixels) {
            composite_pixels(layer.pixels(), pixel_data);
        }
    }
}
