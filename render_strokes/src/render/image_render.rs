#[cfg(feature="render_png")]
mod render_png {
    use super::super::composite::*;
    use super::super::error::*;
    use super::super::frame_size::*;
    use super::super::render_target_trait::*;

    use crate::raster::*;

    use std::io::{Write, BufWriter};

    ///
    /// Render target that outputs a PNG file to a stream
    ///
    /// Drawings are composited on to a transparent image, which is written out when `finish()` is called
    ///
    pub struct PngRenderTarget<TStream>
    where
        TStream: Write,
    {
        target: BufWriter<TStream>,
        image:  StrokeBuffer,
    }

    impl<TStream> PngRenderTarget<TStream>
    where
        TStream: Write,
    {
        ///
        /// Creates a PNG writer that will write to a stream
        ///
        pub fn from_stream(target: TStream, width: usize, height: usize) -> Self {
            Self::from_bufwriter(BufWriter::new(target), width, height)
        }

        ///
        /// Creates a PNG writer that will write to a bufwriter
        ///
        pub fn from_bufwriter(target: BufWriter<TStream>, width: usize, height: usize) -> Self {
            PngRenderTarget {
                target: target,
                image:  StrokeBuffer::new(width, height),
            }
        }

        ///
        /// The image that will be written when this target is finished
        ///
        pub fn image(&self) -> &StrokeBuffer {
            &self.image
        }

        ///
        /// Writes the image to the stream as a PNG file
        ///
        pub fn finish(self) -> Result<(), RenderError> {
            let mut encoder = png::Encoder::new(self.target, self.image.width() as u32, self.image.height() as u32);

            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(self.image.as_bytes())?;
            writer.finish()?;

            Ok(())
        }
    }

    impl<TStream> RenderTarget for PngRenderTarget<TStream>
    where
        TStream: Write,
    {
        fn frame_size(&self) -> FrameSize {
            FrameSize { width: self.image.width(), height: self.image.height() }
        }

        fn composite(&mut self, layer: &StrokeBuffer) {
            composite_pixels(layer.pixels(), self.image.pixels_mut());
        }
    }
}

#[cfg(feature="render_png")]
pub use render_png::*;
