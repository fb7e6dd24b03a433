use crate::pixel::*;

///
/// A buffer of pixels that strokes are rasterized into
///
/// The buffer starts out fully transparent. Pixels are composited with a rule that avoids blending a stroke with
/// itself where its segments overlap, so a single buffer should be used for the strokes from a single drawing, and
/// then blended with the final image in one operation.
///
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeBuffer {
    width:  usize,
    height: usize,
    pixels: Vec<U8RgbaPixel>,
}

impl StrokeBuffer {
    ///
    /// Creates a new, fully transparent, stroke buffer
    ///
    pub fn new(width: usize, height: usize) -> StrokeBuffer {
        StrokeBuffer {
            width:  width,
            height: height,
            pixels: vec![U8RgbaPixel::default(); width*height],
        }
    }

    /// The width of this buffer in pixels
    #[inline]
    pub fn width(&self) -> usize { self.width }

    /// The height of this buffer in pixels
    #[inline]
    pub fn height(&self) -> usize { self.height }

    ///
    /// The pixels in this buffer, in rows from top to bottom
    ///
    #[inline]
    pub fn pixels(&self) -> &[U8RgbaPixel] {
        &self.pixels
    }

    ///
    /// The pixels in this buffer, in rows from top to bottom
    ///
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [U8RgbaPixel] {
        &mut self.pixels
    }

    ///
    /// The pixels in this buffer as RGBA bytes
    ///
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.to_rgba_u8_slice()
    }

    ///
    /// Retrieves the pixel at a particular position, or None if the position is outside of the buffer
    ///
    #[inline]
    pub fn pixel(&self, x: i64, y: i64) -> Option<U8RgbaPixel> {
        self.index(x, y).map(|idx| self.pixels[idx])
    }

    ///
    /// Sets every pixel in this buffer back to transparent
    ///
    pub fn clear(&mut self) {
        self.pixels.iter_mut().for_each(|pixel| *pixel = U8RgbaPixel::default());
    }

    ///
    /// Returns the index of a pixel, or None if it's outside the buffer
    ///
    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            None
        } else {
            Some((y as usize) * self.width + (x as usize))
        }
    }

    ///
    /// Writes a stroke pixel with a colour (not premultiplied, components 0..1) and a coverage value
    ///
    /// Where the existing pixel is less covered than the new one, it is replaced. Where it is more covered and opaque,
    /// the new pixel is blended on top of it. Where it is more covered and transparent, it's left alone: this is
    /// where the segments of a semi-transparent stroke overlap, and blending would produce a visible seam.
    ///
    /// Pixels outside the buffer are ignored.
    ///
    pub fn paint_pixel(&mut self, x: i64, y: i64, color: [f32; 4], coverage: f64) {
        let idx = if let Some(idx) = self.index(x, y) { idx } else { return; };

        let [r, g, b, a]    = color;
        let coverage        = if coverage > 0.0 { coverage.min(1.0) } else { 0.0 };
        let alpha           = (a as f64).max(0.0).min(1.0) * coverage;
        let existing        = self.pixels[idx];

        if coverage >= existing.unit_alpha() {
            self.pixels[idx] = U8RgbaPixel::from_unit_components(r as f64, g as f64, b as f64, alpha);
        } else if existing.is_opaque() {
            let src = F32PremultipliedPixel::from_straight(r.max(0.0).min(1.0), g.max(0.0).min(1.0), b.max(0.0).min(1.0), alpha as f32);
            let dst = F32PremultipliedPixel::from_u8(existing);

            self.pixels[idx] = src.source_over(dst).to_u8();
        }
    }
}
