use std::slice;

///
/// An RGBA pixel as a set of u8 values
///
/// The alpha value is not premultiplied: this is the same layout as the pixels in an HTML canvas `ImageData` object
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct U8RgbaPixel([u8; 4]);

impl U8RgbaPixel {
    ///
    /// Creates a new U8 pixel from the component bytes
    ///
    #[inline]
    pub fn from_components(components: [u8; 4]) -> Self {
        U8RgbaPixel(components)
    }

    ///
    /// Creates a pixel from components in the range 0..1 (values outside of this range are clamped)
    ///
    #[inline]
    pub fn from_unit_components(r: f64, g: f64, b: f64, a: f64) -> Self {
        U8RgbaPixel([unit_to_u8(r), unit_to_u8(g), unit_to_u8(b), unit_to_u8(a)])
    }

    ///
    /// Retrieves the RGBA values from this pixel
    ///
    #[inline]
    pub fn get_components(&self) -> [u8; 4] {
        self.0
    }

    /// The alpha component of this pixel
    #[inline]
    pub fn alpha(&self) -> u8 {
        self.0[3]
    }

    /// The alpha component of this pixel in the range 0..1
    #[inline]
    pub fn unit_alpha(&self) -> f64 {
        (self.alpha() as f64) / 255.0
    }

    /// True if this pixel is completely transparent
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.alpha() == 0
    }

    /// True if this pixel is completely opaque
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.alpha() == 255
    }
}

///
/// Converts a value in the range 0..1 to a byte (NaN is treated as 0)
///
#[inline]
fn unit_to_u8(val: f64) -> u8 {
    (val * 255.0).round().max(0.0).min(255.0) as u8
}

impl Default for U8RgbaPixel {
    #[inline]
    fn default() -> Self {
        U8RgbaPixel([0, 0, 0, 0])
    }
}

pub trait ToRgbaU8Slice {
    /// Returns the pixels as a single slice of u8 values
    fn to_rgba_u8_slice(&self) -> &[u8];

    /// Returns the pixels as a mutable single slice of u8 values
    fn to_rgba_u8_slice_mut(&mut self) -> &mut [u8];
}

pub trait ToRgbaPixels {
    /// Converts a slice of `u8` values to a slice of U8RgbaPixels
    ///
    /// If the slice is not a multiple of 4, then no pixels are generated at the end
    fn to_rgba_slice(&self) -> &[U8RgbaPixel];

    /// Converts a slice of `u8` values to a mutable slice of U8RgbaPixels
    fn to_rgba_slice_mut(&mut self) -> &mut [U8RgbaPixel];
}

impl ToRgbaU8Slice for [U8RgbaPixel] {
    #[inline]
    fn to_rgba_u8_slice(&self) -> &[u8] {
        // U8RgbaPixel is repr(C) around [u8; 4] so has the same layout and alignment as 4 bytes
        unsafe {
            slice::from_raw_parts(self.as_ptr() as *const u8, self.len()*4)
        }
    }

    #[inline]
    fn to_rgba_u8_slice_mut(&mut self) -> &mut [u8] {
        unsafe {
            slice::from_raw_parts_mut(self.as_mut_ptr() as *mut u8, self.len()*4)
        }
    }
}

impl ToRgbaPixels for [u8] {
    #[inline]
    fn to_rgba_slice(&self) -> &[U8RgbaPixel] {
        unsafe {
            slice::from_raw_parts(self.as_ptr() as *const U8RgbaPixel, self.len()/4)
        }
    }

    #[inline]
    fn to_rgba_slice_mut(&mut self) -> &mut [U8RgbaPixel] {
        unsafe {
            slice::from_raw_parts_mut(self.as_mut_ptr() as *mut U8RgbaPixel, self.len()/4)
        }
    }
}
