use super::alpha_blend_trait::*;
use super::u8_rgba::*;

use wide::*;

use std::ops::{Add, Mul};

///
/// A pixel using floating-point components, with the alpha value pre-multiplied
///
/// Colours need to be premultiplied to be interpolated or blended correctly when their alpha values differ
///
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct F32PremultipliedPixel(f32x4);

impl Default for F32PremultipliedPixel {
    #[inline]
    fn default() -> Self {
        F32PremultipliedPixel(f32x4::splat(0.0))
    }
}

impl F32PremultipliedPixel {
    ///
    /// Returns the premultiplied components of this pixel
    ///
    #[inline]
    pub fn to_components(&self) -> [f32; 4] {
        self.0.to_array()
    }

    ///
    /// The alpha value of this pixel
    ///
    #[inline]
    pub fn alpha_component(&self) -> f32 {
        self.to_components()[3]
    }

    ///
    /// Creates a pixel from a colour that has not been premultiplied
    ///
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        F32PremultipliedPixel(f32x4::new([r, g, b, 1.0]) * a)
    }

    ///
    /// Converts a U8 pixel (with straight alpha) to a premultiplied pixel
    ///
    #[inline]
    pub fn from_u8(pixel: U8RgbaPixel) -> Self {
        let [r, g, b, a] = pixel.get_components();
        let rgba = f32x4::new([r as f32, g as f32, b as f32, a as f32]) / f32x4::splat(255.0);
        let a    = rgba.as_array_ref()[3];

        F32PremultipliedPixel(rgba * f32x4::new([a, a, a, 1.0]))
    }

    ///
    /// Returns the components of this pixel with the premultiplication removed
    ///
    /// A pixel with no alpha has no colour, so this returns 0 for every component in that case
    ///
    #[inline]
    pub fn to_straight(&self) -> [f32; 4] {
        let alpha = self.alpha_component();

        if alpha > 0.0 {
            (self.0 / f32x4::new([alpha, alpha, alpha, 1.0])).to_array()
        } else {
            [0.0, 0.0, 0.0, 0.0]
        }
    }

    ///
    /// Converts this pixel to a U8 pixel with straight alpha
    ///
    #[inline]
    pub fn to_u8(&self) -> U8RgbaPixel {
        let [r, g, b, a] = self.to_straight();

        U8RgbaPixel::from_unit_components(r as f64, g as f64, b as f64, a as f64)
    }

    ///
    /// Linearly interpolates between two pixels (`t` is not clamped)
    ///
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self * (1.0-t) + other * t
    }
}

impl AlphaBlend for F32PremultipliedPixel {
    #[inline]
    fn source_over(self, dest: Self) -> Self {
        let src_alpha = self.alpha_component();

        F32PremultipliedPixel(self.0 + dest.0*(1.0-src_alpha))
    }
}

impl Add<F32PremultipliedPixel> for F32PremultipliedPixel {
    type Output=F32PremultipliedPixel;

    #[inline]
    fn add(self, val: F32PremultipliedPixel) -> F32PremultipliedPixel {
        F32PremultipliedPixel(self.0 + val.0)
    }
}

impl Mul<f32> for F32PremultipliedPixel {
    type Output=F32PremultipliedPixel;

    #[inline]
    fn mul(self, val: f32) -> F32PremultipliedPixel {
        F32PremultipliedPixel(self.0 * val)
    }
}
