///
/// Trait implemented by pixel types that support alpha blending (the pixel values are expected to be premultiplied)
///
pub trait AlphaBlend : Sized + Copy {
    /// Blends this pixel on top of `dest` (the standard 'normal' compositing operation)
    fn source_over(self, dest: Self) -> Self;
}
