use crate::pixel::*;

///
/// Blends a layer of pixels on top of a target using the standard alpha-over operation
///
/// Both sets of pixels use straight alpha. If the slices are different lengths, only the pixels they have in
/// common are blended.
///
pub fn composite_pixels(layer: &[U8RgbaPixel], target: &mut [U8RgbaPixel]) {
    for (src, dst) in layer.iter().zip(target.iter_mut()) {
        if src.is_transparent() {
            continue;
        } else if src.is_opaque() {
            *dst = *src;
        } else {
            let blended = F32PremultipliedPixel::from_u8(*src).source_over(F32PremultipliedPixel::from_u8(*dst));
            *dst = blended.to_u8();
        }
    }
}
