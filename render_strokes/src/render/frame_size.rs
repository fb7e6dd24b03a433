///
/// Describes the size of a frame in pixels
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameSize {
    pub width:  usize,
    pub height: usize,
}

impl FrameSize {
    /// The number of pixels in a frame of this size
    #[inline]
    pub fn num_pixels(&self) -> usize {
        self.width * self.height
    }
}
