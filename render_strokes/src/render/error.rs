use thiserror::Error;

///
/// Errors that can occur while setting up or writing a render target
///
#[derive(Debug, Error)]
pub enum RenderError {
    /// The buffer supplied for a frame does not have enough room for its pixels
    #[error("a {width}x{height} frame needs {required} bytes but the buffer only has {actual}")]
    BufferTooSmall { width: usize, height: usize, required: usize, actual: usize },

    /// The PNG encoder reported an error
    #[cfg(feature="render_png")]
    #[error("could not write PNG data")]
    Png(#[from] png::EncodingError),
}
