mod sampler;
mod drawing_context;

pub use sampler::*;
pub use drawing_context::*;
